/// Returns the usage guide for the outcome demo.
pub fn run() -> &'static str {
    r#"## oc guide

oc exercises the `outcome` library: every operation returns an outcome holding a severity
(success, warning, failure) and the messages recorded while it ran. Outcomes of child operations
are merged into their parent and the result is handed to a sink for reporting.

### Lucky-number rounds

Each round runs two searches for a random multiple of `--modulus` in `0..--range`, giving up after
`--attempts` draws. The first returns a plain outcome, the second also carries the number it found.
Both are reported, then the second is merged into the first and the merge is reported.

```bash
oc run                          # One round, styled console output
oc run --rounds 5 --seed 42     # Reproducible rounds
oc run --attempts 0             # Force a failure
oc run --modulus 1              # Force a hit on the first draw
oc run --json                   # Print round reports as JSON
oc run --sink tracing           # Route reports through tracing (stderr)
```

### Filtering messages

```bash
oc messages --filter info       # Only informational messages of the merged outcome
oc messages --filter error
oc messages --filter any        # Everything (default)
```

### Reading a report

A successful or warning outcome prints "The operation '<label>' completed successfully.", then its
informational messages, then (for warnings) its warnings. A failed outcome prints
"The operation '<label>' failed." followed by its errors. Messages are indented by five spaces.

### Logging

`RUST_LOG` controls the tracing subscriber (default `info`, `--verbose` for `debug`)."#
}
