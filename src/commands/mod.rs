#![allow(clippy::needless_pass_by_value)]

pub mod guide;
pub mod lucky;
pub mod messages;
pub mod run;
