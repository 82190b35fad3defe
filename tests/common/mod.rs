#![allow(dead_code)]

pub use plandag_test_utils::builders::{TaskDraftBuilder, task};
pub use plandag_test_utils::init_tracing;
