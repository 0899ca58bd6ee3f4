//! Cross-module behaviour tests for the widget tree

pub(crate) mod support;

mod hit_testing;
mod window_flow;
mod spinner_flow;
