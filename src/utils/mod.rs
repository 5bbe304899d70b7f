pub mod command;
pub mod tracing;
