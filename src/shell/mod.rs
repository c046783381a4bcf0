//! External tool execution.

pub mod command;
pub mod mock;

pub use command::{Invocation, SystemRunner, ToolRunner};
pub use mock::MockRunner;
