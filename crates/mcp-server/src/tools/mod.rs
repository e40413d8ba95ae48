//! Tool definitions and execution

mod error;
mod executor;
mod generator;

pub use error::ToolError;
pub use executor::{GenerateQrArgs, ToolExecutor};
pub use generator::{ToolGenerator, GENERATE_QR_CODE};
