pub mod client;
pub mod env;
pub mod protocol;

pub use client::{EvalClient, EvalError};
pub use env::VariableEnvironment;
pub use protocol::{EvalEntry, EvalRequest, EvalResponse};
