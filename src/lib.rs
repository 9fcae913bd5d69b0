pub mod canvas;
pub mod eval;
pub mod logging;
pub mod overlay;
pub mod session;
pub mod settings;
pub mod typeset;

pub use session::{EvaluateOutcome, Session};
