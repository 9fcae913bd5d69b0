pub mod history;
pub mod keyboard;
pub mod model;
pub mod raster;
pub mod render;
pub mod state;
pub mod surface;

pub use history::SnapshotHistory;
pub use model::{Rgba, StrokeStyle};
pub use raster::RgbaBuffer;
pub use state::{can_transition, SessionPhase};
pub use surface::{PointerInput, Surface};
