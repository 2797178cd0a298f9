pub mod snapshot;

pub use snapshot::{ContextWindow, CostInfo, CurrentUsage, ModelInfo, SessionSnapshot};
