pub mod snapshot;
pub mod types;

// Re-export commonly used items
pub use snapshot::{CellSnapshot, MapSnapshot};
pub use types::{Action, ActionKind, CompassBearing, GridEntity, GridModel, Location};
