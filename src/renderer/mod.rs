//! Rendering output
//!
//! The renderer itself lives with the host. This module only turns dice into
//! data it can draw: serializable snapshots and ready-to-upload vertices.

pub mod shapes;
pub mod snapshot;
pub mod vertex;

pub use shapes::{die_fill, die_outline, local_outline, table_fill, world_outline};
pub use snapshot::{DieSnapshot, snapshot};
pub use vertex::Vertex;
