//! Fundamental data types: chunk coordinates, generated payloads, and the
//! viewpoint snapshot consumed by the streaming controller.

pub mod chunk;
pub mod coord;
pub mod viewpoint;

pub use chunk::{ChunkPayload, HeightGrid, Placement, PlacementKind};
pub use coord::ChunkCoord;
pub use viewpoint::ViewpointState;
