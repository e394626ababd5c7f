//! Terrain synthesis and streaming.

pub mod generator;
pub mod height;
pub mod noise;
pub mod placement;
pub mod store;
pub mod streaming;

pub use generator::ChunkGenerator;
pub use height::HeightSynthesizer;
pub use noise::NoiseField;
pub use placement::PlacementOracle;
pub use store::{ChunkState, ChunkStore};
pub use streaming::{StreamingConfig, StreamingController, StreamingStats};
