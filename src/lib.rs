//! Deterministic terrain streaming for an endless night flight.
//!
//! The engine keeps a square window of terrain chunks resident around an
//! externally driven viewpoint. Each chunk is synthesized on demand from
//! a seeded noise field, handed to a [`render::Renderer`] for scene
//! resources, faded in over successive ticks, and disposed once the
//! viewpoint leaves it behind. Same seed, same terrain, always.

// Core module with fundamental types
pub mod core;

// World module with noise, height synthesis, placement, and streaming
pub mod world;

// Render seam and the headless backend
pub mod render;

// Scripted viewpoint driver
pub mod flight;

// Settings persistence
pub mod utils;

// Other modules
pub mod constants;

// Re-exports
pub use constants::*;
pub use flight::FlightPath;
pub use render::{HeadlessRenderer, Renderer};
pub use utils::{
    load_settings, save_settings, EngineSettings, FlightSettings, DEFAULT_SETTINGS_FILE,
};
pub use world::{
    ChunkGenerator, ChunkState, ChunkStore, HeightSynthesizer, NoiseField, PlacementOracle,
    StreamingConfig, StreamingController, StreamingStats,
};
pub use self::core::{ChunkCoord, ChunkPayload, HeightGrid, Placement, PlacementKind, ViewpointState};
