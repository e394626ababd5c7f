//! Deterministic tree-placement decisions.

use std::sync::Arc;

use crate::constants::*;
use crate::core::coord::ChunkCoord;
use crate::world::noise::NoiseField;

/// Decides whether a tree occupies a candidate world position.
///
/// Three independent channels of the shared field feed the decision: a
/// slow tree-chance channel, a per-chunk seed sampled at the integer chunk
/// coordinates, and a raw-coordinate factor. The chunk-seed term shifts the
/// effective threshold so density drifts smoothly from chunk to chunk while
/// every individual decision stays a pure function of its inputs.
///
/// Callers pass true world coordinates plus the coordinate of the chunk
/// responsible for the candidate point; a tree near a chunk boundary must
/// come out the same however generation reaches it.
pub struct PlacementOracle {
    noise: Arc<NoiseField>,
}

impl PlacementOracle {
    pub fn new(noise: Arc<NoiseField>) -> Self {
        PlacementOracle { noise }
    }

    pub fn should_place(&self, x: f32, z: f32, chunk: ChunkCoord) -> bool {
        let tree_chance = self
            .noise
            .sample(x / TREE_CHANCE_WAVELENGTH, z / TREE_CHANCE_WAVELENGTH);
        let chunk_seed = self.noise.sample(chunk.cx as f32, chunk.cz as f32);
        let random_factor = self.noise.sample(x, z);

        tree_chance > TREE_BASE_THRESHOLD + chunk_seed * random_factor * TREE_DENSITY_MODULATION
    }
}
