//! Streaming controller: keeps the chunk window around the viewpoint
//! resident, fades fresh chunks in, and evicts chunks left behind.
//!
//! Everything here runs on the caller's thread. One [`StreamingController::tick`]
//! call performs a load pass followed by a fade/evict pass, in that order,
//! so a tick's observable effects do not depend on map iteration order.

use serde::{Deserialize, Serialize};

use crate::constants::{CHUNK_SIZE, FADE_STEP, LOAD_RADIUS, UNLOAD_RADIUS};
use crate::core::coord::ChunkCoord;
use crate::core::viewpoint::ViewpointState;
use crate::render::Renderer;
use crate::world::generator::ChunkGenerator;
use crate::world::store::{ChunkState, ChunkStore};

/// Tunable streaming parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StreamingConfig {
    /// Side length of a chunk in world units.
    pub chunk_size: f32,
    /// Chunks are loaded in a (2r+1) x (2r+1) square around the viewpoint.
    pub load_radius: i32,
    /// Chunks farther than this (Chebyshev) from the viewpoint's chunk are
    /// evicted. Must be >= `load_radius` or resident chunks would thrash.
    pub unload_radius: i32,
    /// Opacity added per tick while a chunk fades in.
    pub fade_step: f32,
}

impl Default for StreamingConfig {
    fn default() -> Self {
        StreamingConfig {
            chunk_size: CHUNK_SIZE,
            load_radius: LOAD_RADIUS,
            unload_radius: UNLOAD_RADIUS,
            fade_step: FADE_STEP,
        }
    }
}

impl StreamingConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.chunk_size.is_finite() || self.chunk_size <= 0.0 {
            return Err(format!("chunk_size must be positive, got {}", self.chunk_size));
        }
        if self.load_radius < 0 {
            return Err(format!("load_radius must be >= 0, got {}", self.load_radius));
        }
        if self.unload_radius < self.load_radius {
            return Err(format!(
                "unload_radius {} is smaller than load_radius {}",
                self.unload_radius, self.load_radius
            ));
        }
        if !self.fade_step.is_finite() || self.fade_step <= 0.0 || self.fade_step > 1.0 {
            return Err(format!("fade_step must be in (0, 1], got {}", self.fade_step));
        }
        Ok(())
    }
}

/// Counters updated once per tick. Cheap to copy out for logging.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamingStats {
    /// Chunks currently resident.
    pub resident: usize,
    /// Resident chunks that have finished fading in.
    pub settled: usize,
    /// Chunks generated during the most recent tick.
    pub generated_last_tick: usize,
    /// Chunks evicted during the most recent tick.
    pub evicted_last_tick: usize,
    /// Chunks generated since the controller was created.
    pub generated_total: u64,
    /// Chunks evicted since the controller was created.
    pub evicted_total: u64,
}

/// Owns the chunk store and drives generation, fade-in, and eviction
/// against a [`Renderer`].
pub struct StreamingController<R: Renderer> {
    config: StreamingConfig,
    generator: ChunkGenerator,
    store: ChunkStore<R::Handle>,
    current_chunk: Option<ChunkCoord>,
    ticks: u64,
    stats: StreamingStats,
}

impl<R: Renderer> StreamingController<R> {
    pub fn new(config: StreamingConfig, generator: ChunkGenerator) -> Result<Self, String> {
        config.validate()?;
        if generator.chunk_size() != config.chunk_size {
            return Err(format!(
                "generator chunk size {} does not match configured chunk size {}",
                generator.chunk_size(),
                config.chunk_size
            ));
        }
        Ok(StreamingController {
            config,
            generator,
            store: ChunkStore::new(),
            current_chunk: None,
            ticks: 0,
            stats: StreamingStats::default(),
        })
    }

    /// Advance streaming by one frame against the viewpoint's current
    /// position.
    pub fn tick(&mut self, viewpoint: &ViewpointState, renderer: &mut R) {
        self.ticks += 1;
        let current = viewpoint.chunk(self.config.chunk_size);
        if self.current_chunk != Some(current) {
            tracing::debug!("Viewpoint entered chunk {} at tick {}", current, self.ticks);
            self.current_chunk = Some(current);
        }

        let generated = self.load_pass(current, renderer);
        let evicted = self.fade_and_evict_pass(current, renderer);

        self.stats.resident = self.store.len();
        self.stats.settled = self.store.iter().filter(|(_, s)| s.is_settled()).count();
        self.stats.generated_last_tick = generated;
        self.stats.evicted_last_tick = evicted;
        self.stats.generated_total += generated as u64;
        self.stats.evicted_total += evicted as u64;
    }

    /// Generate and materialize every missing chunk in the load window.
    fn load_pass(&mut self, current: ChunkCoord, renderer: &mut R) -> usize {
        let radius = self.config.load_radius;
        let mut generated = 0;
        for dz in -radius..=radius {
            for dx in -radius..=radius {
                let coord = current.offset(dx, dz);
                if self.store.contains(coord) {
                    continue;
                }
                let payload = self.generator.generate(coord);
                tracing::debug!(
                    "Generated chunk {} with {} placements",
                    coord,
                    payload.placements().len()
                );
                let handle = renderer.materialize(&payload);
                self.store.insert(ChunkState::new(payload, handle));
                generated += 1;
            }
        }
        generated
    }

    /// Advance fade-in on chunks within range and evict the rest. The
    /// fade runs in the same pass, so chunks loaded this tick take their
    /// first step immediately.
    fn fade_and_evict_pass(&mut self, current: ChunkCoord, renderer: &mut R) -> usize {
        let unload_radius = self.config.unload_radius;
        let fade_step = self.config.fade_step;

        let mut to_evict = Vec::new();
        for (&coord, state) in self.store.iter_mut() {
            if coord.chebyshev_distance(current) > unload_radius {
                to_evict.push(coord);
                continue;
            }
            if !state.is_settled() {
                let opacity = state.advance_fade(fade_step);
                renderer.set_opacity(state.handle(), opacity);
            }
        }

        let evicted = to_evict.len();
        for coord in to_evict {
            if let Some(state) = self.store.remove(coord) {
                tracing::debug!("Evicted chunk {}", coord);
                renderer.dispose(state.into_handle());
            }
        }
        evicted
    }

    /// Dispose every resident chunk. The controller is reusable afterwards;
    /// the next tick rebuilds the window from scratch.
    pub fn shutdown(&mut self, renderer: &mut R) {
        let mut disposed = 0usize;
        for (_, state) in self.store.drain() {
            renderer.dispose(state.into_handle());
            disposed += 1;
        }
        self.current_chunk = None;
        self.stats.resident = 0;
        self.stats.settled = 0;
        tracing::info!("Streaming controller shut down, disposed {} chunks", disposed);
    }

    pub fn config(&self) -> &StreamingConfig {
        &self.config
    }

    pub fn stats(&self) -> StreamingStats {
        self.stats
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Chunk the viewpoint occupied at the last tick, if any tick has run.
    pub fn current_chunk(&self) -> Option<ChunkCoord> {
        self.current_chunk
    }

    pub fn resident_count(&self) -> usize {
        self.store.len()
    }

    pub fn is_resident(&self, coord: ChunkCoord) -> bool {
        self.store.contains(coord)
    }

    /// Fade progress of a resident chunk, if resident.
    pub fn fade_progress(&self, coord: ChunkCoord) -> Option<f32> {
        self.store.get(coord).map(|state| state.fade_progress())
    }

    pub fn resident_coords(&self) -> Vec<ChunkCoord> {
        self.store.coords().collect()
    }
}
