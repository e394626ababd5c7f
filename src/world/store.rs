//! Resident chunk bookkeeping.
//!
//! The store owns every chunk the controller has materialized and not yet
//! evicted, along with its fade progress and the renderer handle returned
//! at materialization time.

use rustc_hash::FxHashMap;

use crate::core::chunk::ChunkPayload;
use crate::core::coord::ChunkCoord;

/// One resident chunk: its generated payload, the renderer handle for its
/// scene resources, and how far its fade-in has progressed.
pub struct ChunkState<H> {
    payload: ChunkPayload,
    handle: H,
    fade_progress: f32,
}

impl<H> ChunkState<H> {
    /// A freshly materialized chunk starts fully transparent.
    pub fn new(payload: ChunkPayload, handle: H) -> Self {
        ChunkState {
            payload,
            handle,
            fade_progress: 0.0,
        }
    }

    pub fn coord(&self) -> ChunkCoord {
        self.payload.coord()
    }

    pub fn payload(&self) -> &ChunkPayload {
        &self.payload
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn fade_progress(&self) -> f32 {
        self.fade_progress
    }

    pub fn is_settled(&self) -> bool {
        self.fade_progress >= 1.0
    }

    /// Advance the fade by one step, clamping at full opacity. Returns the
    /// new progress so the caller can push it straight to the renderer.
    pub fn advance_fade(&mut self, step: f32) -> f32 {
        self.fade_progress = (self.fade_progress + step).min(1.0);
        self.fade_progress
    }

    /// Tear the state apart, keeping only the handle for disposal.
    pub fn into_handle(self) -> H {
        self.handle
    }
}

/// Chunk map keyed by chunk coordinate.
pub struct ChunkStore<H> {
    chunks: FxHashMap<ChunkCoord, ChunkState<H>>,
}

impl<H> ChunkStore<H> {
    pub fn new() -> Self {
        ChunkStore {
            chunks: FxHashMap::default(),
        }
    }

    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    /// Insert a resident chunk. Inserting a coordinate that is already
    /// resident is a bug in the caller's load pass, so it panics rather
    /// than silently dropping a live renderer handle.
    pub fn insert(&mut self, state: ChunkState<H>) {
        let coord = state.coord();
        let previous = self.chunks.insert(coord, state);
        assert!(previous.is_none(), "chunk {} inserted twice", coord);
    }

    pub fn get(&self, coord: ChunkCoord) -> Option<&ChunkState<H>> {
        self.chunks.get(&coord)
    }

    pub fn get_mut(&mut self, coord: ChunkCoord) -> Option<&mut ChunkState<H>> {
        self.chunks.get_mut(&coord)
    }

    pub fn remove(&mut self, coord: ChunkCoord) -> Option<ChunkState<H>> {
        self.chunks.remove(&coord)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ChunkCoord, &ChunkState<H>)> {
        self.chunks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&ChunkCoord, &mut ChunkState<H>)> {
        self.chunks.iter_mut()
    }

    pub fn coords(&self) -> impl Iterator<Item = ChunkCoord> + '_ {
        self.chunks.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Drain every resident chunk, e.g. at shutdown.
    pub fn drain(&mut self) -> impl Iterator<Item = (ChunkCoord, ChunkState<H>)> + '_ {
        self.chunks.drain()
    }
}

impl<H> Default for ChunkStore<H> {
    fn default() -> Self {
        Self::new()
    }
}
