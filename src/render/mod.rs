//! Renderer seam.
//!
//! The streaming controller never talks to a graphics API directly. It
//! drives whatever implements [`Renderer`], which keeps the engine usable
//! from a real scene graph, a test double, or the headless backend below.

use rustc_hash::FxHashSet;

use crate::core::chunk::ChunkPayload;

/// Scene-side collaborator for the streaming controller.
///
/// Calls arrive in a fixed order per chunk: one `materialize`, then any
/// number of `set_opacity` calls with non-decreasing values, then exactly
/// one `dispose` with the handle returned by `materialize`.
pub trait Renderer {
    /// Opaque token for one chunk's scene resources.
    type Handle;

    /// Build scene resources for a freshly generated chunk and return the
    /// handle the controller will use to address them. Resources start
    /// fully transparent; the controller raises opacity as the fade runs.
    fn materialize(&mut self, payload: &ChunkPayload) -> Self::Handle;

    /// Update the chunk's opacity, in [0.0, 1.0].
    fn set_opacity(&mut self, handle: &Self::Handle, opacity: f32);

    /// Release the chunk's scene resources. Consumes the handle, so a
    /// disposed chunk cannot be addressed again.
    fn dispose(&mut self, handle: Self::Handle);
}

/// Renderer backend that allocates nothing but handles.
///
/// Used by the flyover binary and the integration tests. It tracks which
/// handles are live so leaks show up as a nonzero `live_count` after
/// shutdown.
pub struct HeadlessRenderer {
    next_handle: u64,
    live: FxHashSet<u64>,
    peak_live: usize,
    placements_seen: u64,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        HeadlessRenderer {
            next_handle: 0,
            live: FxHashSet::default(),
            peak_live: 0,
            placements_seen: 0,
        }
    }

    /// Chunks currently holding (virtual) scene resources.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// High-water mark of simultaneously live chunks.
    pub fn peak_live(&self) -> usize {
        self.peak_live
    }

    /// Total chunks ever materialized.
    pub fn materialized_total(&self) -> u64 {
        self.next_handle
    }

    /// Total placements across every materialized chunk.
    pub fn placements_seen(&self) -> u64 {
        self.placements_seen
    }
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for HeadlessRenderer {
    type Handle = u64;

    fn materialize(&mut self, payload: &ChunkPayload) -> u64 {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.live.insert(handle);
        self.peak_live = self.peak_live.max(self.live.len());
        self.placements_seen += payload.placements().len() as u64;
        tracing::trace!(
            "Materialized chunk {} as handle {} with {} placements",
            payload.coord(),
            handle,
            payload.placements().len()
        );
        handle
    }

    fn set_opacity(&mut self, handle: &u64, opacity: f32) {
        debug_assert!(self.live.contains(handle), "opacity on dead handle {}", handle);
        tracing::trace!("Set opacity {} on handle {}", opacity, handle);
    }

    fn dispose(&mut self, handle: u64) {
        let was_live = self.live.remove(&handle);
        debug_assert!(was_live, "dispose on dead handle {}", handle);
        tracing::trace!("Disposed handle {}", handle);
    }
}
