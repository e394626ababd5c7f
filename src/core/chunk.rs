use glam::{Vec2, Vec3};

use crate::core::coord::ChunkCoord;

/// Regular grid of elevation samples covering one chunk's footprint.
///
/// Samples are stored row-major, x fastest: index `iz * resolution + ix`.
/// Sample `(ix, iz)` sits at chunk-local offset
/// `-chunk_size / 2 + i * chunk_size / (resolution - 1)` on each axis.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightGrid {
    resolution: usize,
    samples: Vec<f32>,
}

impl HeightGrid {
    pub(crate) fn new(resolution: usize, samples: Vec<f32>) -> Self {
        assert_eq!(
            samples.len(),
            resolution * resolution,
            "height grid sample count must match resolution"
        );
        HeightGrid {
            resolution,
            samples,
        }
    }

    /// Samples per side.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn sample(&self, ix: usize, iz: usize) -> f32 {
        assert!(
            ix < self.resolution && iz < self.resolution,
            "sample ({}, {}) out of range for resolution {}",
            ix,
            iz,
            self.resolution
        );
        self.samples[iz * self.resolution + ix]
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Lowest and highest elevation in the grid.
    pub fn bounds(&self) -> (f32, f32) {
        self.samples
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &h| {
                (lo.min(h), hi.max(h))
            })
    }
}

/// What occupies a placement site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementKind {
    Tree,
}

/// One secondary object placed on the terrain surface. All fields derive
/// deterministically from the world coordinates of the site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Chunk-local offset on the x axis.
    pub local_x: f32,
    /// Chunk-local offset on the z axis.
    pub local_z: f32,
    /// Terrain elevation sampled at the exact world position.
    pub elevation: f32,
    pub kind: PlacementKind,
    pub trunk_height: f32,
    pub foliage_scale: f32,
}

impl Placement {
    /// Position in chunk-local space, elevation on the y axis.
    pub fn local_position(&self) -> Vec3 {
        Vec3::new(self.local_x, self.elevation, self.local_z)
    }
}

/// Immutable output of chunk generation: the elevation grid plus the
/// placements rooted in this chunk. Never regenerated or mutated once
/// produced; only the store-side fade state changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkPayload {
    coord: ChunkCoord,
    chunk_size: f32,
    heights: HeightGrid,
    placements: Vec<Placement>,
}

impl ChunkPayload {
    pub(crate) fn new(
        coord: ChunkCoord,
        chunk_size: f32,
        heights: HeightGrid,
        placements: Vec<Placement>,
    ) -> Self {
        ChunkPayload {
            coord,
            chunk_size,
            heights,
            placements,
        }
    }

    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    pub fn chunk_size(&self) -> f32 {
        self.chunk_size
    }

    pub fn heights(&self) -> &HeightGrid {
        &self.heights
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// World-space offset of this chunk's local origin.
    pub fn world_origin(&self) -> Vec2 {
        self.coord.world_origin(self.chunk_size)
    }

    /// World units between adjacent grid samples.
    pub fn sample_step(&self) -> f32 {
        self.chunk_size / (self.heights.resolution() - 1) as f32
    }

    /// Chunk-local offset of grid column/row `index`.
    pub fn local_offset(&self, index: usize) -> f32 {
        -self.chunk_size / 2.0 + index as f32 * self.sample_step()
    }
}
