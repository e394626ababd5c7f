//! Chunk payload generation: elevation grid plus tree placements.
//!
//! Generation is pure. The same coordinate and seed always produce the
//! same payload, down to the bit, so chunks can be dropped and regenerated
//! freely without the terrain shifting underneath.

use std::sync::Arc;

use crate::constants::*;
use crate::core::chunk::{ChunkPayload, HeightGrid, Placement, PlacementKind};
use crate::core::coord::ChunkCoord;
use crate::world::height::HeightSynthesizer;
use crate::world::noise::NoiseField;
use crate::world::placement::PlacementOracle;

// Decorrelates the two jitter axes drawn from the one field.
const JITTER_CHANNEL_SHIFT: f32 = 517.0;

pub struct ChunkGenerator {
    noise: Arc<NoiseField>,
    height: HeightSynthesizer,
    placement: PlacementOracle,
    chunk_size: f32,
}

impl ChunkGenerator {
    pub fn new(noise: Arc<NoiseField>, chunk_size: f32) -> Self {
        ChunkGenerator {
            height: HeightSynthesizer::new(Arc::clone(&noise)),
            placement: PlacementOracle::new(Arc::clone(&noise)),
            noise,
            chunk_size,
        }
    }

    pub fn chunk_size(&self) -> f32 {
        self.chunk_size
    }

    /// Generate the complete payload for one chunk coordinate.
    pub fn generate(&self, coord: ChunkCoord) -> ChunkPayload {
        let origin = coord.world_origin(self.chunk_size);
        let half = self.chunk_size / 2.0;

        // Elevation pass: regular grid over local [-half, half], heights
        // sampled in world space so shared edges agree across chunks.
        let step = self.chunk_size / MESH_SUBDIVISIONS as f32;
        let mut samples = Vec::with_capacity(MESH_RESOLUTION * MESH_RESOLUTION);
        for iz in 0..MESH_RESOLUTION {
            let local_z = -half + iz as f32 * step;
            for ix in 0..MESH_RESOLUTION {
                let local_x = -half + ix as f32 * step;
                samples.push(
                    self.height
                        .elevation(origin.x + local_x, origin.y + local_z),
                );
            }
        }
        let heights = HeightGrid::new(MESH_RESOLUTION, samples);

        // Placement pass: coarse site grid, jittered, gated by the oracle.
        let mut placements = Vec::new();
        let sites_per_axis = (self.chunk_size / PLACEMENT_GRID_SPACING) as i32;
        for sz in 0..sites_per_axis {
            let site_z = -half + sz as f32 * PLACEMENT_GRID_SPACING;
            for sx in 0..sites_per_axis {
                let site_x = -half + sx as f32 * PLACEMENT_GRID_SPACING;

                let (jitter_x, jitter_z) =
                    self.site_jitter(origin.x + site_x, origin.y + site_z);
                let local_x = site_x + jitter_x;
                let local_z = site_z + jitter_z;
                let world_x = origin.x + local_x;
                let world_z = origin.y + local_z;

                if !self.placement.should_place(world_x, world_z, coord) {
                    continue;
                }

                // Footing is sampled at the exact world position, never
                // interpolated from the coarser mesh grid.
                let elevation = self.height.elevation(world_x, world_z);
                let trunk_height = TRUNK_BASE_HEIGHT
                    + self.noise.sample(
                        world_x / TRUNK_VARIATION_WAVELENGTH,
                        world_z / TRUNK_VARIATION_WAVELENGTH,
                    ) * TRUNK_HEIGHT_VARIATION;
                let foliage_scale = FOLIAGE_BASE_SCALE
                    + self.noise.sample(
                        world_x / FOLIAGE_VARIATION_WAVELENGTH,
                        world_z / FOLIAGE_VARIATION_WAVELENGTH,
                    ) * FOLIAGE_SCALE_VARIATION;

                placements.push(Placement {
                    local_x,
                    local_z,
                    elevation,
                    kind: PlacementKind::Tree,
                    trunk_height,
                    foliage_scale,
                });
            }
        }

        ChunkPayload::new(coord, self.chunk_size, heights, placements)
    }

    /// Per-site jitter in [-PLACEMENT_JITTER, PLACEMENT_JITTER] on each
    /// axis, drawn from a high-frequency channel keyed by the unjittered
    /// site's world coordinates.
    fn site_jitter(&self, site_x: f32, site_z: f32) -> (f32, f32) {
        let fx = site_x / PLACEMENT_JITTER_WAVELENGTH;
        let fz = site_z / PLACEMENT_JITTER_WAVELENGTH;
        let jitter_x = self.noise.sample(fx, fz) * PLACEMENT_JITTER;
        let jitter_z = self
            .noise
            .sample(fx + JITTER_CHANNEL_SHIFT, fz - JITTER_CHANNEL_SHIFT)
            * PLACEMENT_JITTER;
        (jitter_x, jitter_z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(seed: u32) -> ChunkGenerator {
        ChunkGenerator::new(Arc::new(NoiseField::new(seed)), CHUNK_SIZE)
    }

    #[test]
    fn test_grid_has_fixed_resolution() {
        let payload = generator(2147).generate(ChunkCoord::new(0, 0));
        assert_eq!(payload.heights().resolution(), MESH_RESOLUTION);
        assert_eq!(payload.heights().samples().len(), MESH_RESOLUTION * MESH_RESOLUTION);
        assert_eq!(payload.local_offset(0), -CHUNK_SIZE / 2.0);
        assert_eq!(payload.local_offset(MESH_SUBDIVISIONS), CHUNK_SIZE / 2.0);
    }

    #[test]
    fn test_generate_is_reproducible() {
        let coord = ChunkCoord::new(3, -2);
        let first = generator(2147).generate(coord);
        let second = generator(2147).generate(coord);
        assert_eq!(first, second);
    }

    #[test]
    fn test_boundary_continuity_across_chunks() {
        // The +x edge of (0,0) and the -x edge of (1,0) cover identical
        // world coordinates, so their sampled heights must be bit-equal.
        let generator = generator(2147);
        let left = generator.generate(ChunkCoord::new(0, 0));
        let right = generator.generate(ChunkCoord::new(1, 0));
        for iz in 0..MESH_RESOLUTION {
            assert_eq!(
                left.heights().sample(MESH_RESOLUTION - 1, iz),
                right.heights().sample(0, iz),
                "edge mismatch at row {}",
                iz
            );
        }

        let near = generator.generate(ChunkCoord::new(0, 0));
        let far = generator.generate(ChunkCoord::new(0, 1));
        for ix in 0..MESH_RESOLUTION {
            assert_eq!(
                near.heights().sample(ix, MESH_RESOLUTION - 1),
                far.heights().sample(ix, 0),
                "edge mismatch at column {}",
                ix
            );
        }
    }

    #[test]
    fn test_grid_matches_height_synthesizer() {
        let noise = Arc::new(NoiseField::new(2147));
        let generator = ChunkGenerator::new(Arc::clone(&noise), CHUNK_SIZE);
        let synth = HeightSynthesizer::new(noise);

        let coord = ChunkCoord::new(-1, 4);
        let payload = generator.generate(coord);
        let origin = coord.world_origin(CHUNK_SIZE);

        for &(ix, iz) in &[(0, 0), (25, 13), (50, 50), (7, 42)] {
            let x = origin.x + payload.local_offset(ix);
            let z = origin.y + payload.local_offset(iz);
            assert_eq!(payload.heights().sample(ix, iz), synth.elevation(x, z));
        }
    }

    #[test]
    fn test_placements_stay_near_chunk_footprint() {
        let bound = CHUNK_SIZE / 2.0 + PLACEMENT_JITTER;
        for cz in -2..=2 {
            for cx in -2..=2 {
                let payload = generator(2147).generate(ChunkCoord::new(cx, cz));
                for p in payload.placements() {
                    assert!(p.local_x.abs() <= bound, "local_x {} outside chunk", p.local_x);
                    assert!(p.local_z.abs() <= bound, "local_z {} outside chunk", p.local_z);
                }
            }
        }
    }

    #[test]
    fn test_placement_footing_is_exact() {
        let noise = Arc::new(NoiseField::new(2147));
        let generator = ChunkGenerator::new(Arc::clone(&noise), CHUNK_SIZE);
        let synth = HeightSynthesizer::new(noise);

        let coord = ChunkCoord::new(2, 2);
        let payload = generator.generate(coord);
        let origin = coord.world_origin(CHUNK_SIZE);
        for p in payload.placements() {
            // The y of the local position is the footing elevation, sampled
            // at the exact world coordinates of the site.
            let position = p.local_position();
            assert_eq!(
                position.y,
                synth.elevation(origin.x + position.x, origin.y + position.z)
            );
        }
    }

    #[test]
    fn test_placement_scale_factors_in_range() {
        let mut total = 0usize;
        for cz in -2..=2 {
            for cx in -2..=2 {
                let payload = generator(2147).generate(ChunkCoord::new(cx, cz));
                for p in payload.placements() {
                    assert_eq!(p.kind, PlacementKind::Tree);
                    assert!((1.0..=2.0).contains(&p.trunk_height));
                    assert!((0.4..=1.2).contains(&p.foliage_scale));
                    total += 1;
                }
            }
        }
        assert!(total > 0, "no placements across a 5x5 chunk region");
    }
}
