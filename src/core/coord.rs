use std::fmt;

use glam::Vec2;

/// Integer coordinate of a chunk on the infinite terrain grid.
///
/// Used as the unique key into the chunk store; two coordinates are equal
/// iff both components match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cz: i32,
}

impl ChunkCoord {
    pub fn new(cx: i32, cz: i32) -> Self {
        ChunkCoord { cx, cz }
    }

    /// Chunk containing the given world position, by floor division.
    pub fn from_world(x: f32, z: f32, chunk_size: f32) -> Self {
        ChunkCoord {
            cx: (x / chunk_size).floor() as i32,
            cz: (z / chunk_size).floor() as i32,
        }
    }

    /// Max of the absolute per-axis deltas. Square-shaped load and unload
    /// regions fall out of comparing this against a radius.
    pub fn chebyshev_distance(self, other: ChunkCoord) -> i32 {
        (self.cx - other.cx).abs().max((self.cz - other.cz).abs())
    }

    pub fn offset(self, dx: i32, dz: i32) -> Self {
        ChunkCoord {
            cx: self.cx + dx,
            cz: self.cz + dz,
        }
    }

    /// World-space offset added to chunk-local coordinates.
    pub fn world_origin(self, chunk_size: f32) -> Vec2 {
        Vec2::new(self.cx as f32 * chunk_size, self.cz as f32 * chunk_size)
    }
}

impl fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.cx, self.cz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_world() {
        assert_eq!(ChunkCoord::from_world(0.0, 0.0, 200.0), ChunkCoord::new(0, 0));
        assert_eq!(ChunkCoord::from_world(199.9, 0.0, 200.0), ChunkCoord::new(0, 0));
        assert_eq!(ChunkCoord::from_world(200.0, 0.0, 200.0), ChunkCoord::new(1, 0));
        assert_eq!(ChunkCoord::from_world(-0.1, -200.0, 200.0), ChunkCoord::new(-1, -1));
        assert_eq!(ChunkCoord::from_world(-200.1, 450.0, 200.0), ChunkCoord::new(-2, 2));
    }

    #[test]
    fn test_chebyshev_distance() {
        let origin = ChunkCoord::new(0, 0);
        assert_eq!(origin.chebyshev_distance(origin), 0);
        assert_eq!(origin.chebyshev_distance(ChunkCoord::new(3, 1)), 3);
        assert_eq!(origin.chebyshev_distance(ChunkCoord::new(-2, -5)), 5);
        assert_eq!(ChunkCoord::new(5, 0).chebyshev_distance(ChunkCoord::new(-2, -2)), 7);
    }

    #[test]
    fn test_world_origin() {
        let origin = ChunkCoord::new(-1, 2).world_origin(200.0);
        assert_eq!(origin.x, -200.0);
        assert_eq!(origin.y, 400.0);
    }
}
