use glam::Vec3;

use crate::core::coord::ChunkCoord;

/// Snapshot of the externally driven viewpoint, read once per tick.
///
/// The engine never mutates this; ownership stays with the driver
/// (see `flight::FlightPath`).
#[derive(Debug, Clone, Copy)]
pub struct ViewpointState {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
    /// Elapsed simulation time in driver time units.
    pub time: f32,
}

impl ViewpointState {
    pub fn at_altitude(altitude: f32) -> Self {
        ViewpointState {
            position: Vec3::new(0.0, altitude, 0.0),
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            time: 0.0,
        }
    }

    /// Chunk currently containing the viewpoint.
    pub fn chunk(&self, chunk_size: f32) -> ChunkCoord {
        ChunkCoord::from_world(self.position.x, self.position.z, chunk_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_from_position() {
        let mut viewpoint = ViewpointState::at_altitude(30.0);
        assert_eq!(viewpoint.chunk(200.0), ChunkCoord::new(0, 0));

        viewpoint.position = Vec3::new(1050.0, 30.0, -10.0);
        assert_eq!(viewpoint.chunk(200.0), ChunkCoord::new(5, -1));
    }
}
