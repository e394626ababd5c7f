//! Scripted night-flight viewpoint driver.
//!
//! The engine treats the viewpoint as external input; this module is the
//! stock driver used by the flyover binary and the integration tests. It
//! flies a gentle, endless cruise: constant altitude, steady forward
//! motion toward -z, and low-frequency sway on position and attitude.

use crate::constants::{FLIGHT_ALTITUDE, FLIGHT_SPEED, FLIGHT_TIME_STEP};
use crate::core::viewpoint::ViewpointState;

// Sway shaping. Small amplitudes at mismatched frequencies so the motion
// never visibly repeats.
const SWAY_FREQUENCY: f32 = 0.5;
const SWAY_AMPLITUDE: f32 = 0.2;
const PITCH_FREQUENCY: f32 = 0.5;
const PITCH_AMPLITUDE: f32 = 0.05;
const YAW_FREQUENCY: f32 = 0.3;
const YAW_AMPLITUDE: f32 = 0.05;
const ROLL_FREQUENCY: f32 = 0.7;
const ROLL_AMPLITUDE: f32 = 0.03;

pub struct FlightPath {
    state: ViewpointState,
    speed: f32,
    altitude: f32,
}

impl FlightPath {
    pub fn new(speed: f32, altitude: f32) -> Self {
        FlightPath {
            state: ViewpointState::at_altitude(altitude),
            speed,
            altitude,
        }
    }

    pub fn state(&self) -> &ViewpointState {
        &self.state
    }

    /// Step the flight forward one tick and return the new viewpoint.
    pub fn advance(&mut self) -> ViewpointState {
        let state = &mut self.state;
        state.time += FLIGHT_TIME_STEP;
        state.position.x += (state.time * SWAY_FREQUENCY).sin() * SWAY_AMPLITUDE;
        state.position.z -= self.speed;
        state.position.y = self.altitude;
        state.pitch = (state.time * PITCH_FREQUENCY).sin() * PITCH_AMPLITUDE;
        state.yaw = (state.time * YAW_FREQUENCY).sin() * YAW_AMPLITUDE;
        state.roll = (state.time * ROLL_FREQUENCY).sin() * ROLL_AMPLITUDE;
        self.state
    }
}

impl Default for FlightPath {
    fn default() -> Self {
        FlightPath::new(FLIGHT_SPEED, FLIGHT_ALTITUDE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_altitude_stays_fixed() {
        let mut flight = FlightPath::default();
        for _ in 0..500 {
            let state = flight.advance();
            assert_eq!(state.position.y, FLIGHT_ALTITUDE);
        }
    }

    #[test]
    fn test_cruises_toward_negative_z() {
        let mut flight = FlightPath::default();
        let mut last_z = flight.state().position.z;
        for _ in 0..100 {
            let state = flight.advance();
            assert!(state.position.z < last_z);
            last_z = state.position.z;
        }
        // Speed is a power of two, so the distance covered is exact.
        assert_eq!(last_z, -100.0 * FLIGHT_SPEED);
    }

    #[test]
    fn test_time_advances_monotonically() {
        let mut flight = FlightPath::new(1.0, 50.0);
        let mut last_time = flight.state().time;
        for _ in 0..200 {
            let state = flight.advance();
            assert!(state.time > last_time);
            last_time = state.time;
        }
    }

    #[test]
    fn test_attitude_stays_within_sway_limits() {
        let mut flight = FlightPath::default();
        for _ in 0..2000 {
            let state = flight.advance();
            assert!(state.pitch.abs() <= PITCH_AMPLITUDE);
            assert!(state.yaw.abs() <= YAW_AMPLITUDE);
            assert!(state.roll.abs() <= ROLL_AMPLITUDE);
        }
    }
}
