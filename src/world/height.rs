//! Layered elevation synthesis over the shared noise field.

use std::sync::Arc;

use crate::constants::*;
use crate::world::noise::NoiseField;

/// Combines four noise octaves and an erosion term into a single elevation.
///
/// Large and medium features pass through unmodulated; small and micro
/// detail is attenuated where erosion is strong. A pure function of the
/// world coordinate and the seed: mesh vertices and placements sampled at
/// the same coordinate agree bit for bit, whichever chunk asks.
pub struct HeightSynthesizer {
    noise: Arc<NoiseField>,
}

impl HeightSynthesizer {
    pub fn new(noise: Arc<NoiseField>) -> Self {
        HeightSynthesizer { noise }
    }

    pub fn elevation(&self, x: f32, z: f32) -> f32 {
        let large = self
            .noise
            .sample(x / LARGE_FEATURE_WAVELENGTH, z / LARGE_FEATURE_WAVELENGTH)
            * LARGE_FEATURE_AMPLITUDE;
        let medium = self
            .noise
            .sample(x / MEDIUM_FEATURE_WAVELENGTH, z / MEDIUM_FEATURE_WAVELENGTH)
            * MEDIUM_FEATURE_AMPLITUDE;
        let small = self
            .noise
            .sample(x / SMALL_FEATURE_WAVELENGTH, z / SMALL_FEATURE_WAVELENGTH)
            * SMALL_FEATURE_AMPLITUDE;
        let micro = self
            .noise
            .sample(x / MICRO_FEATURE_WAVELENGTH, z / MICRO_FEATURE_WAVELENGTH)
            * MICRO_FEATURE_AMPLITUDE;

        let base = large + medium;
        let detail = small + micro;
        let erosion = self
            .noise
            .sample(x / EROSION_WAVELENGTH, z / EROSION_WAVELENGTH)
            .abs();

        base + detail * (1.0 - erosion * EROSION_STRENGTH)
    }
}
