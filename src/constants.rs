// Chunk streaming constants
pub const CHUNK_SIZE: f32 = 200.0;
pub const MESH_SUBDIVISIONS: usize = 50;
pub const MESH_RESOLUTION: usize = MESH_SUBDIVISIONS + 1;
pub const LOAD_RADIUS: i32 = 2;
pub const UNLOAD_RADIUS: i32 = 3;
pub const FADE_STEP: f32 = 0.02;

// Height synthesis layers: wavelength divisor paired with amplitude.
// Coarse layers set the landforms, fine layers are attenuated by erosion.
pub const LARGE_FEATURE_WAVELENGTH: f32 = 400.0;
pub const LARGE_FEATURE_AMPLITUDE: f32 = 40.0;
pub const MEDIUM_FEATURE_WAVELENGTH: f32 = 100.0;
pub const MEDIUM_FEATURE_AMPLITUDE: f32 = 15.0;
pub const SMALL_FEATURE_WAVELENGTH: f32 = 30.0;
pub const SMALL_FEATURE_AMPLITUDE: f32 = 5.0;
pub const MICRO_FEATURE_WAVELENGTH: f32 = 10.0;
pub const MICRO_FEATURE_AMPLITUDE: f32 = 1.0;
pub const EROSION_WAVELENGTH: f32 = 50.0;
pub const EROSION_STRENGTH: f32 = 0.5;

// Tree placement
pub const TREE_BASE_THRESHOLD: f32 = 0.27;
pub const TREE_DENSITY_MODULATION: f32 = 0.1;
pub const TREE_CHANCE_WAVELENGTH: f32 = 100.0;
pub const PLACEMENT_GRID_SPACING: f32 = 10.0;
pub const PLACEMENT_JITTER: f32 = 2.5;
// Sub-unit wavelength so neighbouring sites draw uncorrelated jitter.
pub const PLACEMENT_JITTER_WAVELENGTH: f32 = 0.73;

// Tree shape variation
pub const TRUNK_BASE_HEIGHT: f32 = 1.5;
pub const TRUNK_HEIGHT_VARIATION: f32 = 0.5;
pub const TRUNK_VARIATION_WAVELENGTH: f32 = 10.0;
pub const FOLIAGE_BASE_SCALE: f32 = 0.8;
pub const FOLIAGE_SCALE_VARIATION: f32 = 0.4;
pub const FOLIAGE_VARIATION_WAVELENGTH: f32 = 20.0;

// Flight driver
pub const FLIGHT_SPEED: f32 = 0.5;
pub const FLIGHT_ALTITUDE: f32 = 30.0;
pub const FLIGHT_TIME_STEP: f32 = 0.005;
