pub mod settings;

pub use settings::{
    load_settings, save_settings, EngineSettings, FlightSettings, DEFAULT_SETTINGS_FILE,
};
