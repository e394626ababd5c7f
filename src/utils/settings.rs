//! Engine settings persisted as a small binary file.
//!
//! The file layout is a fixed magic header, a format version, then a
//! length-prefixed bincode payload, so a truncated or foreign file fails
//! loudly instead of deserializing into nonsense.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::constants::{FLIGHT_ALTITUDE, FLIGHT_SPEED};
use crate::world::streaming::StreamingConfig;

const MAGIC_HEADER: &[u8; 4] = b"NDRF";
const VERSION: u32 = 1;

pub const DEFAULT_SETTINGS_FILE: &str = "settings.bin";

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct EngineSettings {
    pub streaming: StreamingConfig,
    #[serde(default)]
    pub flight: FlightSettings,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            streaming: StreamingConfig::default(),
            flight: FlightSettings::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct FlightSettings {
    pub speed: f32,
    pub altitude: f32,
}

impl Default for FlightSettings {
    fn default() -> Self {
        Self {
            speed: FLIGHT_SPEED,
            altitude: FLIGHT_ALTITUDE,
        }
    }
}

pub fn save_settings<P: AsRef<Path>>(path: P, settings: &EngineSettings) -> Result<(), String> {
    let file = File::create(path).map_err(|e| format!("Cannot create settings file: {}", e))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(MAGIC_HEADER).map_err(|e| e.to_string())?;
    writer
        .write_all(&VERSION.to_le_bytes())
        .map_err(|e| e.to_string())?;

    let data =
        bincode::serialize(settings).map_err(|e| format!("Settings serialization failed: {}", e))?;

    let size = data.len() as u64;
    writer
        .write_all(&size.to_le_bytes())
        .map_err(|e| e.to_string())?;

    writer.write_all(&data).map_err(|e| e.to_string())?;
    writer.flush().map_err(|e| e.to_string())?;

    Ok(())
}

pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<EngineSettings, String> {
    let file = File::open(path).map_err(|e| format!("Cannot open settings file: {}", e))?;
    let mut reader = BufReader::new(file);

    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic).map_err(|e| e.to_string())?;
    if &magic != MAGIC_HEADER {
        return Err("Not a settings file".to_string());
    }

    let mut version_bytes = [0u8; 4];
    reader
        .read_exact(&mut version_bytes)
        .map_err(|e| e.to_string())?;
    let version = u32::from_le_bytes(version_bytes);
    if version != VERSION {
        return Err(format!("Unsupported settings version: {}", version));
    }

    let mut size_bytes = [0u8; 8];
    reader
        .read_exact(&mut size_bytes)
        .map_err(|e| e.to_string())?;
    let size = u64::from_le_bytes(size_bytes) as usize;

    let mut data = vec![0u8; size];
    reader.read_exact(&mut data).map_err(|e| e.to_string())?;

    bincode::deserialize(&data).map_err(|e| format!("Settings deserialization failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(tag: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("nightdrift-{}-{}.bin", tag, std::process::id()))
    }

    #[test]
    fn test_settings_roundtrip() {
        let path = temp_path("roundtrip");
        let mut settings = EngineSettings::default();
        settings.streaming.load_radius = 4;
        settings.streaming.unload_radius = 6;
        settings.flight.speed = 1.25;

        save_settings(&path, &settings).unwrap();
        let loaded = load_settings(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded.streaming.load_radius, 4);
        assert_eq!(loaded.streaming.unload_radius, 6);
        assert_eq!(loaded.streaming.chunk_size, settings.streaming.chunk_size);
        assert_eq!(loaded.flight.speed, 1.25);
        assert_eq!(loaded.flight.altitude, settings.flight.altitude);
    }

    #[test]
    fn test_defaults_pass_validation() {
        let settings = EngineSettings::default();
        assert!(settings.streaming.validate().is_ok());
        assert_eq!(settings.flight.altitude, FLIGHT_ALTITUDE);
        assert_eq!(settings.flight.speed, FLIGHT_SPEED);
    }

    #[test]
    fn test_load_rejects_foreign_file() {
        let path = temp_path("foreign");
        fs::write(&path, b"definitely not a settings file").unwrap();
        let result = load_settings(&path);
        fs::remove_file(&path).ok();
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        assert!(load_settings(temp_path("missing")).is_err());
    }
}
