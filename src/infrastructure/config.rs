use crate::domain::session::Region;
use crate::domain::weather::GeoPoint;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub power: PowerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PowerSettings {
    pub base_url: String,
    pub community: String,
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct CoordinateSettings {
    pub latitude: f64,
    pub longitude: f64,
}

/// Fetch coordinates per region selector value, with a fallback point for
/// regions that have no entry. Keys are matched lowercased because the
/// config loader normalizes table keys to lowercase.
#[derive(Debug, Deserialize, Clone)]
pub struct RegionsConfig {
    pub default: CoordinateSettings,
    #[serde(default)]
    pub regions: HashMap<String, CoordinateSettings>,
}

impl RegionsConfig {
    pub fn coordinates_for(&self, region: Region) -> GeoPoint {
        let coordinate = self
            .regions
            .get(&region.label().to_ascii_lowercase())
            .copied()
            .unwrap_or(self.default);
        GeoPoint::new(coordinate.latitude, coordinate.longitude)
    }
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/app"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_regions_config() -> anyhow::Result<RegionsConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/regions"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
