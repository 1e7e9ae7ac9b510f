//! CLI configuration from environment variables.
use std::env;
use std::path::PathBuf;

use compass_core::ToolTier;

#[derive(Clone, Debug)]
pub struct CliConfig {
    pub config_path: Option<PathBuf>,
    pub catalog_path: Option<PathBuf>,
    pub tier: ToolTier,
    pub tune: Option<String>,
    pub ticks: u64,
    pub seed: u64,
    pub world_extent: i32,
    pub enable_persistence: bool,
    pub save_data_dir: Option<PathBuf>,
    pub session_id: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            catalog_path: None,
            tier: ToolTier::Basic,
            tune: None,
            ticks: 200,
            seed: 42,
            world_extent: 48,
            enable_persistence: false,
            save_data_dir: None,
            session_id: None,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `COMPASS_CONFIG` - TOML detection settings (default: bundled)
    /// - `COMPASS_CATALOG` - RON material catalog (default: bundled)
    /// - `COMPASS_TIER` - `basic`, `advanced` or `master` (default: basic)
    /// - `COMPASS_TUNE` - Material id to tune the compass to (default: none)
    /// - `COMPASS_TICKS` - Ticks to simulate (default: 200)
    /// - `COMPASS_SEED` - World generation seed (default: 42)
    /// - `COMPASS_WORLD_EXTENT` - Half-width of the generated area (default: 48)
    /// - `ENABLE_PERSISTENCE` - Save and restore the compass (default: false)
    /// - `SAVE_DATA_DIR` - Directory for saved tools (default: platform-specific)
    /// - `COMPASS_SESSION_ID` - Log session name (default: auto-generated)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.config_path = env::var("COMPASS_CONFIG").ok().map(PathBuf::from);
        config.catalog_path = env::var("COMPASS_CATALOG").ok().map(PathBuf::from);

        if let Some(tier) = read_env::<ToolTier>("COMPASS_TIER") {
            config.tier = tier;
        }
        config.tune = env::var("COMPASS_TUNE").ok().filter(|id| !id.is_empty());

        if let Some(ticks) = read_env::<u64>("COMPASS_TICKS") {
            config.ticks = ticks;
        }
        if let Some(seed) = read_env::<u64>("COMPASS_SEED") {
            config.seed = seed;
        }
        if let Some(extent) = read_env::<i32>("COMPASS_WORLD_EXTENT") {
            config.world_extent = extent.max(1);
        }

        if let Some(enable) = read_env::<bool>("ENABLE_PERSISTENCE") {
            config.enable_persistence = enable;
        } else if env::var("ENABLE_PERSISTENCE").is_ok() {
            config.enable_persistence = true;
        }
        config.save_data_dir = env::var("SAVE_DATA_DIR").ok().map(PathBuf::from);
        config.session_id = env::var("COMPASS_SESSION_ID").ok();

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
