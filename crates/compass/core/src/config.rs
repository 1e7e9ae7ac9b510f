//! Tool tiers and the tunable detection parameters.

use crate::error::ConfigError;

/// Capability level of a compass.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ToolTier {
    /// Senses tier-1 materials.
    Basic,
    /// Senses tier-1 and tier-2 materials.
    Advanced,
    /// Senses everything in the standard catalog.
    Master,
}

impl ToolTier {
    /// Numeric tier compared against [`crate::Material::tier`].
    pub const fn level(self) -> u8 {
        match self {
            ToolTier::Basic => 1,
            ToolTier::Advanced => 2,
            ToolTier::Master => 3,
        }
    }

    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(ToolTier::Basic),
            2 => Some(ToolTier::Advanced),
            3 => Some(ToolTier::Master),
            _ => None,
        }
    }
}

/// Immutable capability of one tool kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToolSpec {
    pub tier: ToolTier,
    /// Half-width of the scanned cube, in blocks.
    pub range: u32,
}

impl ToolSpec {
    pub const fn new(tier: ToolTier, range: u32) -> Self {
        Self { tier, range }
    }
}

/// Detection ranges per tier and the automatic scan cadence.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CompassConfig {
    pub basic_range: u32,
    pub advanced_range: u32,
    pub master_range: u32,
    /// Ticks between automatic scans (20 ticks = 1 second).
    pub update_interval: u32,
}

impl CompassConfig {
    pub const DEFAULT_BASIC_RANGE: u32 = 16;
    pub const DEFAULT_ADVANCED_RANGE: u32 = 32;
    pub const DEFAULT_MASTER_RANGE: u32 = 64;
    pub const DEFAULT_UPDATE_INTERVAL: u32 = 20;

    pub const BASIC_RANGE_BOUNDS: (u32, u32) = (8, 64);
    pub const ADVANCED_RANGE_BOUNDS: (u32, u32) = (16, 128);
    pub const MASTER_RANGE_BOUNDS: (u32, u32) = (32, 256);
    pub const UPDATE_INTERVAL_BOUNDS: (u32, u32) = (5, 100);

    pub const fn new() -> Self {
        Self {
            basic_range: Self::DEFAULT_BASIC_RANGE,
            advanced_range: Self::DEFAULT_ADVANCED_RANGE,
            master_range: Self::DEFAULT_MASTER_RANGE,
            update_interval: Self::DEFAULT_UPDATE_INTERVAL,
        }
    }

    pub const fn range_for(&self, tier: ToolTier) -> u32 {
        match tier {
            ToolTier::Basic => self.basic_range,
            ToolTier::Advanced => self.advanced_range,
            ToolTier::Master => self.master_range,
        }
    }

    pub const fn spec_for(&self, tier: ToolTier) -> ToolSpec {
        ToolSpec::new(tier, self.range_for(tier))
    }

    /// Checks every option against its documented bounds.
    ///
    /// The scanner and tracker assume a validated configuration and do not
    /// re-check radius bounds themselves.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::OutOfRange`] encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check("basic_range", self.basic_range, Self::BASIC_RANGE_BOUNDS)?;
        check("advanced_range", self.advanced_range, Self::ADVANCED_RANGE_BOUNDS)?;
        check("master_range", self.master_range, Self::MASTER_RANGE_BOUNDS)?;
        check(
            "update_interval",
            self.update_interval,
            Self::UPDATE_INTERVAL_BOUNDS,
        )
    }
}

impl Default for CompassConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn check(option: &'static str, value: u32, (min, max): (u32, u32)) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            option,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(CompassConfig::default().validate(), Ok(()));
    }

    #[test]
    fn validate_reports_offending_option() {
        let config = CompassConfig {
            update_interval: 4,
            ..CompassConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                option: "update_interval",
                value: 4,
                min: 5,
                max: 100,
            })
        );

        let config = CompassConfig {
            master_range: 257,
            ..CompassConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn spec_for_uses_tier_range() {
        let config = CompassConfig::default();
        assert_eq!(config.spec_for(ToolTier::Advanced), ToolSpec::new(ToolTier::Advanced, 32));
    }

    #[test]
    fn tier_names_round_trip() {
        assert_eq!(ToolTier::Master.to_string(), "master");
        assert_eq!(ToolTier::from_str("BASIC"), Ok(ToolTier::Basic));
        assert_eq!(ToolTier::from_level(2), Some(ToolTier::Advanced));
        assert_eq!(ToolTier::from_level(4), None);
    }

    #[test]
    fn every_tier_has_a_valid_range_and_level() {
        use strum::IntoEnumIterator;

        let config = CompassConfig::default();
        let tiers: Vec<_> = ToolTier::iter().collect();
        assert_eq!(tiers, [ToolTier::Basic, ToolTier::Advanced, ToolTier::Master]);
        for tier in tiers {
            assert_eq!(ToolTier::from_level(tier.level()), Some(tier));
            assert_eq!(ToolTier::from_str(&tier.to_string()), Ok(tier));
            assert!(config.range_for(tier) >= CompassConfig::BASIC_RANGE_BOUNDS.0);
        }
    }
}
