use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;
use crate::rng::{RandomSource, SeededRng};

const DEFAULT_HEALTH: (u32, u32) = (95, 104);
const DEFAULT_STRENGTH: (u32, u32) = (7, 11);
const DEFAULT_AGILITY: (u32, u32) = (7, 11);

/// Inclusive bounds a starting stat is rolled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct StatRange {
    pub min: u32,
    pub max: u32,
}

impl StatRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn as_range(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }

    /// Roll a value between the bounds. Swapped bounds are sampled as if ordered.
    pub fn sample(&self, rng: &mut impl RandomSource) -> u32 {
        let (lo, hi) = (self.min.min(self.max), self.min.max(self.max));
        rng.gen_range(lo..=hi).clamp(lo, hi)
    }

    fn validate(&self, stat: &'static str) -> Result<(), ConfigError> {
        if self.min == 0 {
            return Err(ConfigError::ZeroMinimum { stat });
        }
        if self.min > self.max {
            return Err(ConfigError::InvalidRange {
                stat,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Starting stat ranges, optionally with a fixed seed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlayerConfig {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_health")]
    pub health: StatRange,
    #[serde(default = "default_strength")]
    pub strength: StatRange,
    #[serde(default = "default_agility")]
    pub agility: StatRange,
}

fn default_health() -> StatRange {
    StatRange::new(DEFAULT_HEALTH.0, DEFAULT_HEALTH.1)
}

fn default_strength() -> StatRange {
    StatRange::new(DEFAULT_STRENGTH.0, DEFAULT_STRENGTH.1)
}

fn default_agility() -> StatRange {
    StatRange::new(DEFAULT_AGILITY.0, DEFAULT_AGILITY.1)
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            health: default_health(),
            strength: default_strength(),
            agility: default_agility(),
        }
    }
}

impl PlayerConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        debug!(target: "player_core.config", path = %path.display(), "loading player config");
        Self::from_toml_str(&data)
    }

    pub fn from_toml_str(data: &str) -> Result<Self, ConfigError> {
        let cfg: PlayerConfig = toml::from_str(data)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.health.validate("health")?;
        self.strength.validate("strength")?;
        self.agility.validate("agility")
    }

    /// Seeded source when `seed` is set, entropy-backed otherwise.
    pub fn rng(&self) -> SeededRng {
        match self.seed {
            Some(seed) => SeededRng::new(seed),
            None => SeededRng::from_entropy(),
        }
    }
}
