//! Helpers for deterministic player regression tests.

use std::ops::RangeInclusive;

use player_core::{Player, PlayerConfig, RandomSource, SeededRng};
use serde_json::json;
use tracing_subscriber::EnvFilter;

pub use player_core::DEFAULT_SEED;

/// Random source that always answers with the low or high end of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedRoll {
    Min,
    Max,
}

impl RandomSource for FixedRoll {
    fn gen_range(&mut self, range: RangeInclusive<u32>) -> u32 {
        match self {
            FixedRoll::Min => *range.start(),
            FixedRoll::Max => *range.end(),
        }
    }
}

/// Install a test-friendly fmt subscriber; respects `RUST_LOG`.
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init()
        .ok();
}

pub fn seeded_player(name: &str, seed: u64) -> Player {
    let cfg = PlayerConfig::from_seed(seed);
    Player::from_config(name, &cfg, cfg.rng())
}

pub fn sample_player(seed: u64) -> serde_json::Value {
    let player = seeded_player("Dave", seed);
    json!({ "seed": seed, "stats": player.get_stats() })
}

pub fn sample_attack_rolls(seed: u64, strength: u32, count: usize) -> Vec<u32> {
    let mut player = Player::with_rng("Dave", SeededRng::new(seed));
    player.set_strength(strength);
    (0..count).map(|_| player.get_attack_value()).collect()
}
