//! Player entity for a small role-playing game: rolled stats, a potion
//! inventory and a bounded attack roll, all driven by an injectable random
//! source so callers can keep simulations deterministic.

pub mod config;
pub mod error;
pub mod player;
pub mod potion;
pub mod rng;

pub use config::{PlayerConfig, StatRange};
pub use error::{ConfigError, PlayerError};
pub use player::{InventoryView, Player, Stats, ATTACK_VARIANCE};
pub use potion::{Potion, PotionKind};
pub use rng::{RandomSource, SeededRng, DEFAULT_SEED};
