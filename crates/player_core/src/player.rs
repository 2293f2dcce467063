//! The player entity: combat stats plus a potion inventory.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::PlayerConfig;
use crate::error::PlayerError;
use crate::potion::{Potion, PotionKind};
use crate::rng::{RandomSource, SeededRng};

/// How far an attack may land from the player's strength, either way.
pub const ATTACK_VARIANCE: u32 = 5;

/// Snapshot of the numbers a status screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub potions: usize,
    pub health: u32,
    pub strength: u32,
    pub agility: u32,
}

/// Result of [`Player::get_inventory`]. An empty inventory is reported as
/// `Empty` rather than as an empty slice, so callers have to branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryView<'a> {
    Empty,
    Items(&'a [Arc<Potion>]),
}

impl<'a> InventoryView<'a> {
    pub fn is_empty(&self) -> bool {
        matches!(self, InventoryView::Empty)
    }

    pub fn as_slice(&self) -> Option<&'a [Arc<Potion>]> {
        match self {
            InventoryView::Empty => None,
            InventoryView::Items(items) => Some(items),
        }
    }
}

#[derive(Debug)]
pub struct Player<R: RandomSource = SeededRng> {
    name: String,
    health: u32,
    strength: u32,
    agility: u32,
    inventory: Vec<Arc<Potion>>,
    rng: R,
}

impl Player<SeededRng> {
    /// Player with default stat ranges and an entropy-seeded random source.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_rng(name, SeededRng::from_entropy())
    }
}

impl<R: RandomSource> Player<R> {
    pub fn with_rng(name: impl Into<String>, rng: R) -> Self {
        Self::from_config(name, &PlayerConfig::default(), rng)
    }

    /// Roll starting stats from `config` and hand the player one health potion.
    pub fn from_config(name: impl Into<String>, config: &PlayerConfig, mut rng: R) -> Self {
        let name = name.into();
        let health = config.health.sample(&mut rng);
        let strength = config.strength.sample(&mut rng);
        let agility = config.agility.sample(&mut rng);
        let starter = Potion::generate(PotionKind::Health, &mut rng);
        debug!(
            target: "player_core.player",
            name = %name, health, strength, agility,
            "player created"
        );
        Self {
            name,
            health,
            strength,
            agility,
            inventory: vec![Arc::new(starter)],
            rng,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn set_health(&mut self, health: u32) {
        self.health = health;
    }

    pub fn strength(&self) -> u32 {
        self.strength
    }

    pub fn set_strength(&mut self, strength: u32) {
        self.strength = strength;
    }

    pub fn agility(&self) -> u32 {
        self.agility
    }

    pub fn set_agility(&mut self, agility: u32) {
        self.agility = agility;
    }

    /// Raw inventory, empty or not.
    pub fn inventory(&self) -> &[Arc<Potion>] {
        &self.inventory
    }

    pub fn set_inventory(&mut self, inventory: Vec<Arc<Potion>>) {
        self.inventory = inventory;
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn get_stats(&self) -> Stats {
        Stats {
            potions: self.inventory.len(),
            health: self.health,
            strength: self.strength,
            agility: self.agility,
        }
    }

    pub fn get_inventory(&self) -> InventoryView<'_> {
        if self.inventory.is_empty() {
            InventoryView::Empty
        } else {
            InventoryView::Items(&self.inventory)
        }
    }

    pub fn get_health(&self) -> String {
        format!("{}'s health is now {}!", self.name, self.health)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn reduce_health(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
        info!(target: "player_core.health", name = %self.name, amount, current = self.health, "health updated");
    }

    /// Strength plus or minus [`ATTACK_VARIANCE`], clamped so a misbehaving
    /// random source cannot push it outside that window.
    pub fn get_attack_value(&mut self) -> u32 {
        let min = self.strength.saturating_sub(ATTACK_VARIANCE);
        let max = self.strength.saturating_add(ATTACK_VARIANCE);
        let value = self.rng.gen_range(min..=max).clamp(min, max);
        debug!(target: "player_core.combat", strength = self.strength, value, "attack rolled");
        value
    }

    pub fn add_potion(&mut self, potion: impl Into<Arc<Potion>>) {
        let potion = potion.into();
        debug!(target: "player_core.inventory", kind = %potion.kind, value = potion.value, "potion added");
        self.inventory.push(potion);
    }

    /// Remove the potion at `index` and apply it to the matching stat.
    pub fn use_potion(&mut self, index: usize) -> Result<Arc<Potion>, PlayerError> {
        let len = self.inventory.len();
        if index >= len {
            return Err(PlayerError::PotionIndexOutOfRange { index, len });
        }
        let potion = self.inventory.remove(index);
        let stat = match potion.kind {
            PotionKind::Health => &mut self.health,
            PotionKind::Strength => &mut self.strength,
            PotionKind::Agility => &mut self.agility,
        };
        *stat = stat.saturating_add(potion.value);
        info!(
            target: "player_core.inventory",
            name = %self.name, kind = %potion.kind, value = potion.value, now = *stat,
            "potion used"
        );
        Ok(potion)
    }
}
