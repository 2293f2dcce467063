use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rng::RandomSource;

const HEALTH_POTION_VALUE: (u32, u32) = (30, 39);
const STAT_POTION_VALUE: (u32, u32) = (7, 11);

/// Which stat a potion restores when consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PotionKind {
    Health,
    Strength,
    Agility,
}

impl PotionKind {
    pub const ALL: [PotionKind; 3] = [
        PotionKind::Health,
        PotionKind::Strength,
        PotionKind::Agility,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PotionKind::Health => "health",
            PotionKind::Strength => "strength",
            PotionKind::Agility => "agility",
        }
    }
}

impl fmt::Display for PotionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A consumable inventory item.
///
/// Inventories hold potions behind `Arc`, so two potions with the same kind
/// and value are still distinct items; compare with `Arc::ptr_eq` for
/// membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Potion {
    pub kind: PotionKind,
    pub value: u32,
}

impl Potion {
    pub fn new(kind: PotionKind, value: u32) -> Self {
        Self { kind, value }
    }

    /// Roll a potion of `kind`. Health potions are worth 30-39, stat potions 7-11.
    pub fn generate(kind: PotionKind, rng: &mut impl RandomSource) -> Self {
        let (min, max) = match kind {
            PotionKind::Health => HEALTH_POTION_VALUE,
            PotionKind::Strength | PotionKind::Agility => STAT_POTION_VALUE,
        };
        Self::new(kind, rng.gen_range(min..=max).clamp(min, max))
    }

    /// Roll a potion of a uniformly chosen kind.
    pub fn random(rng: &mut impl RandomSource) -> Self {
        let last = (PotionKind::ALL.len() - 1) as u32;
        let idx = rng.gen_range(0..=last).min(last) as usize;
        Self::generate(PotionKind::ALL[idx], rng)
    }
}

impl fmt::Display for Potion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} potion (+{})", self.kind, self.value)
    }
}
