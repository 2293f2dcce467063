use std::sync::Arc;

use player_core::{InventoryView, Player, Potion, PotionKind, SeededRng};
use player_regression::init_test_logging;

fn dave() -> Player {
    init_test_logging();
    Player::new("Dave")
}

#[test]
fn creates_a_player() {
    let player = dave();

    assert_eq!("Dave", player.name());
    assert!(player.health() > 0);
    assert!(player.strength() > 0);
    assert!(player.agility() > 0);
    assert_eq!(1, player.inventory().len());
}

#[test]
fn gets_stats_as_four_named_values() {
    let player = dave();
    let stats = serde_json::to_value(player.get_stats()).unwrap();
    let stats = stats.as_object().unwrap();

    assert_eq!(4, stats.len());
    for key in ["potions", "health", "strength", "agility"] {
        assert!(stats.contains_key(key), "missing {key}");
    }
    assert_eq!(1, player.get_stats().potions);
}

#[test]
fn gets_inventory_or_empty() {
    let mut player = dave();
    assert!(matches!(player.get_inventory(), InventoryView::Items(items) if items.len() == 1));

    player.set_inventory(Vec::new());
    assert_eq!(InventoryView::Empty, player.get_inventory());
}

#[test]
fn health_text_includes_the_value() {
    let mut player = dave();
    assert!(player.get_health().contains(&player.health().to_string()));

    player.set_health(7);
    assert_eq!("Dave's health is now 7!", player.get_health());
}

#[test]
fn checks_if_alive() {
    let mut player = dave();
    assert!(player.is_alive());

    player.set_health(0);
    assert!(!player.is_alive());
}

#[test]
fn subtracts_health_and_never_goes_negative() {
    let mut player = dave();
    let old_health = player.health();

    player.reduce_health(5);
    assert_eq!(old_health - 5, player.health());

    player.reduce_health(99_999);
    assert_eq!(0, player.health());
}

#[test]
fn reduced_health_is_difference_floored_at_zero() {
    let mut player = dave();
    let values = [0, 1, 5, 42, 99, 100, 101, 1_000, u32::MAX - 1, u32::MAX];

    for &start in &values {
        for &damage in values.iter().chain([start].iter()) {
            player.set_health(start);
            player.reduce_health(damage);
            assert_eq!(
                start.saturating_sub(damage),
                player.health(),
                "start {start}, damage {damage}"
            );
        }
        player.set_health(start);
        player.reduce_health(0);
        assert_eq!(start, player.health());
    }
}

#[test]
fn attack_value_stays_within_five_of_strength() {
    let mut player = dave();
    player.set_strength(10);

    for _ in 0..1_000 {
        let attack = player.get_attack_value();
        assert!((5..=15).contains(&attack), "attack {attack} out of range");
    }
}

#[test]
fn attack_value_reaches_both_ends() {
    let mut player = Player::with_rng("Dave", SeededRng::new(1));
    player.set_strength(10);

    let rolls: Vec<u32> = (0..2_000).map(|_| player.get_attack_value()).collect();
    assert!(rolls.contains(&5));
    assert!(rolls.contains(&15));
}

#[test]
fn adds_a_potion() {
    let mut player = dave();
    let old_count = player.inventory().len();

    let potion = Potion::random(player.rng_mut());
    player.add_potion(potion.clone());

    assert_eq!(old_count + 1, player.inventory().len());
    assert_eq!(&potion, player.inventory().last().unwrap().as_ref());
}

#[test]
fn uses_a_potion() {
    let mut player = dave();
    let middle = Arc::new(Potion::new(PotionKind::Agility, 8));
    player.set_inventory(vec![
        Arc::new(Potion::new(PotionKind::Health, 30)),
        Arc::clone(&middle),
        Arc::new(Potion::new(PotionKind::Strength, 7)),
    ]);
    let old_count = player.inventory().len();

    let used = player.use_potion(1).unwrap();

    assert_eq!(old_count - 1, player.inventory().len());
    assert!(Arc::ptr_eq(&middle, &used));
    assert!(player.inventory().iter().all(|p| !Arc::ptr_eq(p, &middle)));
}

#[test]
fn using_past_the_end_is_an_error() {
    let mut player = dave();
    assert!(player.use_potion(1).is_err());
    assert_eq!(1, player.inventory().len());
}
