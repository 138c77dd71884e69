//! Tests for aura tracking and synthetic aura inference
//!
//! Covers event-order updates, exclusive groups, implications, forced
//! windows and combatant-payload inference.

use hashbrown::HashMap;
use threatline_types::{CombatantInfo, GearItem, PlayerClass, SpellId, TalentRank};

use super::synthetic::{SetBonusRule, SyntheticAuraRules, TalentPointRule};
use super::tracker::AuraTracker;
use crate::events::{FightSignal, SignalHandler};

const BATTLE: SpellId = 2457;
const DEFENSIVE: SpellId = 71;
const BERSERKER: SpellId = 2458;
const BEAR: SpellId = 9634;
const MAUL: SpellId = 9881;

fn make_tracker() -> AuraTracker {
    let groups = vec![vec![BATTLE, DEFENSIVE, BERSERKER]];
    let mut implications = HashMap::new();
    implications.insert(BEAR, vec![MAUL]);
    AuraTracker::new(&groups, &implications)
}

fn applied(actor: i64, aura: SpellId) -> FightSignal {
    FightSignal::AuraApplied {
        actor,
        aura,
        source: actor,
        timestamp: 0,
    }
}

fn removed(actor: i64, aura: SpellId) -> FightSignal {
    FightSignal::AuraRemoved {
        actor,
        aura,
        source: actor,
        timestamp: 0,
    }
}

#[test]
fn test_apply_and_remove_in_event_order() {
    let mut tracker = make_tracker();
    tracker.handle_signals(&[applied(1, 1038), applied(1, 1038), removed(1, 1038)]);
    assert!(!tracker.has(1, 1038));
    assert!(tracker.auras(1).is_empty());
}

#[test]
fn test_remove_unknown_aura_is_harmless() {
    let mut tracker = make_tracker();
    tracker.handle_signal(&removed(7, 1038));
    assert!(tracker.auras(7).is_empty());
}

#[test]
fn test_stance_change_evicts_previous_stance() {
    let mut tracker = make_tracker();
    tracker.handle_signals(&[applied(1, BATTLE), applied(1, 1038), applied(1, DEFENSIVE)]);
    assert!(tracker.has(1, DEFENSIVE));
    assert!(!tracker.has(1, BATTLE));
    assert!(tracker.has(1, 1038));
}

#[test]
fn test_ability_implies_form() {
    let mut tracker = make_tracker();
    tracker.handle_signal(&FightSignal::AbilityUsed {
        actor: 5,
        ability: MAUL,
        timestamp: 0,
    });
    assert!(tracker.has(5, BEAR));
}

#[test]
fn test_forced_aura_restores_absent_state() {
    let mut tracker = make_tracker();
    let was_present = tracker.force(4, 35079);
    assert!(!was_present);
    assert!(tracker.has(4, 35079));
    tracker.release(4, 35079, was_present);
    assert!(!tracker.has(4, 35079));
}

#[test]
fn test_forced_aura_keeps_preexisting_aura() {
    let mut tracker = make_tracker();
    tracker.handle_signal(&applied(4, 35079));
    let was_present = tracker.force(4, 35079);
    assert!(was_present);
    tracker.release(4, 35079, was_present);
    assert!(tracker.has(4, 35079));
}

// ─── Synthetic inference ────────────────────────────────────────────────────

const DEFIANCE_R3: SpellId = 12789;
const DEFIANCE_R5: SpellId = 12792;

fn make_rules() -> SyntheticAuraRules {
    let mut rules = SyntheticAuraRules::default();
    rules.talent_points.push(TalentPointRule {
        class: PlayerClass::Warrior,
        tree: 2,
        thresholds: &[(11, DEFIANCE_R3), (15, DEFIANCE_R5)],
    });
    rules
        .talent_ranks
        .insert(12303, &[12303, 12788, DEFIANCE_R3, 12791, DEFIANCE_R5]);
    rules.enchants.insert(2613, 25072);
    rules.temporary_enchants.insert(7011, 408531);
    rules.set_bonuses.push(SetBonusRule {
        set_id: 209,
        pieces: 8,
        aura: 1_000_000_001,
    });
    rules
}

#[test]
fn test_highest_qualifying_threshold_wins() {
    let rules = make_rules();
    let mut info = CombatantInfo {
        actor_id: 1,
        talent_points: vec![5, 0, 31],
        ..Default::default()
    };
    assert_eq!(rules.infer(Some(PlayerClass::Warrior), &info), vec![DEFIANCE_R5]);

    info.talent_points = vec![20, 18, 13];
    assert_eq!(rules.infer(Some(PlayerClass::Warrior), &info), vec![DEFIANCE_R3]);

    info.talent_points = vec![31, 20, 0];
    assert!(rules.infer(Some(PlayerClass::Warrior), &info).is_empty());
}

#[test]
fn test_point_rules_are_class_scoped() {
    let rules = make_rules();
    let info = CombatantInfo {
        actor_id: 2,
        talent_points: vec![0, 0, 31],
        ..Default::default()
    };
    assert!(rules.infer(Some(PlayerClass::Paladin), &info).is_empty());
    assert!(rules.infer(None, &info).is_empty());
}

#[test]
fn test_explicit_ranks_override_point_guess() {
    let rules = make_rules();
    let info = CombatantInfo {
        actor_id: 1,
        talent_points: vec![0, 0, 31],
        talent_ranks: vec![TalentRank { id: 12303, rank: 3 }],
        ..Default::default()
    };
    assert_eq!(rules.infer(Some(PlayerClass::Warrior), &info), vec![DEFIANCE_R3]);
}

#[test]
fn test_gear_enchants_and_set_bonus() {
    let rules = make_rules();
    let mut gear: Vec<GearItem> = (0..8)
        .map(|i| GearItem {
            id: 16860 + i,
            set_id: Some(209),
            ..Default::default()
        })
        .collect();
    gear[0].enchant = Some(2613);
    gear[1].temporary_enchant = Some(7011);
    let info = CombatantInfo {
        actor_id: 1,
        gear,
        ..Default::default()
    };
    assert_eq!(
        rules.infer(Some(PlayerClass::Warrior), &info),
        vec![25072, 408531, 1_000_000_001]
    );

    let partial = CombatantInfo {
        actor_id: 1,
        gear: info.gear[..7].to_vec(),
        ..Default::default()
    };
    assert!(!rules.infer(None, &partial).contains(&1_000_000_001));
}
