//! End-to-end replays through the era and anniversary rule sets.

use threatline_types::{
    ChangeOperator, CombatEvent, Edition, EffectRecord, EventKind, FightInput, GearItem, MarkerKind,
    ResourceKind, SpellModifier, TalentRank, ThreatScope,
};

use super::EventProcessor;
use crate::config::{ThreatConfig, registry};
use crate::ledger::EnemyKey;
use crate::runner::ThreatRun;
use crate::spells::{self, druid, hunter, items, paladin, rogue, runes, warrior};
use crate::test_support::*;

const ADD_0: EnemyKey = EnemyKey::new(ADDS, 0);
const ADD_1: EnemyKey = EnemyKey::new(ADDS, 1);

fn era() -> &'static ThreatConfig {
    registry().unwrap().get(Edition::Era).unwrap()
}

fn anniversary() -> &'static ThreatConfig {
    registry().unwrap().get(Edition::Anniversary).unwrap()
}

fn sod() -> &'static ThreatConfig {
    registry().unwrap().get(Edition::SeasonOfDiscovery).unwrap()
}

fn run(config: &ThreatConfig, input: &FightInput) -> ThreatRun {
    EventProcessor::process(config, input)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn on_add(mut event: CombatEvent, instance: u32) -> CombatEvent {
    event.target_id = ADDS;
    event.target_instance = instance;
    event
}

fn positioned(mut event: CombatEvent, x: f64, y: f64) -> CombatEvent {
    event.x = Some(x);
    event.y = Some(y);
    event
}

// ═══════════════════════════════════════════════════════════════════════════
// Formula scenarios
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_flat_cast_bonus_reports_additive_modifier_only() {
    let input = fight(None, vec![cast(1000, HUNTER, BOSS, 20736)]);
    let result = run(era(), &input);

    let block = result.events[0].threat.as_ref().unwrap();
    assert_eq!(block.calculated, 110.0);
    assert_eq!(block.spell_modifier, Some(SpellModifier::bonus(110.0)));
    assert_eq!(block.spell_modifier.unwrap().multiplier, None);
    assert_eq!(result.ledger.get(HUNTER, BOSS_KEY), 110.0);
}

#[test]
fn test_missed_distracting_shot_is_refunded() {
    let mut miss = damage(1100, HUNTER, BOSS, Some(20736), 0);
    miss.hit_type = Some(threatline_types::HitType::Resist);
    let input = fight(None, vec![cast(1000, HUNTER, BOSS, 20736), miss]);
    let result = run(era(), &input);
    assert_eq!(result.ledger.get(HUNTER, BOSS_KEY), 0.0);
}

#[test]
fn test_debuff_or_damage_lacerate() {
    let mut input = fight(
        None,
        vec![
            aura(1000, EventKind::ApplyDebuff, DRUID, BOSS, druid::LACERATE),
            damage(4000, DRUID, BOSS, Some(druid::LACERATE), 57),
        ],
    );
    input.metadata = anniversary_metadata();
    let result = run(anniversary(), &input);

    let applied = result.events[0].threat.as_ref().unwrap();
    assert_eq!(applied.calculated, 267.0);
    let tick = result.events[1].threat.as_ref().unwrap();
    assert_eq!(tick.calculated, 57.0);
    assert_eq!(tick.spell_modifier, None);
    assert_eq!(result.ledger.get(DRUID, BOSS_KEY), 324.0);
}

#[test]
fn test_knock_away_scales_only_the_victim() {
    let input = fight(
        None,
        vec![
            damage(1000, TANK, BOSS, None, 1000),
            damage(1500, ROGUE, BOSS, None, 1000),
            damage(2000, BOSS, TANK, Some(spells::ONYXIA_KNOCK_AWAY), 500),
        ],
    );
    let result = run(era(), &input);

    let knock = &result.events[2];
    let block = knock.threat.as_ref().unwrap();
    assert_eq!(block.calculated, 0.0);
    assert_eq!(
        block.effects,
        vec![EffectRecord::ModifyThreat {
            multiplier: 0.75,
            scope: ThreatScope::Target
        }]
    );
    assert_eq!(knock.changes.len(), 1);
    assert_eq!(knock.changes[0].operator, ChangeOperator::Set);
    assert_eq!(knock.changes[0].total, 750.0);
    assert_close(result.ledger.get(ROGUE, BOSS_KEY), 710.0);
}

#[test]
fn test_unknown_cast_contributes_nothing() {
    let input = fight(None, vec![cast(1000, TANK, BOSS, 123_456)]);
    let result = run(era(), &input);
    assert!(result.events[0].threat.is_none());
    assert!(result.ledger.is_empty());
}

#[test]
fn test_boss_melee_carries_no_threat_block() {
    let input = fight(
        None,
        vec![
            damage(1000, TANK, BOSS, None, 100),
            damage(2000, BOSS, TANK, None, 300),
        ],
    );
    let result = run(era(), &input);

    assert_eq!(result.events[0].threat.as_ref().unwrap().calculated, 100.0);
    let melee = &result.events[1];
    assert!(melee.threat.is_none());
    assert!(melee.changes.is_empty());
    assert_eq!(result.ledger.len(), 1);
}

#[test]
fn test_energize_is_split_and_unscaled() {
    let mut gain = CombatEvent::new(2000, EventKind::Energize, TANK, TANK);
    gain.amount = 12;
    gain.waste = 2;
    gain.resource = Some(ResourceKind::Rage);
    let input = fight(
        None,
        vec![
            aura(500, EventKind::ApplyBuff, TANK, TANK, warrior::DEFENSIVE_STANCE),
            damage(1000, TANK, BOSS, None, 0),
            gain,
        ],
    );
    let result = run(era(), &input);
    let block = result.events[2].threat.as_ref().unwrap();
    assert!(block.split);
    assert!(block.modifiers.is_empty());
    assert_eq!(block.calculated, 50.0);
    assert_eq!(result.ledger.get(TANK, BOSS_KEY), 50.0);
}

// ═══════════════════════════════════════════════════════════════════════════
// Modifiers and auras
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_stance_and_explicit_talent_rank() {
    let mut input = fight(
        None,
        vec![
            aura(500, EventKind::ApplyBuff, TANK, TANK, warrior::DEFENSIVE_STANCE),
            damage(1000, TANK, BOSS, None, 1000),
            aura(2000, EventKind::ApplyBuff, TANK, TANK, warrior::BATTLE_STANCE),
            damage(3000, TANK, BOSS, None, 1000),
        ],
    );
    input.combatants = vec![threatline_types::CombatantInfo {
        talent_ranks: vec![TalentRank {
            id: warrior::DEFIANCE[0],
            rank: 5,
        }],
        ..combatant(TANK)
    }];
    let result = run(era(), &input);

    let defensive = result.events[1].threat.as_ref().unwrap();
    assert_close(defensive.calculated, 1000.0 * 1.3 * 1.15);
    let names: Vec<&str> = defensive.modifiers.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Defensive Stance", "Defiance"]);

    // Battle Stance evicts Defensive Stance, which Defiance requires.
    let battle = result.events[3].threat.as_ref().unwrap();
    assert_close(battle.calculated, 800.0);
}

#[test]
fn test_pre_pull_aura_and_enchant_are_seeded() {
    let mut input = fight(None, vec![damage(1000, TANK, BOSS, None, 1000)]);
    input.combatants = vec![threatline_types::CombatantInfo {
        auras: vec![warrior::DEFENSIVE_STANCE],
        gear: vec![GearItem {
            id: 16863,
            enchant: Some(items::ENCHANT_GLOVES_THREAT),
            ..Default::default()
        }],
        ..combatant(TANK)
    }];
    let result = run(era(), &input);
    assert_close(result.ledger.get(TANK, BOSS_KEY), 1000.0 * 1.3 * 1.02);
}

#[test]
fn test_rogue_class_modifier() {
    let input = fight(None, vec![damage(1000, ROGUE, BOSS, None, 1000)]);
    let result = run(era(), &input);
    let block = result.events[0].threat.as_ref().unwrap();
    assert_close(block.calculated, 710.0);
    assert_eq!(block.modifiers[0].name, "Rogue");
}

#[test]
fn test_righteous_fury_only_scales_holy() {
    let input = fight(
        None,
        vec![
            aura(500, EventKind::ApplyBuff, PALADIN, PALADIN, paladin::RIGHTEOUS_FURY),
            damage(1000, PALADIN, BOSS, Some(CONSECRATION), 100),
            damage(2000, PALADIN, BOSS, None, 100),
        ],
    );
    let result = run(era(), &input);
    assert_close(result.events[1].threat.as_ref().unwrap().calculated, 160.0);
    assert_close(result.events[2].threat.as_ref().unwrap().calculated, 100.0);
}

#[test]
fn test_bear_ability_implies_form() {
    let input = fight(None, vec![damage(1000, DRUID, BOSS, Some(9881), 100)]);
    let mut processor = EventProcessor::new(era(), &input);
    let annotated = processor.process_event(&input.events[0]);
    assert!(processor.auras().has(DRUID, druid::DIRE_BEAR_FORM));
    assert_close(annotated.threat.unwrap().calculated, 100.0 * 1.75 * 1.3);
}

// ═══════════════════════════════════════════════════════════════════════════
// Ledger effects
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_split_heal_sums_to_value() {
    let input = fight(
        None,
        vec![
            damage(1000, TANK, BOSS, None, 10),
            on_add(damage(1100, TANK, BOSS, None, 10), 0),
            on_add(damage(1200, TANK, BOSS, None, 10), 1),
            {
                let mut heal = CombatEvent::new(2000, EventKind::Heal, HEALER, TANK);
                heal.amount = 900;
                heal
            },
        ],
    );
    let result = run(era(), &input);
    let heal = &result.events[3];
    assert_eq!(heal.changes.len(), 3);
    assert_close(heal.added_for(HEALER), 450.0);
    for enemy in [BOSS_KEY, ADD_0, ADD_1] {
        assert_close(result.ledger.get(HEALER, enemy), 150.0);
    }
}

#[test]
fn test_enemy_death_leaves_live_count() {
    let input = fight(
        None,
        vec![
            damage(1000, TANK, BOSS, None, 10),
            on_add(damage(1100, TANK, BOSS, None, 10), 0),
            on_add(CombatEvent::new(1500, EventKind::Death, TANK, BOSS), 0),
            {
                let mut heal = CombatEvent::new(2000, EventKind::Heal, HEALER, TANK);
                heal.amount = 100;
                heal
            },
        ],
    );
    let mut processor = EventProcessor::new(era(), &input);
    let annotated: Vec<_> = input.events.iter().map(|e| processor.process_event(e)).collect();
    assert_eq!(processor.status().live_enemy_count(), 1);
    assert_eq!(annotated[2].markers[0].kind, MarkerKind::Death);
    assert_eq!(annotated[3].changes.len(), 1);
    assert_close(processor.ledger().get(HEALER, BOSS_KEY), 50.0);
}

#[test]
fn test_friendly_death_wipes_actor() {
    let input = fight(
        None,
        vec![
            damage(1000, TANK, BOSS, None, 1000),
            on_add(damage(1100, TANK, BOSS, None, 400), 0),
            damage(1200, ROGUE, BOSS, None, 100),
            CombatEvent::new(3000, EventKind::Death, BOSS, TANK),
        ],
    );
    let result = run(era(), &input);
    let death = &result.events[3];
    assert_eq!(death.changes.len(), 2);
    assert!(death.changes.iter().all(|c| c.total == 0.0 && c.source_id == TANK));
    assert_eq!(death.markers[0].actor_id, TANK);
    assert!(result.ledger.get(ROGUE, BOSS_KEY) > 0.0);
}

#[test]
fn test_vanish_wipes_every_rogue_cell() {
    let input = fight(
        None,
        vec![
            damage(1000, ROGUE, BOSS, None, 1000),
            on_add(damage(1100, ROGUE, BOSS, None, 1000), 1),
            damage(1200, TANK, BOSS, None, 300),
            cast(2000, ROGUE, ROGUE, rogue::VANISH[1]),
        ],
    );
    let result = run(era(), &input);
    assert_eq!(result.events[3].changes.len(), 2);
    assert_eq!(result.ledger.get(ROGUE, BOSS_KEY), 0.0);
    assert_eq!(result.ledger.get(ROGUE, ADD_1), 0.0);
    assert_eq!(result.ledger.get(TANK, BOSS_KEY), 300.0);
}

#[test]
fn test_taunt_matches_top_threat_and_marks_fixate() {
    let input = fight(
        None,
        vec![
            damage(1000, TANK, BOSS, None, 200),
            damage(1100, ROGUE, BOSS, None, 1000),
            cast(3000, TANK, BOSS, warrior::TAUNT),
            aura(3001, EventKind::ApplyDebuff, TANK, BOSS, warrior::TAUNT),
        ],
    );
    let result = run(era(), &input);

    let taunt = &result.events[2];
    assert_eq!(taunt.changes.len(), 1);
    assert_eq!(taunt.changes[0].operator, ChangeOperator::Set);
    assert_close(taunt.changes[0].amount, 510.0);
    assert_close(result.ledger.get(TANK, BOSS_KEY), 710.0);

    let marker = result.events[3].markers[0];
    assert_eq!(marker.kind, MarkerKind::FixateStart);
    assert_eq!(marker.actor_id, TANK);
    assert_eq!(marker.enemy_id, Some(BOSS));
    assert!(result.events[3].threat.is_none());
}

// ═══════════════════════════════════════════════════════════════════════════
// Encounters
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_reappearance_wipes_all_cells_against_boss() {
    let mut input = fight(
        Some(spells::RAGNAROS_ENCOUNTER),
        vec![
            damage(1000, TANK, BOSS, None, 1000),
            damage(1500, HEALER, BOSS, None, 100),
            damage(2000, BOSS, TANK, None, 300),
            damage(10_000, TANK, BOSS, None, 1000),
            damage(40_000, BOSS, TANK, None, 300),
        ],
    );
    input.enemies[0].game_id = spells::RAGNAROS_NPC;
    let result = run(era(), &input);

    assert!(result.events[3].threat.as_ref().unwrap().effects.is_empty());
    let back = &result.events[4];
    assert_eq!(
        back.threat.as_ref().unwrap().effects,
        vec![EffectRecord::ModifyThreat {
            multiplier: 0.0,
            scope: ThreatScope::All
        }]
    );
    assert_eq!(back.changes.len(), 2);
    assert!(
        back.changes
            .iter()
            .all(|c| c.operator == ChangeOperator::Set && c.total == 0.0)
    );
}

#[test]
fn test_twin_teleport_resets_and_seeds_nearest() {
    let mut input = fight(
        Some(spells::TWIN_EMPERORS_ENCOUNTER),
        vec![
            positioned(damage(1000, TANK, BOSS, None, 1000), 0.0, 0.0),
            on_add(damage(1100, TANK, BOSS, None, 500), 0),
            positioned(cast(1200, HEALER, HEALER, 123_456), 50.0, 0.0),
            positioned(damage(1300, BOSS, TANK, None, 100), 1.0, 0.0),
            positioned(
                {
                    let mut hit = damage(1400, ADDS, HEALER, None, 100);
                    hit.source_instance = 0;
                    hit
                },
                49.0,
                0.0,
            ),
            cast(5000, BOSS, BOSS, spells::TWIN_TELEPORT),
            cast(5200, ADDS, ADDS, spells::TWIN_TELEPORT),
        ],
    );
    input.enemies[0].game_id = spells::VEKNILASH_NPC;
    input.enemies[1].game_id = spells::VEKLOR_NPC;
    input.enemies[1].instance_count = 1;
    let result = run(era(), &input);

    assert_eq!(result.ledger.get(TANK, BOSS_KEY), 1.0);
    assert_eq!(result.ledger.get(TANK, ADD_0), 0.0);
    assert_eq!(result.ledger.get(HEALER, ADD_0), 1.0);
    assert!(result.events[6].changes.is_empty());
    assert!(result.events[6].threat.is_none());
}

#[test]
fn test_twin_teleport_uses_logged_emperor_instance() {
    let mut input = fight(
        Some(spells::TWIN_EMPERORS_ENCOUNTER),
        vec![
            damage(1000, TANK, BOSS, None, 1000),
            on_add(damage(1100, TANK, BOSS, None, 500), 1),
            cast(5000, BOSS, BOSS, spells::TWIN_TELEPORT),
        ],
    );
    input.enemies[0].game_id = spells::VEKNILASH_NPC;
    input.enemies[1].game_id = spells::VEKLOR_NPC;
    let result = run(era(), &input);

    assert_eq!(result.ledger.get(TANK, BOSS_KEY), 0.0);
    assert_eq!(result.ledger.get(TANK, ADD_1), 0.0);
    assert!(!result.ledger.contains(TANK, ADD_0));
    let teleport = result.events[2].threat.as_ref().unwrap();
    assert_eq!(teleport.calculated, 0.0);
}

// ═══════════════════════════════════════════════════════════════════════════
// Interceptors
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_misdirection_redirects_three_hits() {
    const STEADY_SHOT: u32 = 34120;
    let mut input = fight(
        None,
        vec![
            cast(1000, HUNTER, TANK, hunter::MISDIRECTION),
            damage(2000, HUNTER, BOSS, Some(STEADY_SHOT), 100),
            damage(3000, HUNTER, BOSS, Some(STEADY_SHOT), 100),
            damage(4000, HUNTER, BOSS, Some(STEADY_SHOT), 100),
            damage(5000, HUNTER, BOSS, Some(STEADY_SHOT), 100),
        ],
    );
    input.metadata = anniversary_metadata();

    let mut processor = EventProcessor::new(anniversary(), &input);
    let install = processor.process_event(&input.events[0]);
    assert_eq!(
        install.threat.unwrap().effects,
        vec![EffectRecord::InstallInterceptor {
            name: "Misdirection".to_string()
        }]
    );
    assert!(processor.auras().has(HUNTER, hunter::MISDIRECTION_BUFF));

    let hits: Vec<_> = input.events[1..]
        .iter()
        .map(|e| processor.process_event(e))
        .collect();
    let credited: Vec<Option<i64>> = hits
        .iter()
        .map(|h| h.threat.as_ref().unwrap().redirected_to)
        .collect();
    assert_eq!(credited, vec![Some(TANK), Some(TANK), Some(TANK), None]);
    assert!(!processor.auras().has(HUNTER, hunter::MISDIRECTION_BUFF));
    assert_eq!(processor.ledger().get(TANK, BOSS_KEY), 300.0);
    assert_eq!(processor.ledger().get(HUNTER, BOSS_KEY), 100.0);
}

#[test]
fn test_interceptors_uninstalled_at_finish() {
    let mut input = fight(
        None,
        vec![
            cast(1000, HUNTER, TANK, hunter::MISDIRECTION),
            damage(2000, HUNTER, BOSS, None, 100),
        ],
    );
    input.metadata = anniversary_metadata();

    let mut processor = EventProcessor::new(anniversary(), &input);
    let events = input.events.iter().map(|e| processor.process_event(e)).collect();
    assert!(processor.auras().has(HUNTER, hunter::MISDIRECTION_BUFF));
    let result = processor.finish(events);
    assert_eq!(result.ledger.get(TANK, BOSS_KEY), 100.0);
}

// ═══════════════════════════════════════════════════════════════════════════
// Threat drops
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_feign_death_wipes_every_hunter_cell() {
    let input = fight(
        None,
        vec![
            damage(1000, HUNTER, BOSS, None, 500),
            on_add(damage(1100, HUNTER, BOSS, None, 300), 0),
            damage(1200, TANK, BOSS, None, 400),
            cast(2000, HUNTER, HUNTER, hunter::FEIGN_DEATH),
        ],
    );
    let result = run(era(), &input);

    let feign = &result.events[3];
    let block = feign.threat.as_ref().unwrap();
    assert_eq!(block.calculated, 0.0);
    assert_eq!(
        block.effects,
        vec![EffectRecord::ModifyThreat {
            multiplier: 0.0,
            scope: ThreatScope::All
        }]
    );
    assert_eq!(feign.changes.len(), 2);
    assert_eq!(result.ledger.get(HUNTER, BOSS_KEY), 0.0);
    assert_eq!(result.ledger.get(HUNTER, ADD_0), 0.0);
    assert_eq!(result.ledger.get(TANK, BOSS_KEY), 400.0);
}

#[test]
fn test_noth_blink_wipes_table_against_caster() {
    let input = fight(
        None,
        vec![
            damage(1000, TANK, BOSS, None, 1000),
            damage(1100, HEALER, BOSS, None, 100),
            on_add(damage(1200, TANK, BOSS, None, 300), 0),
            cast(3000, BOSS, BOSS, spells::NOTH_BLINK[0]),
        ],
    );
    let result = run(era(), &input);

    let blink = &result.events[3];
    assert_eq!(
        blink.threat.as_ref().unwrap().effects,
        vec![EffectRecord::ModifyThreat {
            multiplier: 0.0,
            scope: ThreatScope::All
        }]
    );
    assert_eq!(blink.changes.len(), 2);
    assert_eq!(result.ledger.get(TANK, BOSS_KEY), 0.0);
    assert_eq!(result.ledger.get(HEALER, BOSS_KEY), 0.0);
    assert_eq!(result.ledger.get(TANK, ADD_0), 300.0);
}

#[test]
fn test_rune_taunt_only_in_season_of_discovery() {
    let events = vec![
        damage(1000, TANK, BOSS, None, 200),
        damage(1100, ROGUE, BOSS, None, 1000),
        cast(3000, PALADIN, BOSS, runes::HAND_OF_RECKONING),
    ];
    let mut input = fight(None, events);
    input.metadata.season_id = Some(crate::config::SOD_SEASON_ID);

    let result = run(sod(), &input);
    let taunt = &result.events[2];
    assert_eq!(taunt.changes.len(), 1);
    assert_eq!(taunt.changes[0].operator, ChangeOperator::Set);
    assert_close(result.ledger.get(PALADIN, BOSS_KEY), 710.0);

    let era_result = run(era(), &input);
    assert!(era_result.events[2].threat.is_none());
    assert!(!era_result.ledger.contains(PALADIN, BOSS_KEY));
}

// ═══════════════════════════════════════════════════════════════════════════
// State markers
// ═══════════════════════════════════════════════════════════════════════════

const POLYMORPH: u32 = 118;
const PANIC: u32 = 19408;
const DIVINE_SHIELD: u32 = 642;

#[test]
fn test_crowd_control_on_enemy_marks_enemy_side() {
    let input = fight(
        None,
        vec![
            on_add(aura(1000, EventKind::ApplyDebuff, HEALER, BOSS, POLYMORPH), 1),
            on_add(aura(9000, EventKind::RemoveDebuff, HEALER, BOSS, POLYMORPH), 1),
        ],
    );
    let result = run(era(), &input);

    let start = result.events[0].markers[0];
    assert_eq!(start.kind, MarkerKind::AggroLossStart);
    assert_eq!(start.actor_id, HEALER);
    assert_eq!(start.enemy_id, Some(ADDS));
    assert_eq!(start.spell_id, Some(POLYMORPH));
    assert_eq!(result.events[1].markers[0].kind, MarkerKind::AggroLossEnd);
}

#[test]
fn test_boss_fear_marks_feared_player() {
    let input = fight(
        None,
        vec![aura(1000, EventKind::ApplyDebuff, BOSS, TANK, PANIC)],
    );
    let result = run(era(), &input);

    let marker = result.events[0].markers[0];
    assert_eq!(marker.kind, MarkerKind::AggroLossStart);
    assert_eq!(marker.actor_id, TANK);
    assert_eq!(marker.enemy_id, Some(BOSS));
    assert!(result.events[0].threat.is_none());
}

#[test]
fn test_invulnerability_markers() {
    let input = fight(
        None,
        vec![
            aura(1000, EventKind::ApplyBuff, PALADIN, PALADIN, DIVINE_SHIELD),
            aura(13_000, EventKind::RemoveBuff, PALADIN, PALADIN, DIVINE_SHIELD),
        ],
    );
    let result = run(era(), &input);

    let start = result.events[0].markers[0];
    assert_eq!(start.kind, MarkerKind::InvulnerableStart);
    assert_eq!(start.actor_id, PALADIN);
    assert_eq!(start.enemy_id, None);
    let end = result.events[1].markers[0];
    assert_eq!(end.kind, MarkerKind::InvulnerableEnd);
    assert_eq!(end.actor_id, PALADIN);
}
