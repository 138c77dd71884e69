//! Threat tables for replayed fights.

use std::fmt::Write;

use serde::Serialize;
use threatline_core::{EnemyKey, ThreatRun};
use threatline_types::formatting::{format_compact_f64, format_share};
use threatline_types::{ActorId, Edition, FightInput};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FightSummary {
    pub file: String,
    pub edition: Edition,
    pub events: usize,
    pub threat_events: usize,
    pub changes: usize,
    pub enemies: Vec<EnemySummary>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnemySummary {
    pub id: ActorId,
    pub instance: u32,
    pub name: String,
    pub total: f64,
    pub rows: Vec<ThreatRow>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatRow {
    pub actor_id: ActorId,
    pub name: String,
    pub threat: f64,
}

pub fn summarize(file: &str, input: &FightInput, run: &ThreatRun, top: usize) -> FightSummary {
    let enemies = run
        .enemies()
        .into_iter()
        .map(|enemy| summarize_enemy(input, run, enemy, top))
        .collect();

    FightSummary {
        file: file.to_string(),
        edition: run.edition,
        events: run.events.len(),
        threat_events: run.events.iter().filter(|e| e.threat.is_some()).count(),
        changes: run.events.iter().map(|e| e.changes.len()).sum(),
        enemies,
    }
}

fn summarize_enemy(input: &FightInput, run: &ThreatRun, enemy: EnemyKey, top: usize) -> EnemySummary {
    let totals = run.totals_for(enemy);
    let total = totals.iter().map(|(_, threat)| threat).sum();
    let rows = totals
        .into_iter()
        .take(top)
        .map(|(actor_id, threat)| ThreatRow {
            actor_id,
            name: actor_name(input, actor_id),
            threat,
        })
        .collect();

    EnemySummary {
        id: enemy.id,
        instance: enemy.instance,
        name: enemy_name(input, enemy),
        total,
        rows,
    }
}

fn actor_name(input: &FightInput, id: ActorId) -> String {
    input
        .actors
        .iter()
        .find(|actor| actor.id == id)
        .map(|actor| actor.name.clone())
        .unwrap_or_else(|| format!("#{id}"))
}

/// Multi-instance packs get a 1-based instance suffix.
fn enemy_name(input: &FightInput, enemy: EnemyKey) -> String {
    match input.enemies.iter().find(|unit| unit.id == enemy.id) {
        Some(unit) if unit.instance_count > 1 => format!("{} #{}", unit.name, enemy.instance + 1),
        Some(unit) => unit.name.clone(),
        None => format!("#{}", enemy.id),
    }
}

// ─── Rendering ──────────────────────────────────────────────────────────────

pub fn render_text(summary: &FightSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} [{}] {} events, {} with threat, {} ledger changes",
        summary.file,
        summary.edition.label(),
        summary.events,
        summary.threat_events,
        summary.changes
    );
    if summary.enemies.is_empty() {
        let _ = writeln!(out, "  (no threat recorded)");
    }
    for enemy in &summary.enemies {
        let _ = writeln!(out, "  {} ({})", enemy.name, format_compact_f64(enemy.total, false));
        for (rank, row) in enemy.rows.iter().enumerate() {
            let _ = writeln!(
                out,
                "    {:>2}. {:<20} {:>10} {:>7}",
                rank + 1,
                row.name,
                format_compact_f64(row.threat, false),
                format_share(row.threat, enemy.total, false)
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use threatline_core::ThreatLedger;
    use threatline_types::{Actor, ActorKind, EnemyUnit, PlayerClass, ReportMetadata};

    fn input() -> FightInput {
        FightInput {
            encounter_id: None,
            metadata: ReportMetadata {
                game_version: 2,
                season_id: None,
                partition_tags: Vec::new(),
                start_time: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
            },
            actors: vec![
                Actor {
                    id: 1,
                    name: "Tankard".to_string(),
                    kind: ActorKind::Player,
                    class: Some(PlayerClass::Warrior),
                    spec: None,
                    owner_id: None,
                },
                Actor {
                    id: 2,
                    name: "Mendwell".to_string(),
                    kind: ActorKind::Player,
                    class: Some(PlayerClass::Priest),
                    spec: None,
                    owner_id: None,
                },
            ],
            enemies: vec![
                EnemyUnit {
                    id: 100,
                    game_id: 12118,
                    name: "Lucifron".to_string(),
                    instance_count: 1,
                    is_boss: true,
                },
                EnemyUnit {
                    id: 101,
                    game_id: 12119,
                    name: "Flamewaker Protector".to_string(),
                    instance_count: 2,
                    is_boss: false,
                },
            ],
            abilities: Vec::new(),
            combatants: Vec::new(),
            events: Vec::new(),
        }
    }

    fn run() -> ThreatRun {
        let mut ledger = ThreatLedger::new();
        ledger.set(1, EnemyKey::new(100, 0), 3000.0);
        ledger.set(2, EnemyKey::new(100, 0), 1000.0);
        ledger.set(2, EnemyKey::new(101, 1), 400.0);
        ThreatRun {
            edition: Edition::Era,
            events: Vec::new(),
            ledger,
        }
    }

    #[test]
    fn test_summary_rows_sorted_and_truncated() {
        let summary = summarize("fight.json", &input(), &run(), 1);
        let boss = summary
            .enemies
            .iter()
            .find(|e| e.id == 100)
            .unwrap();
        assert_eq!(boss.name, "Lucifron");
        assert_eq!(boss.total, 4000.0);
        assert_eq!(boss.rows.len(), 1);
        assert_eq!(boss.rows[0].name, "Tankard");
    }

    #[test]
    fn test_multi_instance_enemy_named_by_instance() {
        let summary = summarize("fight.json", &input(), &run(), 5);
        let add = summary.enemies.iter().find(|e| e.id == 101).unwrap();
        assert_eq!(add.name, "Flamewaker Protector #2");
        assert_eq!(add.rows[0].name, "Mendwell");
    }

    #[test]
    fn test_render_text_shows_share() {
        let summary = summarize("fight.json", &input(), &run(), 5);
        let text = render_text(&summary);
        assert!(text.contains("[Classic Era]"));
        assert!(text.contains("Tankard"));
        assert!(text.contains("75.0%"));
        assert!(text.contains("3.00K"));
    }

    #[test]
    fn test_empty_run_renders_placeholder() {
        let empty = ThreatRun {
            edition: Edition::Era,
            events: Vec::new(),
            ledger: ThreatLedger::new(),
        };
        let text = render_text(&summarize("empty.json", &input(), &empty, 5));
        assert!(text.contains("no threat recorded"));
    }

    #[test]
    fn test_json_uses_camel_case() {
        let summary = summarize("fight.json", &input(), &run(), 5);
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"threatEvents\""));
        assert!(json.contains("\"actorId\""));
    }
}
