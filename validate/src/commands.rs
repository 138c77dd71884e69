use std::path::{Path, PathBuf};

use chrono::{TimeZone, Utc};
use threatline_core::config::{
    ANNIVERSARY_CUTOVER_MS, CLASSIC_ERA_GAME_VERSION, FRESH_REALM_TAG, SOD_SEASON_ID,
};
use threatline_core::{ConfigRegistry, EventProcessor, Outcome, process_fights};
use threatline_types::{Edition, FightInput, ReportMetadata};

use crate::error::{Result, ValidateError};
use crate::report::{FightSummary, render_text, summarize};
use crate::settings::Settings;

// ═══════════════════════════════════════════════════════════════════════════
// Replay
// ═══════════════════════════════════════════════════════════════════════════

pub fn load_fight(path: &Path) -> Result<FightInput> {
    let text = std::fs::read_to_string(path).map_err(|source| ValidateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ValidateError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Replay every file and print one table per fight. Fights with no
/// supported configuration are reported and counted as a failure once all
/// files have been printed.
pub fn replay(registry: &ConfigRegistry, files: &[PathBuf], settings: &Settings) -> Result<()> {
    let inputs = files
        .iter()
        .map(|path| load_fight(path))
        .collect::<Result<Vec<_>>>()?;
    tracing::info!(fights = inputs.len(), "replaying");

    let outcomes = match settings.edition {
        Some(edition) => {
            let config = registry
                .get(edition)
                .ok_or(ValidateError::UnknownEdition(edition))?;
            inputs
                .iter()
                .map(|input| Outcome::Processed(EventProcessor::process(config, input)))
                .collect()
        }
        None => process_fights(registry, &inputs),
    };

    let mut summaries: Vec<FightSummary> = Vec::with_capacity(outcomes.len());
    let mut unsupported = 0;
    for ((path, input), outcome) in files.iter().zip(&inputs).zip(&outcomes) {
        let file = path.display().to_string();
        match outcome.run() {
            Some(run) => summaries.push(summarize(&file, input, run, settings.top)),
            None => {
                tracing::warn!(file = %file, game_version = input.metadata.game_version, "unsupported fight");
                unsupported += 1;
            }
        }
    }

    if settings.json {
        let json = serde_json::to_string_pretty(&summaries).map_err(|source| ValidateError::Json {
            path: PathBuf::from("<stdout>"),
            source,
        })?;
        println!("{json}");
    } else {
        for summary in &summaries {
            print!("{}", render_text(summary));
        }
    }

    if unsupported > 0 {
        return Err(ValidateError::Unsupported { count: unsupported });
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// Config check
// ═══════════════════════════════════════════════════════════════════════════

fn sample_metadata(season_id: Option<u32>, tags: &[&str], start_ms: i64) -> ReportMetadata {
    ReportMetadata {
        game_version: CLASSIC_ERA_GAME_VERSION,
        season_id,
        partition_tags: tags.iter().map(|tag| tag.to_string()).collect(),
        start_time: Utc
            .timestamp_millis_opt(start_ms)
            .single()
            .unwrap_or_default(),
    }
}

/// Canonical metadata for each edition plus the fresh-realm-before-cutover
/// edge, with the edition each must resolve to.
pub fn resolver_cases() -> Vec<(&'static str, ReportMetadata, Edition)> {
    let after = ANNIVERSARY_CUTOVER_MS + 86_400_000;
    let before = ANNIVERSARY_CUTOVER_MS - 1;
    vec![
        ("era", sample_metadata(None, &[], after), Edition::Era),
        ("season of discovery", sample_metadata(Some(SOD_SEASON_ID), &[], after), Edition::SeasonOfDiscovery),
        ("anniversary", sample_metadata(None, &[FRESH_REALM_TAG], after), Edition::Anniversary),
        ("fresh realm before cutover", sample_metadata(None, &[FRESH_REALM_TAG], before), Edition::Era),
        ("season of discovery on fresh realm", sample_metadata(Some(SOD_SEASON_ID), &[FRESH_REALM_TAG], after), Edition::SeasonOfDiscovery),
    ]
}

/// Print every registered edition and prove the resolver never matches two.
pub fn check_configs(registry: &ConfigRegistry) -> Result<()> {
    println!("cache key {}", registry.cache_key());
    for config in registry.iter() {
        println!(
            "  {:<20} v{:<3} {:>4} abilities {:>4} aura modifiers {:>3} encounters",
            config.edition.label(),
            config.version,
            config.abilities.len(),
            config.aura_modifiers.len(),
            config.encounters.len()
        );
    }

    for (name, meta, expected) in resolver_cases() {
        let matched = registry.check_exclusive(&meta);
        if matched != [expected] {
            return Err(ValidateError::Ambiguous {
                case: name,
                editions: matched,
            });
        }
        tracing::debug!(case = name, edition = ?expected, "resolver case matched");
    }
    println!("resolver: {} cases, each matched exactly one edition", resolver_cases().len());
    Ok(())
}
