//! Anniversary realms: the era tables plus the later-patch abilities and
//! raids available there.

use threatline_types::{Edition, EventKind, ModifierSource, ThreatScope};

use super::{ConfigBuilder, ThreatConfig};
use crate::encounter;
use crate::error::Result;
use crate::formulas::{
    ThreatEffect, ThreatFormula, ThreatFormulaResult, debuff_or_damage, formula, linear, taunt_on,
    threat_scale_on_hit,
};
use crate::interceptors::{ChargeRedirect, OverflowWindow};
use crate::modifiers::AuraModifier;
use crate::spells::{self, druid, hunter, paladin, warrior};

pub const VERSION: u32 = 3;

const LAYER: &str = "anniversary";

pub const MISDIRECTION_CHARGES: u32 = 3;
pub const MISDIRECTION_DURATION_MS: i64 = 30_000;
/// Remaining Multi-Shot hits landing this soon after the last charge are
/// still redirected.
pub const MISDIRECTION_OVERFLOW_MS: i64 = 50;

const LACERATE_THREAT: f64 = 267.0;

/// Misdirection: the hunter's next three attacks credit the friendly target.
fn misdirection() -> ThreatFormula {
    formula(|ctx| {
        let event = ctx.event;
        if event.kind != EventKind::Cast || !ctx.roster.is_friendly(event.target_id) {
            return None;
        }
        let redirect = ChargeRedirect::new(
            "Misdirection",
            event.source_id,
            event.target_id,
            MISDIRECTION_CHARGES,
            event.timestamp,
            MISDIRECTION_DURATION_MS,
        )
        .companion_aura(hunter::MISDIRECTION_BUFF)
        .forced_aura(hunter::MISDIRECTION_BUFF)
        .overflow(OverflowWindow {
            window_ms: MISDIRECTION_OVERFLOW_MS,
            spells: hunter::MULTI_SHOT,
        });
        Some(ThreatFormulaResult::effect(
            ThreatEffect::InstallInterceptor(Box::new(redirect)),
            "misdirection",
        ))
    })
}

pub fn config() -> Result<ThreatConfig> {
    let mut builder = ConfigBuilder::new(Edition::Anniversary, VERSION, super::is_anniversary);
    super::era::populate(&mut builder)?;

    let mut abilities = vec![
        (hunter::MISDIRECTION, misdirection()),
        (druid::LACERATE, debuff_or_damage(LACERATE_THREAT)),
        (
            paladin::RIGHTEOUS_DEFENSE_DEBUFF,
            taunt_on(&[EventKind::ApplyDebuff], 0.0),
        ),
        (warrior::SHIELD_SLAM_R5, linear(1.0, 305.0)),
        (warrior::HEROIC_STRIKE_R10, linear(1.0, 196.0)),
        (
            spells::VOID_REAVER_KNOCK_AWAY,
            threat_scale_on_hit(0.75, ThreatScope::Target),
        ),
    ];
    abilities.extend(
        warrior::DEVASTATE
            .iter()
            .map(|id| (*id, linear(1.0, 100.0))),
    );

    builder
        .extend_abilities(LAYER, abilities)?
        // Defiance is three ranks of 5% here; the top two era ranks are
        // never granted.
        .override_aura_modifiers(
            LAYER,
            warrior::DEFIANCE[..3]
                .iter()
                .zip([1.05, 1.10, 1.15])
                .map(|(id, value)| {
                    (
                        *id,
                        AuraModifier::new("Defiance", ModifierSource::Talent, value)
                            .requires(&[warrior::DEFENSIVE_STANCE]),
                    )
                })
                .collect(),
        )?
        .extend_encounters(
            LAYER,
            vec![
                (
                    spells::NIGHTBANE_ENCOUNTER,
                    encounter::nightbane as encounter::PreprocessorFactory,
                ),
                (spells::SOLARIAN_ENCOUNTER, encounter::solarian),
            ],
        )?;
    Ok(builder.build())
}
