//! Formula combinators.
//!
//! Every per-edition rule table is built from these. Each combinator declares
//! the event kinds it responds to and returns `None` for everything else.

use threatline_types::formatting::{format_multiplier, format_threat};
use threatline_types::{EventKind, SpellModifier, ThreatScope};

use super::{ChangeOp, CustomChange, ThreatEffect, ThreatFormula, ThreatFormulaResult, formula};

const DAMAGE_AND_HEAL: &[EventKind] = &[EventKind::Damage, EventKind::Heal];
const CAST: &[EventKind] = &[EventKind::Cast];

fn linear_note(multiplier: f64, bonus: f64) -> String {
    let mut note = String::from("amt");
    if multiplier != 1.0 {
        note.push('*');
        note.push_str(&format_multiplier(multiplier));
    }
    if bonus > 0.0 {
        note.push('+');
        note.push_str(&format_threat(bonus));
    } else if bonus < 0.0 {
        note.push_str(&format_threat(bonus));
    }
    note
}

/// `amount * multiplier + bonus` on damage and heal events.
pub fn linear(multiplier: f64, bonus: f64) -> ThreatFormula {
    linear_on(DAMAGE_AND_HEAL, multiplier, bonus)
}

/// `amount * multiplier + bonus` on the given event kinds.
pub fn linear_on(kinds: &'static [EventKind], multiplier: f64, bonus: f64) -> ThreatFormula {
    formula(move |ctx| {
        if !kinds.contains(&ctx.kind()) {
            return None;
        }
        Some(
            ThreatFormulaResult::new(ctx.amount * multiplier + bonus, linear_note(multiplier, bonus))
                .with_modifier(SpellModifier::linear(multiplier, bonus)),
        )
    })
}

/// Fixed value on buff/debuff application or refresh.
pub fn flat_on_aura(value: f64, split: bool) -> ThreatFormula {
    formula(move |ctx| {
        if !ctx.kind().is_apply_or_refresh() {
            return None;
        }
        let result = ThreatFormulaResult::new(value, format!("flat {}", format_threat(value)))
            .with_modifier(SpellModifier::bonus(value));
        Some(if split { result.split() } else { result })
    })
}

/// Fixed value when the debuff lands, plain damage on its periodic ticks.
pub fn debuff_or_damage(value: f64) -> ThreatFormula {
    formula(move |ctx| {
        let kind = ctx.kind();
        if kind.is_debuff() && kind.is_apply_or_refresh() {
            return Some(
                ThreatFormulaResult::new(value, format!("flat {}", format_threat(value)))
                    .with_modifier(SpellModifier::bonus(value)),
            );
        }
        (kind == EventKind::Damage).then(|| ThreatFormulaResult::new(ctx.amount, "amt"))
    })
}

fn scale_result(multiplier: f64, scope: ThreatScope) -> ThreatFormulaResult {
    let note = if multiplier == 0.0 {
        match scope {
            ThreatScope::Target => "wipe target".to_string(),
            ThreatScope::All => "wipe all".to_string(),
        }
    } else {
        format!("threat*{}", format_multiplier(multiplier))
    };
    ThreatFormulaResult::effect(ThreatEffect::ModifyThreat { multiplier, scope }, note)
}

/// Scale existing threat when the ability is cast.
pub fn threat_scale(multiplier: f64, scope: ThreatScope) -> ThreatFormula {
    formula(move |ctx| (ctx.kind() == EventKind::Cast).then(|| scale_result(multiplier, scope)))
}

/// Scale existing threat when the ability's damage event connects.
pub fn threat_scale_on_hit(multiplier: f64, scope: ThreatScope) -> ThreatFormula {
    formula(move |ctx| {
        (ctx.kind() == EventKind::Damage && ctx.event.landed())
            .then(|| scale_result(multiplier, scope))
    })
}

/// Raise the caster to the target's top threat plus `bonus`.
pub fn taunt(bonus: f64) -> ThreatFormula {
    taunt_on(CAST, bonus)
}

/// Taunt fired by the given event kinds (debuff-driven taunts use aura events).
pub fn taunt_on(kinds: &'static [EventKind], bonus: f64) -> ThreatFormula {
    formula(move |ctx| {
        if !kinds.contains(&ctx.kind())
            || !ctx.event.landed()
            || !ctx.roster.is_hostile(ctx.event.target_id)
        {
            return None;
        }
        let actor = ctx.event.source_id;
        let enemy = ctx.target_key();
        let current = ctx.ledger.current_threat(actor, enemy);
        let wanted = ctx.ledger.top_threat(enemy) + bonus;

        let mut result = ThreatFormulaResult::new(0.0, "taunt").skip_multipliers();
        if wanted > current {
            result = result.with_effect(ThreatEffect::CustomThreat(vec![CustomChange {
                source: actor,
                enemy,
                op: ChangeOp::Set(wanted),
            }]));
        }
        Some(result)
    })
}

/// Flat threat on cast, refunded if the follow-up damage event did not connect.
pub fn cast_with_miss_rollback(value: f64) -> ThreatFormula {
    formula(move |ctx| match ctx.kind() {
        EventKind::Cast => Some(
            ThreatFormulaResult::new(value, format!("flat {}", format_threat(value)))
                .with_modifier(SpellModifier::bonus(value)),
        ),
        EventKind::Damage if !ctx.event.landed() => Some(
            ThreatFormulaResult::new(-value, "miss rollback")
                .with_modifier(SpellModifier::bonus(-value)),
        ),
        _ => None,
    })
}

/// Flat threat on cast only. Negative values reduce threat.
pub fn flat_cast(value: f64) -> ThreatFormula {
    formula(move |ctx| {
        (ctx.kind() == EventKind::Cast).then(|| {
            ThreatFormulaResult::new(value, format!("flat {}", format_threat(value)))
                .with_modifier(SpellModifier::bonus(value))
        })
    })
}

pub fn no_threat() -> ThreatFormula {
    formula(|_| None)
}
