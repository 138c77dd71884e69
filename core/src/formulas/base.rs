use threatline_types::formatting::format_multiplier;
use threatline_types::{EventKind, ResourceKind, SpellModifier};

use super::{ThreatFormula, ThreatFormulaResult, formula};

pub const HEAL_FACTOR: f64 = 0.5;
pub const ABSORB_FACTOR: f64 = 0.5;

/// Threat per point of resource gained. Focus and happiness generate none.
pub fn resource_factor(resource: ResourceKind) -> f64 {
    match resource {
        ResourceKind::Mana => 0.5,
        ResourceKind::Rage => 5.0,
        ResourceKind::Energy => 5.0,
        ResourceKind::Focus | ResourceKind::Happiness => 0.0,
    }
}

/// Fallback formulas for events with no ability-table entry.
#[derive(Clone)]
pub struct BaseFormulas {
    pub damage: ThreatFormula,
    pub heal: ThreatFormula,
    pub absorb: ThreatFormula,
    pub energize: ThreatFormula,
}

impl BaseFormulas {
    pub fn standard() -> Self {
        Self {
            damage: formula(|ctx| {
                (ctx.kind() == EventKind::Damage).then(|| ThreatFormulaResult::new(ctx.amount, "amt"))
            }),
            heal: formula(|ctx| {
                (ctx.kind() == EventKind::Heal).then(|| {
                    ThreatFormulaResult::new(
                        ctx.amount * HEAL_FACTOR,
                        format!("heal*{}", format_multiplier(HEAL_FACTOR)),
                    )
                    .with_modifier(SpellModifier::multiplier(HEAL_FACTOR))
                    .split()
                })
            }),
            absorb: formula(|ctx| {
                (ctx.kind() == EventKind::Absorbed).then(|| {
                    ThreatFormulaResult::new(
                        ctx.amount * ABSORB_FACTOR,
                        format!("absorb*{}", format_multiplier(ABSORB_FACTOR)),
                    )
                    .with_modifier(SpellModifier::multiplier(ABSORB_FACTOR))
                    .split()
                })
            }),
            energize: formula(|ctx| {
                if ctx.kind() != EventKind::Energize {
                    return None;
                }
                let resource = ctx.event.resource?;
                let factor = resource_factor(resource);
                if factor == 0.0 {
                    return None;
                }
                let gained = (ctx.amount - ctx.event.waste as f64).max(0.0);
                Some(
                    ThreatFormulaResult::new(
                        gained * factor,
                        format!("{resource:?}*{}", format_multiplier(factor)).to_lowercase(),
                    )
                    .with_modifier(SpellModifier::multiplier(factor))
                    .split()
                    .skip_multipliers(),
                )
            }),
        }
    }

    pub fn for_kind(&self, kind: EventKind) -> Option<&ThreatFormula> {
        match kind {
            EventKind::Damage => Some(&self.damage),
            EventKind::Heal => Some(&self.heal),
            EventKind::Absorbed => Some(&self.absorb),
            EventKind::Energize => Some(&self.energize),
            _ => None,
        }
    }
}
