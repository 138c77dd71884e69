//! Formula registry building blocks.
//!
//! A formula maps the per-event [`ThreatContext`] to a [`ThreatFormulaResult`],
//! or `None` when the spell contributes nothing for that event kind (a cast
//! and its resulting damage must not both count). Rule tables are assembled
//! from the combinators in [`combinators`]; events with no table entry fall
//! back to [`BaseFormulas`].

mod base;
pub mod combinators;

pub use base::BaseFormulas;
pub use combinators::*;

use std::fmt;
use std::sync::Arc;

use threatline_types::{ActorId, SpellModifier, ThreatScope};

use crate::context::ThreatContext;
use crate::interceptors::Interceptor;
use crate::ledger::EnemyKey;

pub type ThreatFormula =
    Arc<dyn Fn(&ThreatContext<'_>) -> Option<ThreatFormulaResult> + Send + Sync>;

/// Wrap a closure as a shareable formula.
pub fn formula<F>(f: F) -> ThreatFormula
where
    F: Fn(&ThreatContext<'_>) -> Option<ThreatFormulaResult> + Send + Sync + 'static,
{
    Arc::new(f)
}

// ═══════════════════════════════════════════════════════════════════════════
// Effects
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChangeOp {
    Set(f64),
    Add(f64),
}

/// An explicit ledger write requested by a formula or preprocessor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomChange {
    pub source: ActorId,
    pub enemy: EnemyKey,
    pub op: ChangeOp,
}

pub enum ThreatEffect {
    /// Scale existing threat. `Target` and `All` are resolved against the
    /// event's acting side; see [`crate::ledger::modify_threat`].
    ModifyThreat { multiplier: f64, scope: ThreatScope },
    CustomThreat(Vec<CustomChange>),
    InstallInterceptor(Box<dyn Interceptor>),
}

impl fmt::Debug for ThreatEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModifyThreat { multiplier, scope } => f
                .debug_struct("ModifyThreat")
                .field("multiplier", multiplier)
                .field("scope", scope)
                .finish(),
            Self::CustomThreat(changes) => f.debug_tuple("CustomThreat").field(changes).finish(),
            Self::InstallInterceptor(interceptor) => f
                .debug_tuple("InstallInterceptor")
                .field(&interceptor.name())
                .finish(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Result
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Default)]
pub struct ThreatFormulaResult {
    /// Base threat, with any spell-level modifier already applied.
    pub value: f64,
    /// Divide evenly across live hostile units instead of the event target.
    pub split: bool,
    pub spell_modifier: Option<SpellModifier>,
    pub effects: Vec<ThreatEffect>,
    /// Fixed threat that aura, talent and class multipliers must not scale.
    pub skip_player_multipliers: bool,
    pub note: String,
}

impl ThreatFormulaResult {
    pub fn new(value: f64, note: impl Into<String>) -> Self {
        Self {
            value,
            note: note.into(),
            ..Default::default()
        }
    }

    /// Zero base value carrying a single effect.
    pub fn effect(effect: ThreatEffect, note: impl Into<String>) -> Self {
        Self {
            effects: vec![effect],
            skip_player_multipliers: true,
            note: note.into(),
            ..Default::default()
        }
    }

    pub fn split(mut self) -> Self {
        self.split = true;
        self
    }

    pub fn with_modifier(mut self, modifier: SpellModifier) -> Self {
        self.spell_modifier = Some(modifier);
        self
    }

    pub fn with_effect(mut self, effect: ThreatEffect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn skip_multipliers(mut self) -> Self {
        self.skip_player_multipliers = true;
        self
    }
}
