use threatline_types::{ActorId, CombatEvent, EventKind, SpellId};

use super::{InterceptOutcome, Interceptor, InterceptorContext};

/// Grace period for multi-target spells that consume the last charge.
///
/// The remaining hits of the same volley (same spell, same owner, within
/// `window_ms`) are still redirected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverflowWindow {
    pub window_ms: i64,
    pub spells: &'static [SpellId],
}

/// Charge-limited threat redirect (Misdirection style).
///
/// Redirects the owner's damage against hostile units to `target` until the
/// charge budget is spent, the duration runs out, or the companion aura is
/// removed from the owner, whichever happens first.
pub struct ChargeRedirect {
    name: String,
    owner: ActorId,
    target: ActorId,
    charges: u32,
    expires_at: i64,
    companion_aura: Option<SpellId>,
    forced_aura: Option<SpellId>,
    forced_was_present: Option<bool>,
    overflow: Option<OverflowWindow>,
    /// Spell and deadline of an open overflow window.
    open_window: Option<(SpellId, i64)>,
    finished: bool,
}

impl ChargeRedirect {
    pub fn new(
        name: impl Into<String>,
        owner: ActorId,
        target: ActorId,
        charges: u32,
        started_at: i64,
        duration_ms: i64,
    ) -> Self {
        Self {
            name: name.into(),
            owner,
            target,
            charges,
            expires_at: started_at + duration_ms,
            companion_aura: None,
            forced_aura: None,
            forced_was_present: None,
            overflow: None,
            open_window: None,
            finished: charges == 0,
        }
    }

    /// End early when this aura is removed from the owner.
    pub fn companion_aura(mut self, aura: SpellId) -> Self {
        self.companion_aura = Some(aura);
        self
    }

    /// Keep this aura on the owner while installed.
    pub fn forced_aura(mut self, aura: SpellId) -> Self {
        self.forced_aura = Some(aura);
        self
    }

    pub fn overflow(mut self, window: OverflowWindow) -> Self {
        self.overflow = Some(window);
        self
    }

    pub fn charges(&self) -> u32 {
        self.charges
    }

    fn is_owner_damage(&self, event: &CombatEvent, ctx: &InterceptorContext<'_>) -> bool {
        event.kind == EventKind::Damage
            && event.source_id == self.owner
            && ctx.roster.is_hostile(event.target_id)
    }

    fn finish(&mut self, reason: &'static str) -> InterceptOutcome {
        tracing::debug!(name = %self.name, owner = self.owner, reason, "redirect ended");
        self.finished = true;
        InterceptOutcome::Pass
    }
}

impl Interceptor for ChargeRedirect {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_install(&mut self, ctx: &mut InterceptorContext<'_>) {
        if let Some(aura) = self.forced_aura {
            self.forced_was_present = Some(ctx.auras.force(self.owner, aura));
        }
    }

    fn intercept(
        &mut self,
        event: &CombatEvent,
        ctx: &mut InterceptorContext<'_>,
    ) -> InterceptOutcome {
        if self.finished {
            return InterceptOutcome::Pass;
        }

        if let Some((spell, deadline)) = self.open_window {
            if event.timestamp > deadline {
                return self.finish("overflow window closed");
            }
            if self.is_owner_damage(event, ctx) && event.ability_id == Some(spell) {
                return InterceptOutcome::Redirect(self.target);
            }
            return InterceptOutcome::Pass;
        }

        if event.timestamp > self.expires_at {
            return self.finish("expired");
        }

        if let Some(aura) = self.companion_aura
            && event.kind.is_aura_remove()
            && event.target_id == self.owner
            && event.ability_id == Some(aura)
        {
            return self.finish("companion aura removed");
        }

        if !self.is_owner_damage(event, ctx) {
            return InterceptOutcome::Pass;
        }

        self.charges = self.charges.saturating_sub(1);
        if self.charges == 0 {
            let overflow_spell = self.overflow.and_then(|window| {
                event
                    .ability_id
                    .filter(|spell| window.spells.contains(spell))
                    .map(|spell| (spell, event.timestamp + window.window_ms))
            });
            match overflow_spell {
                Some(open) => self.open_window = Some(open),
                None => self.finished = true,
            }
        }
        InterceptOutcome::Redirect(self.target)
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn on_uninstall(&mut self, ctx: &mut InterceptorContext<'_>) {
        if let (Some(aura), Some(was_present)) = (self.forced_aura, self.forced_was_present) {
            ctx.auras.release(self.owner, aura, was_present);
        }
    }
}
