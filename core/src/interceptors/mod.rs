//! Interceptor engine
//!
//! Interceptors are short-lived hooks installed by a formula's
//! `InstallInterceptor` effect. From the event after installation on, every
//! event is offered to every active interceptor in install order, before
//! normal dispatch. An interceptor may re-attribute the event's base threat
//! to another actor; the first redirect wins, but every interceptor still
//! observes the event so it can update its own budget.
//!
//! Each installation owns its state and decides when it is done. Once
//! finished it is uninstalled exactly once; later events never reach it.

mod redirect;

pub use redirect::{ChargeRedirect, OverflowWindow};

use threatline_types::{ActorId, CombatEvent};

use crate::context::Roster;
use crate::effects::AuraTracker;

/// Mutable run state an interceptor may touch.
pub struct InterceptorContext<'a> {
    pub auras: &'a mut AuraTracker,
    pub roster: &'a Roster,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterceptOutcome {
    Pass,
    /// Attribute this event's base threat to another actor.
    Redirect(ActorId),
}

pub trait Interceptor: Send {
    fn name(&self) -> &str;

    fn on_install(&mut self, _ctx: &mut InterceptorContext<'_>) {}

    fn intercept(
        &mut self,
        event: &CombatEvent,
        ctx: &mut InterceptorContext<'_>,
    ) -> InterceptOutcome;

    /// Polled after every offered event; true once the termination
    /// condition has been met.
    fn is_finished(&self) -> bool;

    /// Undo anything `on_install` did. Called exactly once.
    fn on_uninstall(&mut self, _ctx: &mut InterceptorContext<'_>) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotState {
    Active,
    Terminated,
}

struct Slot {
    interceptor: Box<dyn Interceptor>,
    state: SlotState,
}

impl Slot {
    fn terminate(&mut self, ctx: &mut InterceptorContext<'_>) {
        if self.state == SlotState::Terminated {
            return;
        }
        self.state = SlotState::Terminated;
        self.interceptor.on_uninstall(ctx);
        tracing::debug!(name = self.interceptor.name(), "interceptor uninstalled");
    }
}

/// Per-run list of installed interceptors.
#[derive(Default)]
pub struct InterceptorSet {
    slots: Vec<Slot>,
}

impl InterceptorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install(&mut self, interceptor: Box<dyn Interceptor>, ctx: &mut InterceptorContext<'_>) {
        let mut slot = Slot {
            interceptor,
            state: SlotState::Active,
        };
        slot.interceptor.on_install(ctx);
        tracing::debug!(name = slot.interceptor.name(), "interceptor installed");
        if slot.interceptor.is_finished() {
            slot.terminate(ctx);
            return;
        }
        self.slots.push(slot);
    }

    /// Offer an event to every active interceptor. Returns the first redirect.
    pub fn offer(
        &mut self,
        event: &CombatEvent,
        ctx: &mut InterceptorContext<'_>,
    ) -> Option<ActorId> {
        let mut redirect = None;
        for slot in &mut self.slots {
            if slot.state != SlotState::Active {
                continue;
            }
            let outcome = slot.interceptor.intercept(event, ctx);
            if let InterceptOutcome::Redirect(to) = outcome
                && redirect.is_none()
            {
                redirect = Some(to);
            }
            if slot.interceptor.is_finished() {
                slot.terminate(ctx);
            }
        }
        self.slots.retain(|slot| slot.state == SlotState::Active);
        redirect
    }

    /// Terminate everything still active (end of fight).
    pub fn uninstall_all(&mut self, ctx: &mut InterceptorContext<'_>) {
        for slot in &mut self.slots {
            slot.terminate(ctx);
        }
        self.slots.clear();
    }

    pub fn active_count(&self) -> usize {
        self.slots.len()
    }

    pub fn active_names(&self) -> Vec<&str> {
        self.slots.iter().map(|slot| slot.interceptor.name()).collect()
    }
}
