//! Event processor
//!
//! Replays one fight's events strictly in order. For every event:
//!
//! 1. derive fight signals and update aura / alive / position state
//! 2. offer the event to installed interceptors (may redirect its threat)
//! 3. run the encounter preprocessor, which may bypass the formula table
//! 4. otherwise look up the ability formula, falling back to the base formula
//! 5. compose player multipliers, attribute the value and apply effects
//!
//! Later lookups depend on the state earlier events left behind, so there is
//! no reordering and no parallelism inside a run.

use threatline_types::{
    ActorId, AnnotatedEvent, CombatEvent, EffectRecord, EncounterId, EventKind, FightInput,
    MarkerKind, StateMarker, ThreatBlock,
};

use super::{ActorStatus, FightSignal, SignalHandler, signals_for};
use crate::config::ThreatConfig;
use crate::context::{LedgerView, Roster, ThreatContext, resolve_amount};
use crate::effects::AuraTracker;
use crate::encounter::EncounterPreprocessor;
use crate::formulas::{ThreatEffect, ThreatFormulaResult};
use crate::interceptors::{InterceptorContext, InterceptorSet};
use crate::ledger::{EnemyKey, ThreatLedger, apply_custom, distribute, modify_threat};
use crate::modifiers::{Composition, compose};
use crate::runner::ThreatRun;

pub struct EventProcessor<'c> {
    config: &'c ThreatConfig,
    roster: Roster,
    encounter_id: Option<EncounterId>,
    auras: AuraTracker,
    status: ActorStatus,
    ledger: ThreatLedger,
    interceptors: InterceptorSet,
    preprocessor: Option<Box<dyn EncounterPreprocessor>>,
}

impl<'c> EventProcessor<'c> {
    /// Fresh per-fight state with synthetic and pre-pull auras seeded.
    pub fn new(config: &'c ThreatConfig, input: &FightInput) -> Self {
        let roster = Roster::from_fight(input);
        let mut auras = AuraTracker::new(&config.exclusive_groups, &config.implications);
        for info in &input.combatants {
            let seeded = config.initial_auras(&roster, info.actor_id);
            if !seeded.is_empty() {
                tracing::debug!(actor = info.actor_id, auras = ?seeded, "seeded auras");
            }
            auras.seed(info.actor_id, seeded);
        }

        let preprocessor = config
            .preprocessor_for(input.encounter_id)
            .map(|factory| factory(&input.enemies));

        Self {
            config,
            roster,
            encounter_id: input.encounter_id,
            auras,
            status: ActorStatus::new(),
            ledger: ThreatLedger::new(),
            interceptors: InterceptorSet::new(),
            preprocessor,
        }
    }

    /// Replay a whole fight.
    pub fn process(config: &'c ThreatConfig, input: &FightInput) -> ThreatRun {
        tracing::info!(
            edition = ?config.edition,
            encounter = ?input.encounter_id,
            events = input.events.len(),
            "threat run started"
        );
        let mut processor = Self::new(config, input);
        let events = input
            .events
            .iter()
            .map(|event| processor.process_event(event))
            .collect();
        let run = processor.finish(events);
        tracing::info!(
            cells = run.ledger.len(),
            enemies = run.ledger.enemies().len(),
            "threat run finished"
        );
        run
    }

    pub fn process_event(&mut self, event: &CombatEvent) -> AnnotatedEvent {
        let mut annotated = AnnotatedEvent::bare(event.clone());

        let signals = signals_for(event, &self.roster);
        self.auras.handle_signals(&signals);
        self.status.handle_signals(&signals);
        self.handle_deaths(&signals, &mut annotated);
        self.mark_state(event, &mut annotated);

        let redirect = {
            let mut ctx = InterceptorContext {
                auras: &mut self.auras,
                roster: &self.roster,
            };
            self.interceptors.offer(event, &mut ctx)
        };

        if let Some(result) = self.evaluate(event) {
            self.apply(event, result, redirect, &mut annotated);
        }
        annotated
    }

    /// Uninstall whatever is still active and hand back the run's output.
    pub fn finish(mut self, events: Vec<AnnotatedEvent>) -> ThreatRun {
        let mut ctx = InterceptorContext {
            auras: &mut self.auras,
            roster: &self.roster,
        };
        self.interceptors.uninstall_all(&mut ctx);
        ThreatRun {
            edition: self.config.edition,
            events,
            ledger: self.ledger,
        }
    }

    pub fn ledger(&self) -> &ThreatLedger {
        &self.ledger
    }

    pub fn auras(&self) -> &AuraTracker {
        &self.auras
    }

    pub fn status(&self) -> &ActorStatus {
        &self.status
    }

    // ─── Signals ────────────────────────────────────────────────────────────

    /// A dead friendly drops off every threat table.
    fn handle_deaths(&mut self, signals: &[FightSignal], annotated: &mut AnnotatedEvent) {
        for signal in signals {
            let FightSignal::ActorDied { actor, hostile, .. } = signal else {
                continue;
            };
            annotated.markers.push(StateMarker {
                kind: MarkerKind::Death,
                actor_id: *actor,
                enemy_id: None,
                spell_id: None,
            });
            if !*hostile && self.roster.is_friendly(*actor) {
                let changes = self.ledger.wipe_actor(*actor);
                tracing::debug!(actor, cells = changes.len(), "threat wiped on death");
                annotated.changes.extend(changes);
            }
        }
    }

    fn mark_state(&self, event: &CombatEvent, annotated: &mut AnnotatedEvent) {
        let Some(spell) = event.ability_id else {
            return;
        };
        let starting = event.kind.is_aura_apply();
        if !starting && !event.kind.is_aura_remove() {
            return;
        }
        let marker = if self.config.fixate.contains(&spell) {
            let kind = if starting {
                MarkerKind::FixateStart
            } else {
                MarkerKind::FixateEnd
            };
            // The fixating actor is the caster; the debuff sits on the enemy.
            StateMarker {
                kind,
                actor_id: event.source_id,
                enemy_id: Some(event.target_id),
                spell_id: Some(spell),
            }
        } else if self.config.aggro_loss.contains(&spell) {
            // Crowd control on a hostile unit pulls that unit off its table;
            // a boss fear pulls the feared friendly off the boss's table.
            let (actor_id, enemy_id) = if self.roster.is_hostile(event.target_id) {
                (event.source_id, Some(event.target_id))
            } else {
                (
                    event.target_id,
                    self.roster
                        .is_hostile(event.source_id)
                        .then_some(event.source_id),
                )
            };
            StateMarker {
                kind: if starting {
                    MarkerKind::AggroLossStart
                } else {
                    MarkerKind::AggroLossEnd
                },
                actor_id,
                enemy_id,
                spell_id: Some(spell),
            }
        } else if self.config.invulnerability.contains(&spell) {
            StateMarker {
                kind: if starting {
                    MarkerKind::InvulnerableStart
                } else {
                    MarkerKind::InvulnerableEnd
                },
                actor_id: event.target_id,
                enemy_id: None,
                spell_id: Some(spell),
            }
        } else {
            return;
        };
        annotated.markers.push(marker);
    }

    // ─── Dispatch ───────────────────────────────────────────────────────────

    fn evaluate(&mut self, event: &CombatEvent) -> Option<ThreatFormulaResult> {
        let ctx = ThreatContext {
            event,
            amount: resolve_amount(event),
            school: self.roster.school_of(event.ability_id),
            source_auras: self.auras.auras(event.source_id),
            target_auras: self.auras.auras(event.target_id),
            source_actor: self.roster.actor(event.source_id),
            target_actor: self.roster.actor(event.target_id),
            encounter_id: self.encounter_id,
            roster: &self.roster,
            ledger: LedgerView::new(&self.ledger, &self.status),
        };

        if let Some(preprocessor) = self.preprocessor.as_mut()
            && let Some(result) = preprocessor.preprocess(&ctx)
        {
            return Some(result);
        }
        let formula = self.config.formula_for(event)?;
        formula(&ctx)
    }

    fn apply(
        &mut self,
        event: &CombatEvent,
        result: ThreatFormulaResult,
        redirect: Option<ActorId>,
        annotated: &mut AnnotatedEvent,
    ) {
        let actor = threat_actor(event);
        let school = self.roster.school_of(event.ability_id);

        let credited = match redirect {
            Some(to) if self.roster.is_friendly(to) => Some(to),
            Some(to) => {
                tracing::warn!(from = actor, to, "redirect target is not a friendly actor");
                None
            }
            None => None,
        };

        // Hostile actors hold no threat; only their effects are reported.
        let attributable = credited.is_some() || self.roster.is_friendly(actor);
        if !attributable && result.effects.is_empty() {
            return;
        }

        let composition = if result.skip_player_multipliers || !attributable {
            Composition::identity()
        } else {
            compose(
                &self.config.aura_modifiers,
                self.auras.auras(actor),
                self.config.class_modifier(self.roster.class_of(actor)),
                school,
                event.ability_id,
            )
        };
        let calculated = if attributable {
            result.value * composition.multiplier
        } else {
            0.0
        };

        if calculated != 0.0 {
            let target = self
                .roster
                .is_hostile(event.target_id)
                .then(|| EnemyKey::new(event.target_id, event.target_instance));
            let live = self.status.live_enemies();
            annotated.changes.extend(distribute(
                &mut self.ledger,
                credited.unwrap_or(actor),
                target,
                calculated,
                result.split,
                &live,
            ));
        }

        let mut records = Vec::with_capacity(result.effects.len());
        for effect in result.effects {
            match effect {
                ThreatEffect::ModifyThreat { multiplier, scope } => {
                    let changes = modify_threat(
                        &mut self.ledger,
                        &self.roster,
                        event,
                        actor,
                        multiplier,
                        scope,
                    );
                    tracing::debug!(actor, multiplier, ?scope, cells = changes.len(), "threat modified");
                    annotated.changes.extend(changes);
                    records.push(EffectRecord::ModifyThreat { multiplier, scope });
                }
                ThreatEffect::CustomThreat(changes) => {
                    let applied = apply_custom(&mut self.ledger, &changes);
                    annotated.changes.extend(applied.iter().cloned());
                    records.push(EffectRecord::CustomThreat { changes: applied });
                }
                ThreatEffect::InstallInterceptor(interceptor) => {
                    records.push(EffectRecord::InstallInterceptor {
                        name: interceptor.name().to_string(),
                    });
                    let mut ctx = InterceptorContext {
                        auras: &mut self.auras,
                        roster: &self.roster,
                    };
                    self.interceptors.install(interceptor, &mut ctx);
                }
            }
        }

        annotated.threat = Some(ThreatBlock {
            amount: resolve_amount(event),
            note: result.note,
            calculated,
            split: result.split,
            spell_modifier: result.spell_modifier,
            modifiers: composition.applied,
            effects: records,
            redirected_to: credited,
        });
    }
}

/// Resource gains belong to the receiver; everything else to the source.
fn threat_actor(event: &CombatEvent) -> ActorId {
    match event.kind {
        EventKind::Energize => event.target_id,
        _ => event.source_id,
    }
}
