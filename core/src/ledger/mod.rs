//! Threat ledger
//!
//! Sparse table of accumulated threat keyed by (friendly actor, hostile unit
//! instance). Totals never go below zero. Every mutation returns the
//! [`ThreatChange`] it produced so callers can report deltas and totals.

mod apply;

pub use apply::{apply_custom, distribute, modify_threat};

use hashbrown::HashMap;
use serde::Serialize;
use threatline_types::{ActorId, ChangeOperator, ThreatChange};

/// A hostile unit instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EnemyKey {
    pub id: ActorId,
    pub instance: u32,
}

impl EnemyKey {
    pub const fn new(id: ActorId, instance: u32) -> Self {
        Self { id, instance }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ThreatLedger {
    cells: HashMap<(ActorId, EnemyKey), f64>,
}

impl ThreatLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, actor: ActorId, enemy: EnemyKey) -> f64 {
        self.cells.get(&(actor, enemy)).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, actor: ActorId, enemy: EnemyKey) -> bool {
        self.cells.contains_key(&(actor, enemy))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Add `delta` to a cell. The reported amount is the change actually
    /// applied after clamping at zero.
    pub fn add(&mut self, actor: ActorId, enemy: EnemyKey, delta: f64) -> ThreatChange {
        let cell = self.cells.entry((actor, enemy)).or_insert(0.0);
        let before = *cell;
        *cell = (before + delta).max(0.0);
        change(actor, enemy, ChangeOperator::Add, *cell - before, *cell)
    }

    pub fn set(&mut self, actor: ActorId, enemy: EnemyKey, value: f64) -> ThreatChange {
        let cell = self.cells.entry((actor, enemy)).or_insert(0.0);
        let before = *cell;
        *cell = value.max(0.0);
        change(actor, enemy, ChangeOperator::Set, *cell - before, *cell)
    }

    /// Scale an existing cell. Missing cells are left alone.
    pub fn multiply(&mut self, actor: ActorId, enemy: EnemyKey, factor: f64) -> Option<ThreatChange> {
        let cell = self.cells.get_mut(&(actor, enemy))?;
        let before = *cell;
        *cell = (before * factor).max(0.0);
        Some(change(actor, enemy, ChangeOperator::Set, *cell - before, *cell))
    }

    /// Every cell the actor holds, ordered by enemy.
    pub fn cells_for_actor(&self, actor: ActorId) -> Vec<(EnemyKey, f64)> {
        let mut cells: Vec<(EnemyKey, f64)> = self
            .cells
            .iter()
            .filter(|((a, _), _)| *a == actor)
            .map(|((_, enemy), threat)| (*enemy, *threat))
            .collect();
        cells.sort_unstable_by_key(|(enemy, _)| *enemy);
        cells
    }

    /// Every cell held against one enemy, ordered by actor id.
    pub fn cells_for_enemy(&self, enemy: EnemyKey) -> Vec<(ActorId, f64)> {
        let mut cells: Vec<(ActorId, f64)> = self
            .cells
            .iter()
            .filter(|((_, e), _)| *e == enemy)
            .map(|((actor, _), threat)| (*actor, *threat))
            .collect();
        cells.sort_unstable_by_key(|(actor, _)| *actor);
        cells
    }

    /// Highest `n` actors against an enemy, ties broken by actor id.
    pub fn top(&self, enemy: EnemyKey, n: usize) -> Vec<(ActorId, f64)> {
        let mut cells = self.cells_for_enemy(enemy);
        cells.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        cells.truncate(n);
        cells
    }

    pub fn top_threat(&self, enemy: EnemyKey) -> f64 {
        self.cells
            .iter()
            .filter(|((_, e), _)| *e == enemy)
            .map(|(_, threat)| *threat)
            .fold(0.0, f64::max)
    }

    /// Distinct enemies with at least one cell, ordered.
    pub fn enemies(&self) -> Vec<EnemyKey> {
        let mut keys: Vec<EnemyKey> = self.cells.keys().map(|(_, enemy)| *enemy).collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// Zero every cell the actor holds.
    pub fn wipe_actor(&mut self, actor: ActorId) -> Vec<ThreatChange> {
        self.cells_for_actor(actor)
            .into_iter()
            .map(|(enemy, _)| self.set(actor, enemy, 0.0))
            .collect()
    }
}

fn change(
    actor: ActorId,
    enemy: EnemyKey,
    operator: ChangeOperator,
    amount: f64,
    total: f64,
) -> ThreatChange {
    ThreatChange {
        source_id: actor,
        target_id: enemy.id,
        target_instance: enemy.instance,
        operator,
        amount,
        total,
    }
}
