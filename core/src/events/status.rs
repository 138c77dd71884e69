use std::collections::BTreeSet;

use hashbrown::{HashMap, HashSet};
use threatline_types::ActorId;

use super::{FightSignal, SignalHandler};
use crate::ledger::EnemyKey;

/// Alive/dead state, last known positions, and the live hostile set.
#[derive(Debug, Default)]
pub struct ActorStatus {
    dead: HashSet<ActorId>,
    dead_enemies: HashSet<EnemyKey>,
    /// Hostile instances seen in the fight and not yet dead. Ordered so that
    /// split threat is distributed deterministically.
    live_enemies: BTreeSet<EnemyKey>,
    positions: HashMap<ActorId, (f64, f64)>,
}

impl ActorStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_alive(&self, actor: ActorId) -> bool {
        !self.dead.contains(&actor)
    }

    pub fn is_enemy_alive(&self, enemy: EnemyKey) -> bool {
        !self.dead_enemies.contains(&enemy)
    }

    pub fn live_enemies(&self) -> Vec<EnemyKey> {
        self.live_enemies.iter().copied().collect()
    }

    pub fn live_enemy_count(&self) -> usize {
        self.live_enemies.len()
    }

    pub fn position(&self, actor: ActorId) -> Option<(f64, f64)> {
        self.positions.get(&actor).copied()
    }

    /// Euclidean distance between two actors' last known positions.
    pub fn distance(&self, a: ActorId, b: ActorId) -> Option<f64> {
        let (ax, ay) = self.position(a)?;
        let (bx, by) = self.position(b)?;
        Some((ax - bx).hypot(ay - by))
    }

    /// The living candidate with a known position closest to `to`.
    pub fn nearest<'a>(
        &self,
        to: ActorId,
        candidates: impl IntoIterator<Item = &'a ActorId>,
    ) -> Option<ActorId> {
        candidates
            .into_iter()
            .copied()
            .filter(|id| *id != to && self.is_alive(*id))
            .filter_map(|id| self.distance(to, id).map(|d| (id, d)))
            .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
            .map(|(id, _)| id)
    }
}

impl SignalHandler for ActorStatus {
    fn handle_signal(&mut self, signal: &FightSignal) {
        match signal {
            FightSignal::HostileSeen { enemy, instance } => {
                let key = EnemyKey::new(*enemy, *instance);
                if !self.dead_enemies.contains(&key) {
                    self.live_enemies.insert(key);
                }
            }
            FightSignal::ActorDied {
                actor,
                instance,
                hostile,
                ..
            } => {
                if *hostile {
                    let key = EnemyKey::new(*actor, *instance);
                    self.live_enemies.remove(&key);
                    self.dead_enemies.insert(key);
                } else {
                    self.dead.insert(*actor);
                }
            }
            FightSignal::ActorResurrected { actor, .. } => {
                self.dead.remove(actor);
            }
            FightSignal::Positioned { actor, x, y, .. } => {
                self.positions.insert(*actor, (*x, *y));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enemy_death_removes_from_live_set() {
        let mut status = ActorStatus::new();
        status.handle_signals(&[
            FightSignal::HostileSeen { enemy: 100, instance: 0 },
            FightSignal::HostileSeen { enemy: 101, instance: 1 },
            FightSignal::ActorDied {
                actor: 101,
                instance: 1,
                hostile: true,
                timestamp: 10,
            },
            FightSignal::HostileSeen { enemy: 101, instance: 1 },
        ]);
        assert_eq!(status.live_enemies(), vec![EnemyKey::new(100, 0)]);
        assert!(!status.is_enemy_alive(EnemyKey::new(101, 1)));
    }

    #[test]
    fn test_friendly_death_and_resurrect() {
        let mut status = ActorStatus::new();
        status.handle_signal(&FightSignal::ActorDied {
            actor: 1,
            instance: 0,
            hostile: false,
            timestamp: 5,
        });
        assert!(!status.is_alive(1));
        status.handle_signal(&FightSignal::ActorResurrected { actor: 1, timestamp: 9 });
        assert!(status.is_alive(1));
    }

    #[test]
    fn test_nearest_skips_dead_and_unpositioned() {
        let mut status = ActorStatus::new();
        for (actor, x, y) in [(100, 0.0, 0.0), (1, 3.0, 4.0), (2, 1.0, 1.0), (3, 0.5, 0.0)] {
            status.handle_signal(&FightSignal::Positioned {
                actor,
                instance: 0,
                x,
                y,
            });
        }
        status.handle_signal(&FightSignal::ActorDied {
            actor: 3,
            instance: 0,
            hostile: false,
            timestamp: 1,
        });
        assert_eq!(status.distance(100, 1), Some(5.0));
        assert_eq!(status.nearest(100, &[1, 2, 3, 4]), Some(2));
    }
}
