use hashbrown::HashMap;
use threatline_types::{
    Ability, Actor, ActorId, CombatantInfo, EnemyUnit, FightInput, PlayerClass, SchoolMask, SpellId,
};

/// Immutable per-fight lookup tables built from the fight roster.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    actors: HashMap<ActorId, Actor>,
    enemies: HashMap<ActorId, EnemyUnit>,
    abilities: HashMap<SpellId, Ability>,
    combatants: HashMap<ActorId, CombatantInfo>,
}

impl Roster {
    pub fn from_fight(input: &FightInput) -> Self {
        Self {
            actors: input.actors.iter().map(|a| (a.id, a.clone())).collect(),
            enemies: input.enemies.iter().map(|e| (e.id, e.clone())).collect(),
            abilities: input.abilities.iter().map(|a| (a.id, a.clone())).collect(),
            combatants: input
                .combatants
                .iter()
                .map(|c| (c.actor_id, c.clone()))
                .collect(),
        }
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(&id)
    }

    pub fn enemy(&self, id: ActorId) -> Option<&EnemyUnit> {
        self.enemies.get(&id)
    }

    pub fn combatant(&self, id: ActorId) -> Option<&CombatantInfo> {
        self.combatants.get(&id)
    }

    pub fn class_of(&self, id: ActorId) -> Option<PlayerClass> {
        self.actors.get(&id).and_then(|a| a.class)
    }

    pub fn is_friendly(&self, id: ActorId) -> bool {
        self.actors.contains_key(&id)
    }

    pub fn is_hostile(&self, id: ActorId) -> bool {
        self.enemies.contains_key(&id)
    }

    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.actors.values()
    }

    pub fn enemies(&self) -> impl Iterator<Item = &EnemyUnit> {
        self.enemies.values()
    }

    /// School of an ability; unlisted abilities are treated as physical.
    pub fn school_of(&self, spell: Option<SpellId>) -> SchoolMask {
        spell
            .and_then(|id| self.abilities.get(&id))
            .map(|a| a.school)
            .filter(|school| *school != SchoolMask::NONE)
            .unwrap_or(SchoolMask::PHYSICAL)
    }

    pub fn ability_name(&self, spell: SpellId) -> Option<&str> {
        self.abilities.get(&spell).map(|a| a.name.as_str())
    }
}
