use hashbrown::HashSet;
use threatline_types::SpellId;

/// Auras currently active on one actor, real and synthetic alike.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuraSet {
    active: HashSet<SpellId>,
}

impl AuraSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, aura: SpellId) -> bool {
        self.active.contains(&aura)
    }

    pub fn contains_any(&self, auras: &[SpellId]) -> bool {
        auras.iter().any(|a| self.active.contains(a))
    }

    /// Returns true if the aura was not already active.
    pub fn insert(&mut self, aura: SpellId) -> bool {
        self.active.insert(aura)
    }

    /// Returns true if the aura was active.
    pub fn remove(&mut self, aura: SpellId) -> bool {
        self.active.remove(&aura)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = SpellId> + '_ {
        self.active.iter().copied()
    }

    /// Active ids in ascending order, independent of insertion history.
    pub fn sorted(&self) -> Vec<SpellId> {
        let mut ids: Vec<SpellId> = self.active.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl FromIterator<SpellId> for AuraSet {
    fn from_iter<I: IntoIterator<Item = SpellId>>(iter: I) -> Self {
        Self {
            active: iter.into_iter().collect(),
        }
    }
}
