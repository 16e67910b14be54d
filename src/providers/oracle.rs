use crate::shapes::team::TeamEntry;

/// Answers whether a candidate team name is still free.
pub trait UniquenessOracle {
    fn is_name_unique(&self, candidate: &str) -> bool;
}

/// Oracle backed by a list of already loaded teams.
pub struct InMemoryUniquenessOracle {
    names: Vec<String>,
}

impl InMemoryUniquenessOracle {
    pub fn new(teams: &[TeamEntry]) -> Self {
        InMemoryUniquenessOracle {
            names: teams.iter().map(|t| t.name.clone()).collect(),
        }
    }
}

impl UniquenessOracle for InMemoryUniquenessOracle {
    fn is_name_unique(&self, candidate: &str) -> bool {
        self.names.iter().all(|name| name != candidate)
    }
}
