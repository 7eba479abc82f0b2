//! Dense integer indices for actor and movie names.
//!
//! Actors and movies share one namespace and one index range. Each index also
//! remembers the position(s) its name was seen in, so callers can tell actors
//! from movies without relying on path parity.

use std::collections::HashMap;

/// Position(s) a name has been seen in while ingesting records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Movie,
    Actor,
    /// The same string was used as a movie title and as an actor name.
    Both,
}

impl Role {
    fn merge(self, other: Role) -> Role {
        if self == other {
            self
        } else {
            Role::Both
        }
    }

    pub fn is_actor(self) -> bool {
        matches!(self, Role::Actor | Role::Both)
    }

    pub fn is_movie(self) -> bool {
        matches!(self, Role::Movie | Role::Both)
    }
}

#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    index: HashMap<String, usize>,
    names: Vec<String>,
    roles: Vec<Role>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index for `name`, assigning the next free one on first sight.
    pub fn intern(&mut self, name: &str, role: Role) -> usize {
        if let Some(&id) = self.index.get(name) {
            self.roles[id] = self.roles[id].merge(role);
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.roles.push(role);
        self.index.insert(name.to_string(), id);
        id
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Inverse of [`SymbolTable::index_of`]. Panics if `id` is out of range.
    pub fn name_of(&self, id: usize) -> &str {
        &self.names[id]
    }

    pub fn role_of(&self, id: usize) -> Role {
        self.roles[id]
    }

    /// Index of `name` if it was ever credited as an actor.
    pub fn actor_index(&self, name: &str) -> Option<usize> {
        self.index_of(name).filter(|&id| self.roles[id].is_actor())
    }

    /// Actor names in ascending order.
    pub fn sorted_actors(&self) -> Vec<&str> {
        let mut actors: Vec<&str> = self
            .names
            .iter()
            .zip(&self.roles)
            .filter(|(_, role)| role.is_actor())
            .map(|(name, _)| name.as_str())
            .collect();
        actors.sort_unstable();
        actors
    }

    pub fn count(&self, pred: impl Fn(Role) -> bool) -> usize {
        self.roles.iter().filter(|&&role| pred(role)).count()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
