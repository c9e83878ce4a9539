use std::collections::HashMap;

/// Ordered set of the distinct variable names seen while tokenizing one
/// expression.
///
/// Names are kept in first-occurrence order. That order is the column order
/// of the truth table, and the evaluator resolves an identifier to its slot
/// in an assignment vector through [`IdentifierRegistry::position`].
///
/// A registry is owned by whoever drives a single parse; independent parses
/// use independent registries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierRegistry {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl IdentifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name` if it has not been seen yet and returns its position.
    pub fn register(&mut self, name: &str) -> usize {
        if let Some(&position) = self.positions.get(name) {
            return position;
        }

        let position = self.names.len();
        self.names.push(name.to_string());
        self.positions.insert(name.to_string(), position);
        position
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn clear(&mut self) {
        self.names.clear();
        self.positions.clear();
    }
}
