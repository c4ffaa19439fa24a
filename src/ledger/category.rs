use serde::{Deserialize, Serialize};

/// Categories the stock installation recognizes out of the box.
pub const DEFAULT_CATEGORIES: [&str; 5] = [
    "Food",
    "Transportation",
    "Utilities",
    "Entertainment",
    "Other",
];

/// The set of recognized categories. A soft enum: the set drives selection
/// lists and the fixed axis of the expense breakdown, but the ledger accepts
/// any category string so data recorded under a future category is never
/// rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategorySet {
    names: Vec<String>,
}

impl CategorySet {
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Recognized names in their fixed display order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|known| known == name)
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_keeps_display_order() {
        let set = CategorySet::default();
        assert_eq!(set.names().len(), 5);
        assert_eq!(set.names()[0], "Food");
        assert!(set.contains("Other"));
        assert!(!set.contains("Rent"));
    }
}
