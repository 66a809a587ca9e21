//! Component definitions for entities.

use std::collections::BTreeSet;

use super::Item;

/// Set of carried items.
///
/// Backed by an ordered set so listings come out in the same order every time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InventoryComponent {
    items: BTreeSet<Item>,
}

impl InventoryComponent {
    /// Insert an item. Returns `false` if it was already carried.
    pub fn insert(&mut self, item: Item) -> bool {
        self.items.insert(item)
    }

    /// Remove an item. Returns `false` if it was not carried.
    pub fn remove(&mut self, item: Item) -> bool {
        self.items.remove(&item)
    }

    pub fn contains(&self, item: Item) -> bool {
        self.items.contains(&item)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Item> + '_ {
        self.items.iter().copied()
    }

    /// Comma separated listing, or "Empty".
    pub fn describe(&self) -> String {
        if self.items.is_empty() {
            return "Empty".to_string();
        }
        self.iter().map(|i| i.id()).collect::<Vec<_>>().join(", ")
    }
}

impl FromIterator<Item> for InventoryComponent {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut inv = InventoryComponent::default();
        assert!(inv.insert(Item::Key));
        assert!(!inv.insert(Item::Key));
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn test_describe_is_stable() {
        let inv: InventoryComponent = [Item::Medallion, Item::Key, Item::Knife]
            .into_iter()
            .collect();
        assert_eq!(inv.describe(), "key, knife, medallion");
        assert_eq!(InventoryComponent::default().describe(), "Empty");
    }
}
