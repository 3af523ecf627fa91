use crate::error::{PackError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Stable identifier of an item. Assigned once at creation, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// How many of an item to pack. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    pub const ONE: Quantity = Quantity(1);

    /// Upper bound offered by input widgets. The library itself only enforces `>= 1`.
    pub const MAX_OFFERED: u32 = 20;

    pub fn new(n: u32) -> Option<Self> {
        (n >= 1).then_some(Self(n))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u32> for Quantity {
    type Error = String;

    fn try_from(n: u32) -> std::result::Result<Self, Self::Error> {
        Quantity::new(n).ok_or_else(|| format!("quantity must be at least 1, got {}", n))
    }
}

impl From<Quantity> for u32 {
    fn from(q: Quantity) -> u32 {
        q.0
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub description: String,
    pub quantity: Quantity,
    pub packed: bool,
}

impl Item {
    pub fn new(id: ItemId, description: String, quantity: Quantity) -> Self {
        Self {
            id,
            description,
            quantity,
            packed: false,
        }
    }
}

/// The ordered, id-unique list of items.
///
/// A `Collection` is never edited in place: every operation builds a new one, so a
/// snapshot handed to a reader stays valid no matter what happens afterwards. Cloning
/// is cheap (shared slice).
///
/// Insertion order is the canonical order; it is the order persisted and the order
/// [`SortKey::Input`] shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Item>", into = "Vec<Item>")]
pub struct Collection {
    items: Arc<[Item]>,
}

impl Default for Collection {
    fn default() -> Self {
        Self::from_unique(Vec::new())
    }
}

impl Collection {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a collection, rejecting duplicate ids.
    pub fn try_from_items(items: Vec<Item>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(PackError::Corrupt(format!("duplicate item id {}", item.id)));
            }
        }
        Ok(Self::from_unique(items))
    }

    /// Callers guarantee the ids are already distinct.
    pub(crate) fn from_unique(items: Vec<Item>) -> Self {
        Self {
            items: items.into(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn max_id(&self) -> Option<ItemId> {
        self.items.iter().map(|item| item.id).max()
    }
}

impl TryFrom<Vec<Item>> for Collection {
    type Error = PackError;

    fn try_from(items: Vec<Item>) -> Result<Self> {
        Collection::try_from_items(items)
    }
}

impl From<Collection> for Vec<Item> {
    fn from(collection: Collection) -> Vec<Item> {
        collection.items.to_vec()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Display order for the item list. Transient view state, never persisted with the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Input,
    Description,
    Packed,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Input, SortKey::Description, SortKey::Packed];
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SortKey::Input => "input",
            SortKey::Description => "description",
            SortKey::Packed => "packed",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "input" => Ok(SortKey::Input),
            "description" => Ok(SortKey::Description),
            "packed" => Ok(SortKey::Packed),
            other => Err(format!(
                "Unknown sort key: {} (expected input, description or packed)",
                other
            )),
        }
    }
}
