use super::DataStore;
use crate::error::{PackError, Result};
use crate::model::Collection;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    saved: Option<Collection>,
    save_count: usize,
    fail_loads: bool,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `collection`, as if saved by an earlier session.
    pub fn with_collection(collection: Collection) -> Self {
        Self {
            saved: Some(collection),
            ..Self::default()
        }
    }

    pub fn failing_loads(mut self) -> Self {
        self.fail_loads = true;
        self
    }

    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// The last successfully saved collection, if any.
    pub fn saved(&self) -> Option<&Collection> {
        self.saved.as_ref()
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Collection> {
        if self.fail_loads {
            return Err(PackError::Corrupt("simulated unreadable slot".to_string()));
        }
        Ok(self.saved.clone().unwrap_or_default())
    }

    fn save(&mut self, collection: &Collection) -> Result<()> {
        if self.fail_saves {
            return Err(PackError::Store("simulated write failure".to_string()));
        }
        self.saved = Some(collection.clone());
        self.save_count += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Item, ItemId, Quantity};

    pub struct StoreFixture {
        items: Vec<Item>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self { items: Vec::new() }
        }

        fn next_id(&self) -> ItemId {
            ItemId(self.items.len() as u64 + 1)
        }

        pub fn with_items(mut self, count: usize) -> Self {
            for _ in 0..count {
                let description = format!("Test Item {}", self.items.len() + 1);
                self.items
                    .push(Item::new(self.next_id(), description, Quantity::ONE));
            }
            self
        }

        pub fn with_item(mut self, description: &str, quantity: u32) -> Self {
            let quantity = Quantity::new(quantity).unwrap();
            self.items
                .push(Item::new(self.next_id(), description.to_string(), quantity));
            self
        }

        pub fn with_packed_item(mut self, description: &str) -> Self {
            let mut item = Item::new(self.next_id(), description.to_string(), Quantity::ONE);
            item.packed = true;
            self.items.push(item);
            self
        }

        pub fn collection(&self) -> Collection {
            Collection::try_from_items(self.items.clone()).unwrap()
        }

        pub fn store(self) -> InMemoryStore {
            InMemoryStore::with_collection(self.collection())
        }
    }
}
