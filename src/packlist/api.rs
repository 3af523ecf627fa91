//! # API Facade
//!
//! [`PackingApi`] is the item store: the single owner of the current [`Collection`]
//! and the only thing that replaces it. Every UI (the bundled CLI, a test, anything
//! else) goes through it.
//!
//! ## Responsibilities
//!
//! - **Restore** the collection from the [`DataStore`] once, at [`PackingApi::open`].
//!   Missing, unreadable or corrupt data degrades to an empty list; it is logged, never
//!   returned as an error.
//! - **Dispatch** each intent to its pure command in [`crate::commands`], after
//!   resolving user selectors against the current snapshot.
//! - **Persist** after every mutation. The in-memory collection is replaced *before*
//!   the save is attempted, so the next operation always sees the latest state even if
//!   the write fails. A failed save is logged and reported as a warning message on the
//!   result; it never fails the operation.
//!
//! Operations that change nothing (empty description, unknown item) skip the save.
//! `reset` always saves, so the stored slot ends up empty.
//!
//! ## What the API Does NOT Do
//!
//! - Prompt for confirmation. [`PackingApi::reset`] must only be called once the UI
//!   has obtained it.
//! - Write to stdout/stderr or format output beyond plain message strings.

use crate::commands::{self, add, packing, remove, reset, sort, Transition};
use crate::error::Result;
use crate::ids::{ClockIds, IdSource};
use crate::index::{resolve_all, ItemSelector};
use crate::model::{Collection, Item, ItemId, Quantity, SortKey};
use crate::store::DataStore;
use tracing::{debug, warn};

pub struct PackingApi<S: DataStore, G: IdSource = ClockIds> {
    store: S,
    ids: G,
    items: Collection,
    load_error: Option<String>,
}

impl<S: DataStore> PackingApi<S, ClockIds> {
    /// Opens the store with wall-clock ids.
    pub fn open(store: S) -> Self {
        Self::open_with_ids(store, ClockIds::new())
    }
}

impl<S: DataStore, G: IdSource> PackingApi<S, G> {
    pub fn open_with_ids(store: S, ids: G) -> Self {
        let (items, load_error) = match store.load() {
            Ok(items) => {
                debug!(count = items.len(), "restored packing list");
                (items, None)
            }
            Err(err) => {
                warn!(error = %err, "could not restore packing list, starting empty");
                (Collection::empty(), Some(err.to_string()))
            }
        };

        Self {
            store,
            ids,
            items,
            load_error,
        }
    }

    /// The current snapshot, in canonical order.
    pub fn items(&self) -> &Collection {
        &self.items
    }

    /// Why the stored list could not be restored, if it could not.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add(&mut self, description: &str, quantity: Option<Quantity>) -> CmdResult {
        let id = self.ids.next_id(&self.items);
        let transition = add::run(&self.items, id, description, quantity.unwrap_or_default());

        let mut result = CmdResult::default();
        match transition.outcome {
            Outcome::Added(id) => {
                if let Some(item) = transition.collection.get(id) {
                    result.add_message(CmdMessage::success(format!(
                        "Added: {} {}",
                        item.quantity, item.description
                    )));
                    result.affected_items.push(item.clone());
                }
            }
            _ => result.add_message(CmdMessage::warning(
                "Nothing added: description is empty.",
            )),
        }
        self.commit(transition, result)
    }

    pub fn remove(&mut self, selectors: &[ItemSelector]) -> CmdResult {
        self.apply_each(selectors, "Removed", |c, id| remove::run(c, id))
    }

    pub fn set_packed(&mut self, selectors: &[ItemSelector], packed: bool) -> CmdResult {
        let verb = if packed { "Packed" } else { "Unpacked" };
        self.apply_each(selectors, verb, |c, id| packing::set_packed(c, id, packed))
    }

    pub fn toggle(&mut self, selectors: &[ItemSelector]) -> CmdResult {
        self.apply_each(selectors, "Toggled", packing::toggle)
    }

    /// Discards every item. Callers must have confirmed with the user first.
    pub fn reset(&mut self) -> CmdResult {
        let transition = reset::run(&self.items);
        let mut result = CmdResult::default().with_affected_items(self.items.items().to_vec());
        if let Outcome::Cleared(n) = transition.outcome {
            result.add_message(CmdMessage::success(format!("Cleared {} items.", n)));
        }
        self.commit(transition, result)
    }

    pub fn sorted(&self, key: SortKey) -> Vec<&Item> {
        sort::sorted_view(&self.items, key)
    }

    pub fn stats(&self) -> Stats {
        commands::stats::compute(&self.items)
    }

    /// Sorted listing plus stats, ready for rendering.
    pub fn list(&self, key: SortKey) -> CmdResult {
        let listed = self.sorted(key).into_iter().cloned().collect();
        CmdResult::default()
            .with_listed_items(listed)
            .with_stats(self.stats())
    }

    fn apply_each(
        &mut self,
        selectors: &[ItemSelector],
        verb: &str,
        step: impl Fn(&Collection, ItemId) -> Transition,
    ) -> CmdResult {
        let mut result = CmdResult::default();
        let mut transition = Transition::unchanged(&self.items, Outcome::Updated(0));

        for (selector, id) in resolve_all(&self.items, selectors) {
            let Some(id) = id else {
                result.add_message(CmdMessage::warning(format!(
                    "No item matches {}",
                    selector
                )));
                continue;
            };
            let before = transition.collection.get(id).cloned();
            let next = step(&transition.collection, id);
            let changed = !next.outcome.is_noop();
            transition = transition.then(|_| next);
            if !changed {
                continue;
            }
            if let Some(item) = transition.collection.get(id).cloned().or(before) {
                result.add_message(CmdMessage::success(format!(
                    "{} ({}): {}",
                    verb, selector, item.description
                )));
                result.affected_items.push(item);
            }
        }
        self.commit(transition, result)
    }

    fn commit(&mut self, transition: Transition, result: CmdResult) -> CmdResult {
        let Transition {
            collection,
            outcome,
        } = transition;
        let mut result = result.with_outcome(outcome);

        debug!(?outcome, count = collection.len(), "applied transition");
        if outcome.is_noop() {
            return result;
        }

        self.items = collection;
        if let Err(err) = self.store.save(&self.items) {
            warn!(error = %err, "failed to save packing list");
            result.add_message(CmdMessage::warning(format!(
                "Changes not saved: {}",
                err
            )));
        }
        result
    }
}

pub fn config(paths: &PackPaths, action: ConfigAction) -> Result<CmdResult> {
    commands::config::run(paths, action)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, Outcome, PackPaths, Stats};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn api(store: InMemoryStore) -> PackingApi<InMemoryStore, SequentialIds> {
        PackingApi::open_with_ids(store, SequentialIds::new())
    }

    fn pos(n: usize) -> ItemSelector {
        ItemSelector::Position(n)
    }

    #[test]
    fn restores_saved_items() {
        let store = StoreFixture::new().with_item("Tent", 1).with_packed_item("Stove").store();
        let api = api(store);

        assert_eq!(api.items().len(), 2);
        assert!(api.load_error().is_none());
    }

    #[test]
    fn unreadable_store_starts_empty() {
        let api = api(StoreFixture::new().with_items(3).store().failing_loads());

        assert!(api.items().is_empty());
        assert!(api.load_error().is_some());
    }

    #[test]
    fn add_saves_and_reports_item() {
        let mut api = api(InMemoryStore::new());
        let result = api.add("Passport", None);

        assert_eq!(result.outcome, Some(Outcome::Added(ItemId(1))));
        assert_eq!(result.affected_items[0].quantity, Quantity::ONE);
        assert_eq!(api.store().save_count(), 1);
        assert_eq!(api.store().saved(), Some(api.items()));
    }

    #[test]
    fn ids_are_distinct_across_adds() {
        let mut api = api(InMemoryStore::new());
        api.add("Shoes", None);
        api.add("Shoes", None);

        let ids: Vec<_> = api.items().iter().map(|i| i.id).collect();
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn empty_add_is_not_saved() {
        let mut api = api(InMemoryStore::new());
        let result = api.add("", Quantity::new(4));

        assert_eq!(result.outcome, Some(Outcome::Rejected));
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(api.items().is_empty());
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn passport_charger_scenario() {
        let mut api = api(InMemoryStore::new());
        api.add("Passport", Quantity::new(1));
        api.add("Charger", Quantity::new(2));
        api.set_packed(&[pos(1)], true);

        let stats = api.stats();
        assert_eq!((stats.total, stats.packed_count, stats.percentage), (2, 1, 50));
        assert_eq!(api.store().save_count(), 3);
    }

    #[test]
    fn socks_scenario() {
        let mut api = api(InMemoryStore::new());
        let added = api.add("Socks", Quantity::new(3));
        let id = added.affected_items[0].id;
        api.remove(&[ItemSelector::Id(id)]);

        assert!(api.items().is_empty());
        assert_eq!(api.stats(), Stats::default());
    }

    #[test]
    fn batch_positions_refer_to_starting_snapshot() {
        let mut api = api(StoreFixture::new().with_items(4).store());
        let result = api.remove(&[pos(1), pos(3)]);

        assert_eq!(result.outcome, Some(Outcome::Updated(2)));
        let ids: Vec<_> = api.items().iter().map(|i| i.id.0).collect();
        assert_eq!(ids, [2, 4]);
        assert_eq!(api.store().save_count(), 1);
    }

    #[test]
    fn unknown_selector_is_a_reported_noop() {
        let mut api = api(StoreFixture::new().with_items(1).store());
        let result = api.set_packed(&[pos(5)], true);

        assert_eq!(result.outcome, Some(Outcome::Updated(0)));
        assert_eq!(result.messages[0].content, "No item matches 5");
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn repeated_selector_reports_only_the_effective_step() {
        let mut api = api(StoreFixture::new().with_item("Hat", 1).store());
        let id = api.items().items()[0].id;
        let result = api.remove(&[pos(1), ItemSelector::Id(id)]);

        assert_eq!(result.outcome, Some(Outcome::Updated(1)));
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "Removed (1): Hat");
        assert_eq!(result.affected_items.len(), 1);
        assert!(api.items().is_empty());
    }

    #[test]
    fn add_after_loading_the_largest_id_does_not_overflow() {
        let top = Item::new(ItemId(u64::MAX), "Tent".into(), Quantity::ONE);
        let store = InMemoryStore::with_collection(Collection::try_from_items(vec![top]).unwrap());
        let mut api = PackingApi::open(store);
        let result = api.add("Stove", None);

        assert_eq!(result.outcome, Some(Outcome::Added(ItemId(1))));
        assert_eq!(api.items().len(), 2);
    }

    #[test]
    fn whitespace_description_is_kept() {
        let mut api = api(InMemoryStore::new());
        api.add("  Sunscreen ", None);

        assert_eq!(api.items().items()[0].description, "  Sunscreen ");
        assert_eq!(api.store().save_count(), 1);
    }

    #[test]
    fn toggle_flips_each_selected_item() {
        let mut api = api(
            StoreFixture::new()
                .with_item("Hat", 1)
                .with_packed_item("Map")
                .store(),
        );
        api.toggle(&[pos(1), pos(2)]);

        let packed: Vec<_> = api.items().iter().map(|i| i.packed).collect();
        assert_eq!(packed, [true, false]);
    }

    #[test]
    fn reset_always_saves_empty() {
        let mut api = api(StoreFixture::new().with_items(3).store());
        let result = api.reset();

        assert_eq!(result.outcome, Some(Outcome::Cleared(3)));
        assert_eq!(result.affected_items.len(), 3);
        assert!(api.items().is_empty());
        assert_eq!(api.store().saved(), Some(&Collection::empty()));

        api.reset();
        assert_eq!(api.store().save_count(), 2);
    }

    #[test]
    fn failed_save_keeps_in_memory_state() {
        let mut api = api(InMemoryStore::new().failing_saves());
        let result = api.add("Sunscreen", None);

        assert_eq!(api.items().len(), 1);
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning && m.content.starts_with("Changes not saved")));

        api.set_packed(&[pos(1)], true);
        assert!(api.items().items()[0].packed);
    }

    #[test]
    fn list_sorts_without_touching_order() {
        let mut api = api(InMemoryStore::new());
        for name in ["Shoes", "Hat", "Map"] {
            api.add(name, None);
        }

        let listed = api.list(SortKey::Description);
        let names: Vec<_> = listed.listed_items.iter().map(|i| i.description.as_str()).collect();
        assert_eq!(names, ["Hat", "Map", "Shoes"]);
        assert_eq!(listed.stats.map(|s| s.total), Some(3));

        let canonical: Vec<_> = api.items().iter().map(|i| i.description.as_str()).collect();
        assert_eq!(canonical, ["Shoes", "Hat", "Map"]);
    }
}
