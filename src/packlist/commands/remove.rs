use crate::commands::{Outcome, Transition};
use crate::model::{Collection, ItemId};

/// Drops the item with `id`, keeping everything else in order.
pub fn run(collection: &Collection, id: ItemId) -> Transition {
    if !collection.contains(id) {
        return Transition::unchanged(collection, Outcome::Updated(0));
    }

    let items = collection
        .iter()
        .filter(|item| item.id != id)
        .cloned()
        .collect();
    Transition::new(Collection::from_unique(items), Outcome::Updated(1))
}
