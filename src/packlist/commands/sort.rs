//! Display orderings of the item list.
//!
//! Views borrow from the collection and never change it; they are recomputed on
//! every read from whatever collection is current.

use crate::model::{Collection, Item, SortKey};
use icu_collator::Collator;
use std::cmp::Ordering;

pub fn sorted_view(collection: &Collection, key: SortKey) -> Vec<&Item> {
    match key {
        SortKey::Input => collection.iter().collect(),
        SortKey::Description => by_description(collection),
        SortKey::Packed => packed_first(collection),
    }
}

/// Stable sort on description using root-locale collation, so "apple" sits next to
/// "Apple" and "Éclair" next to "eclair" instead of after "zebra".
fn by_description(collection: &Collection) -> Vec<&Item> {
    let mut items: Vec<&Item> = collection.iter().collect();

    match Collator::try_new(Default::default(), Default::default()) {
        Ok(collator) => {
            items.sort_by(|a, b| collator.compare(&a.description, &b.description));
        }
        Err(err) => {
            tracing::warn!(error = %err, "collation data unavailable, falling back to case-folded order");
            items.sort_by(|a, b| fold_compare(&a.description, &b.description));
        }
    }
    items
}

fn fold_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Stable partition: packed items first, each group keeps input order.
fn packed_first(collection: &Collection) -> Vec<&Item> {
    let (mut packed, unpacked): (Vec<&Item>, Vec<&Item>) =
        collection.iter().partition(|item| item.packed);
    packed.extend(unpacked);
    packed
}
