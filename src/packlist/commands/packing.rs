use crate::commands::{Outcome, Transition};
use crate::model::{Collection, ItemId};

/// Replaces the `packed` flag of the item with `id`. Order is untouched.
pub fn set_packed(collection: &Collection, id: ItemId, packed: bool) -> Transition {
    update_packed(collection, id, |_| packed)
}

/// Flips the `packed` flag of the item with `id`.
pub fn toggle(collection: &Collection, id: ItemId) -> Transition {
    update_packed(collection, id, |current| !current)
}

fn update_packed(collection: &Collection, id: ItemId, f: impl Fn(bool) -> bool) -> Transition {
    if !collection.contains(id) {
        return Transition::unchanged(collection, Outcome::Updated(0));
    }

    let items = collection
        .iter()
        .map(|item| {
            let mut item = item.clone();
            if item.id == id {
                item.packed = f(item.packed);
            }
            item
        })
        .collect();
    Transition::new(Collection::from_unique(items), Outcome::Updated(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::Quantity;

    fn two_items() -> Collection {
        let t = add::run(&Collection::empty(), ItemId(1), "Passport", Quantity::ONE);
        add::run(&t.collection, ItemId(2), "Charger", Quantity::new(2).unwrap()).collection
    }

    #[test]
    fn marks_only_the_matching_item() {
        let t = set_packed(&two_items(), ItemId(1), true);

        assert_eq!(t.outcome, Outcome::Updated(1));
        assert!(t.collection.get(ItemId(1)).unwrap().packed);
        assert!(!t.collection.get(ItemId(2)).unwrap().packed);
    }

    #[test]
    fn pack_then_unpack_restores_original() {
        let start = two_items();
        let packed = set_packed(&start, ItemId(2), true);
        let unpacked = set_packed(&packed.collection, ItemId(2), false);

        assert_eq!(unpacked.collection, start);
    }

    #[test]
    fn does_not_reorder() {
        let t = set_packed(&two_items(), ItemId(2), true);
        let ids: Vec<_> = t.collection.iter().map(|i| i.id).collect();
        assert_eq!(ids, [ItemId(1), ItemId(2)]);
    }

    #[test]
    fn unknown_id_is_a_noop() {
        let start = two_items();
        let t = set_packed(&start, ItemId(99), true);

        assert_eq!(t.outcome, Outcome::Updated(0));
        assert_eq!(t.collection, start);
    }

    #[test]
    fn toggle_flips_current_value() {
        let once = toggle(&two_items(), ItemId(1));
        assert!(once.collection.get(ItemId(1)).unwrap().packed);

        let twice = toggle(&once.collection, ItemId(1));
        assert!(!twice.collection.get(ItemId(1)).unwrap().packed);
    }
}
