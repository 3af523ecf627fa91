use crate::commands::{Outcome, Transition};
use crate::model::{Collection, Item, ItemId, Quantity};

/// Appends a new, unpacked item to the end of the list.
///
/// The description is stored as given. An empty one leaves the list unchanged with
/// [`Outcome::Rejected`]. The caller supplies the id and is responsible for it being
/// unused (see [`crate::ids::IdSource`]). An id already present is also rejected so
/// the collection never holds duplicates.
pub fn run(
    collection: &Collection,
    id: ItemId,
    description: &str,
    quantity: Quantity,
) -> Transition {
    if description.is_empty() || collection.contains(id) {
        return Transition::unchanged(collection, Outcome::Rejected);
    }

    let mut items = collection.items().to_vec();
    items.push(Item::new(id, description.to_string(), quantity));
    Transition::new(Collection::from_unique(items), Outcome::Added(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qty(n: u32) -> Quantity {
        Quantity::new(n).unwrap()
    }

    #[test]
    fn appends_unpacked_item() {
        let start = Collection::empty();
        let t = run(&start, ItemId(1), "Passport", qty(1));

        assert_eq!(t.outcome, Outcome::Added(ItemId(1)));
        assert_eq!(t.collection.len(), 1);
        let item = &t.collection.items()[0];
        assert_eq!(item.description, "Passport");
        assert_eq!(item.quantity, qty(1));
        assert!(!item.packed);
        assert!(start.is_empty());
    }

    #[test]
    fn appends_at_the_end() {
        let t = run(&Collection::empty(), ItemId(1), "Shoes", qty(2));
        let t = run(&t.collection, ItemId(2), "Hat", qty(1));

        let names: Vec<_> = t.collection.iter().map(|i| i.description.as_str()).collect();
        assert_eq!(names, ["Shoes", "Hat"]);
    }

    #[test]
    fn empty_description_is_rejected() {
        let start = run(&Collection::empty(), ItemId(1), "Map", qty(1)).collection;
        let t = run(&start, ItemId(2), "", qty(1));

        assert_eq!(t.outcome, Outcome::Rejected);
        assert_eq!(t.collection, start);
    }

    #[test]
    fn description_is_stored_verbatim() {
        let t = run(&Collection::empty(), ItemId(1), "  Sunscreen ", qty(1));
        let t = run(&t.collection, ItemId(2), "   ", qty(1));

        assert_eq!(t.outcome, Outcome::Added(ItemId(2)));
        let names: Vec<_> = t.collection.iter().map(|i| i.description.as_str()).collect();
        assert_eq!(names, ["  Sunscreen ", "   "]);
    }

    #[test]
    fn reused_id_is_rejected() {
        let start = run(&Collection::empty(), ItemId(5), "Map", qty(1)).collection;
        let t = run(&start, ItemId(5), "Compass", qty(1));

        assert_eq!(t.outcome, Outcome::Rejected);
        assert_eq!(t.collection.len(), 1);
    }
}
