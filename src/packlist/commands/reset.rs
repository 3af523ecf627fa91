use crate::commands::{Outcome, Transition};
use crate::model::Collection;

/// Discards every item.
///
/// This is destructive and cannot be undone; callers must confirm with the user
/// before invoking it.
pub fn run(collection: &Collection) -> Transition {
    Transition::new(Collection::empty(), Outcome::Cleared(collection.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::{ItemId, Quantity};

    #[test]
    fn always_yields_empty() {
        let t = add::run(&Collection::empty(), ItemId(1), "Tent", Quantity::ONE);
        let t = add::run(&t.collection, ItemId(2), "Stove", Quantity::ONE);

        let cleared = run(&t.collection);
        assert!(cleared.collection.is_empty());
        assert_eq!(cleared.outcome, Outcome::Cleared(2));

        let again = run(&cleared.collection);
        assert!(again.collection.is_empty());
        assert_eq!(again.outcome, Outcome::Cleared(0));
    }
}
