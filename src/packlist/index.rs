//! # Item Selection
//!
//! Item ids are millisecond timestamps: stable, but not something anyone wants to
//! type. Users normally refer to items by their 1-based position in the list as it
//! was entered (`3`), and can fall back to the raw id with an `@` prefix (`@1718031234567`)
//! when positions are ambiguous, e.g. in scripts.
//!
//! Positions always refer to canonical input order, never to a sorted view, so
//! `packlist list --sort description` followed by `packlist pack 2` packs the second
//! item *entered*. The listing prints both the position and the id to make this clear.

use crate::model::{Collection, ItemId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemSelector {
    Position(usize),
    Id(ItemId),
}

impl std::fmt::Display for ItemSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemSelector::Position(n) => write!(f, "{}", n),
            ItemSelector::Id(id) => write!(f, "@{}", id),
        }
    }
}

impl std::str::FromStr for ItemSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(rest) = s.strip_prefix('@') {
            if let Ok(n) = rest.parse() {
                return Ok(ItemSelector::Id(ItemId(n)));
            }
        } else if let Ok(n) = s.parse::<usize>() {
            if n > 0 {
                return Ok(ItemSelector::Position(n));
            }
        }
        Err(format!("Invalid item selector: {}", s))
    }
}

impl ItemSelector {
    /// The id this selector points at in `collection`, if any.
    pub fn resolve(&self, collection: &Collection) -> Option<ItemId> {
        match self {
            ItemSelector::Position(n) => n
                .checked_sub(1)
                .and_then(|i| collection.items().get(i))
                .map(|item| item.id),
            ItemSelector::Id(id) => collection.contains(*id).then_some(*id),
        }
    }
}

/// Resolves every selector against the same snapshot, so positions do not shift
/// while a batch is applied. Unknown selectors come back as `None`.
pub fn resolve_all(
    collection: &Collection,
    selectors: &[ItemSelector],
) -> Vec<(ItemSelector, Option<ItemId>)> {
    selectors
        .iter()
        .map(|sel| (*sel, sel.resolve(collection)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn parses_positions_and_ids() {
        assert_eq!("3".parse(), Ok(ItemSelector::Position(3)));
        assert_eq!("@42".parse(), Ok(ItemSelector::Id(ItemId(42))));
        assert!("0".parse::<ItemSelector>().is_err());
        assert!("@".parse::<ItemSelector>().is_err());
        assert!("p1".parse::<ItemSelector>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for sel in [ItemSelector::Position(7), ItemSelector::Id(ItemId(1718031234567))] {
            assert_eq!(sel.to_string().parse(), Ok(sel));
        }
    }

    #[test]
    fn resolves_against_input_order() {
        let collection = StoreFixture::new()
            .with_item("Shoes", 1)
            .with_item("Hat", 1)
            .collection();

        assert_eq!(ItemSelector::Position(2).resolve(&collection), Some(ItemId(2)));
        assert_eq!(ItemSelector::Position(3).resolve(&collection), None);
        assert_eq!(ItemSelector::Id(ItemId(1)).resolve(&collection), Some(ItemId(1)));
        assert_eq!(ItemSelector::Id(ItemId(9)).resolve(&collection), None);
    }

    #[test]
    fn batch_resolution_uses_one_snapshot() {
        let collection = StoreFixture::new().with_items(3).collection();
        let resolved = resolve_all(
            &collection,
            &[ItemSelector::Position(1), ItemSelector::Position(3)],
        );
        assert_eq!(resolved[0].1, Some(ItemId(1)));
        assert_eq!(resolved[1].1, Some(ItemId(3)));
    }
}
