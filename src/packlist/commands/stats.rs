use crate::model::Collection;

/// Aggregate progress over a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub packed_count: usize,
    /// Packed share rounded to the nearest whole percent (halves round up). Zero for an
    /// empty list.
    pub percentage: u8,
}

impl Stats {
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.packed_count == self.total
    }

    /// One-line status suitable for a footer.
    pub fn summary(&self) -> String {
        if self.total == 0 {
            "Start adding some items to your packing list!".to_string()
        } else if self.percentage >= 100 {
            "You are ready to go! ✈️".to_string()
        } else {
            format!(
                "You have {} items on your list, and you already packed {} ({}%)",
                self.total, self.packed_count, self.percentage
            )
        }
    }
}

pub fn compute(collection: &Collection) -> Stats {
    let total = collection.len();
    let packed_count = collection.iter().filter(|item| item.packed).count();
    Stats {
        total,
        packed_count,
        percentage: percentage(packed_count, total),
    }
}

fn percentage(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    // round(part / total * 100) in integers: floor((200 * part + total) / (2 * total))
    let pct = (200 * part as u64 + total as u64) / (2 * total as u64);
    u8::try_from(pct.min(100)).unwrap_or(100)
}
