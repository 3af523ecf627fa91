use colored::Colorize;
use packlist::api::{CmdMessage, MessageLevel, Stats};
use packlist::config::PackConfig;
use packlist::model::{Collection, Item};
use unicode_width::UnicodeWidthStr;

const MAX_DESCRIPTION_WIDTH: usize = 48;
const PACKED_MARKER: &str = "[x]";
const UNPACKED_MARKER: &str = "[ ]";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Prints `listed` (in whatever order it was sorted) numbering each row with its
/// position in `canonical`, which is what selectors refer to.
pub(super) fn print_items(listed: &[Item], canonical: &Collection) {
    if listed.is_empty() {
        return;
    }

    let position_width = canonical.len().to_string().len();
    let description_width = listed
        .iter()
        .map(|item| item.description.width().min(MAX_DESCRIPTION_WIDTH))
        .max()
        .unwrap_or(0);

    for item in listed {
        let position = canonical
            .iter()
            .position(|c| c.id == item.id)
            .map_or(0, |i| i + 1);
        println!(
            "{}",
            render_item_line(item, position, position_width, description_width)
        );
    }
    println!();
}

fn render_item_line(
    item: &Item,
    position: usize,
    position_width: usize,
    description_width: usize,
) -> String {
    let marker = if item.packed {
        PACKED_MARKER
    } else {
        UNPACKED_MARKER
    };
    let description = truncate_to_width(&item.description, description_width);
    let padding = description_width.saturating_sub(description.width());
    let label = format!("{:>2} {}", item.quantity, description);

    let label = if item.packed {
        label.strikethrough().dimmed().to_string()
    } else {
        label
    };

    format!(
        "{:>pw$}. {} {}{}  {}",
        position,
        marker,
        label,
        " ".repeat(padding),
        format!("@{}", item.id).dimmed(),
        pw = position_width
    )
}

pub(super) fn print_stats(stats: &Stats) {
    let summary = stats.summary();
    if stats.is_complete() {
        println!("{}", summary.green().bold());
    } else {
        println!("{}", summary.italic());
    }
}

pub(super) fn print_config(config: &PackConfig) {
    for key in PackConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
