use clap::{ArgAction, Parser, Subcommand};
use packlist::index::ItemSelector;
use packlist::model::{Quantity, SortKey};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "packlist", bin_name = "packlist", version = get_version())]
#[command(about = "What do you need for your trip? A packing list that remembers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the list and its config (default: $PACKLIST_HOME or the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an item to the list
    #[command(alias = "a")]
    Add {
        /// What to pack (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,

        /// How many to pack
        #[arg(
            short,
            long,
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(Quantity::MAX_OFFERED))
        )]
        quantity: u32,
    },

    /// Show the list
    #[command(alias = "ls")]
    List {
        /// Display order: input, description or packed
        #[arg(short, long, default_value = "input")]
        sort: SortKey,
    },

    /// Mark items as packed
    #[command(alias = "p")]
    Pack {
        /// Items by position (e.g. 1 3) or id (e.g. @1718031234567)
        #[arg(required = true, num_args = 1..)]
        items: Vec<ItemSelector>,
    },

    /// Mark items as not packed
    #[command(alias = "u")]
    Unpack {
        /// Items by position (e.g. 1 3) or id (e.g. @1718031234567)
        #[arg(required = true, num_args = 1..)]
        items: Vec<ItemSelector>,
    },

    /// Flip the packed state of items
    #[command(alias = "t")]
    Toggle {
        /// Items by position (e.g. 1 3) or id (e.g. @1718031234567)
        #[arg(required = true, num_args = 1..)]
        items: Vec<ItemSelector>,
    },

    /// Remove items from the list
    #[command(alias = "rm")]
    Remove {
        /// Items by position (e.g. 1 3) or id (e.g. @1718031234567)
        #[arg(required = true, num_args = 1..)]
        items: Vec<ItemSelector>,
    },

    /// Clear the whole list
    #[command(alias = "clear")]
    Reset {
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Show packing progress
    Stats,

    /// Get or set configuration
    Config {
        /// Configuration key (slot, confirm-reset)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
