use super::logging::{init_logging, LogConfig};
use super::render::{print_config, print_items, print_messages, print_stats};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use packlist::api::{config, CmdMessage, ConfigAction, PackPaths, PackingApi};
use packlist::config::PackConfig;
use packlist::error::{PackError, Result};
use packlist::index::ItemSelector;
use packlist::model::{Quantity, SortKey};
use packlist::store::fs::FileStore;
use std::io::{self, Write};
use std::path::PathBuf;

const HOME_ENV: &str = "PACKLIST_HOME";

struct AppContext {
    api: PackingApi<FileStore>,
    config: PackConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&LogConfig::from_verbosity(cli.verbose)) {
        eprintln!("Warning: logging unavailable: {}", e);
    }

    let paths = PackPaths {
        data_dir: resolve_data_dir(&cli)?,
    };

    // Config does not need the list loaded
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&paths, key.clone(), value.clone());
    }

    let mut ctx = init_context(&paths);

    match cli.command {
        Some(Commands::Add {
            description,
            quantity,
        }) => handle_add(&mut ctx, description.join(" "), quantity),
        Some(Commands::List { sort }) => handle_list(&ctx, sort),
        Some(Commands::Pack { items }) => handle_set_packed(&mut ctx, &items, true),
        Some(Commands::Unpack { items }) => handle_set_packed(&mut ctx, &items, false),
        Some(Commands::Toggle { items }) => handle_toggle(&mut ctx, &items),
        Some(Commands::Remove { items }) => handle_remove(&mut ctx, &items),
        Some(Commands::Reset { yes }) => handle_reset(&mut ctx, yes),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Config { .. }) => Ok(()),
        None => handle_list(&ctx, SortKey::Input),
    }
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "packlist", "packlist")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PackError::Store("Could not determine data directory".to_string()))
}

fn init_context(paths: &PackPaths) -> AppContext {
    let config = PackConfig::load(&paths.data_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not read config, using defaults");
        PackConfig::default()
    });

    let store = FileStore::new(paths.data_dir.clone()).with_slot(&config.slot);
    let api = PackingApi::open(store);
    if api.load_error().is_some() {
        print_messages(&[CmdMessage::warning(
            "Saved list could not be read; starting with an empty list.",
        )]);
    }

    AppContext { api, config }
}

fn handle_add(ctx: &mut AppContext, description: String, quantity: u32) -> Result<()> {
    let result = ctx.api.add(&description, Quantity::new(quantity));
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, sort: SortKey) -> Result<()> {
    let result = ctx.api.list(sort);
    print_items(&result.listed_items, ctx.api.items());
    if let Some(stats) = &result.stats {
        print_stats(stats);
    }
    Ok(())
}

fn handle_set_packed(ctx: &mut AppContext, items: &[ItemSelector], packed: bool) -> Result<()> {
    let result = ctx.api.set_packed(items, packed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_toggle(ctx: &mut AppContext, items: &[ItemSelector]) -> Result<()> {
    let result = ctx.api.toggle(items);
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, items: &[ItemSelector]) -> Result<()> {
    let result = ctx.api.remove(items);
    print_messages(&result.messages);
    Ok(())
}

fn handle_reset(ctx: &mut AppContext, skip_confirm: bool) -> Result<()> {
    let count = ctx.api.items().len();
    if count == 0 {
        print_messages(&[CmdMessage::info("The list is already empty.")]);
        return Ok(());
    }

    if !skip_confirm && ctx.config.confirm_reset {
        if !confirm(&format!("[Y] to clear {} items: ", count))? {
            print_messages(&[CmdMessage::info("Operation cancelled.")]);
            return Ok(());
        }
    }

    let result = ctx.api.reset();
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    print_stats(&ctx.api.stats());
    Ok(())
}

fn handle_config(paths: &PackPaths, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = config(paths, action)?;
    if let (Some(cfg), true) = (&result.config, result.messages.is_empty()) {
        print_config(cfg);
    }
    print_messages(&result.messages);
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush().map_err(PackError::Io)?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(PackError::Io)?;

    Ok(matches!(input.trim(), "Y" | "y" | "yes" | "Yes"))
}
