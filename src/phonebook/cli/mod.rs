//! The session: resolves paths, seeds and loads the contact file, runs one
//! command (or the menu) and saves after every mutation.

mod menu;
mod print;
mod setup;

use clap::Parser;
use log::{debug, warn};
use phonebook::api::{CmdResult, ConfigAction, PhonebookApi, PhonebookPaths};
use phonebook::config::PhonebookConfig;
use phonebook::error::Result;
use phonebook::store::fs::{FileStore, DEFAULT_FILENAME};
use std::io;
use std::path::PathBuf;

use print::{print_contacts, print_messages};
use setup::{init_logging, resolve_config_dir, Cli, Commands};

struct AppContext {
    api: PhonebookApi<FileStore>,
    config: PhonebookConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli);

    let command = cli.command.unwrap_or(Commands::List { json: false });
    if command.needs_contacts() {
        start_session(&mut ctx)?;
    }

    match command {
        Commands::List { json } => handle_list(&ctx, json),
        Commands::Add { name, phone, id } => {
            handle_mutation(&mut ctx, |api| api.add_contact(&name, &phone, &id))
        }
        Commands::Rename { old_name, new_name } => {
            handle_mutation(&mut ctx, |api| api.rename_contact(&old_name, &new_name))
        }
        Commands::Remove { name } => handle_mutation(&mut ctx, |api| api.remove_contacts(&name)),
        Commands::Find { id } => handle_find(&ctx, &id),
        Commands::Seed => handle_seed(&ctx),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
        Commands::Menu => handle_menu(&mut ctx),
    }
}

fn init_context(cli: &Cli) -> AppContext {
    let config_dir = resolve_config_dir(cli);
    let config = PhonebookConfig::load(&config_dir).unwrap_or_else(|e| {
        warn!("Ignoring unreadable config in {}: {}", config_dir.display(), e);
        PhonebookConfig::default()
    });

    let data_file = cli
        .file
        .clone()
        .or_else(|| config.data_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FILENAME));
    debug!("Using contact file {}", data_file.display());

    let store = FileStore::new(data_file.clone());
    let paths = PhonebookPaths {
        config_dir,
        data_file,
    };

    AppContext {
        api: PhonebookApi::new(store, paths),
        config,
    }
}

/// Seed (if configured) and load. Failure here ends the session.
fn start_session(ctx: &mut AppContext) -> Result<()> {
    if ctx.config.seed_on_start {
        ctx.api.ensure_seeded()?;
    }
    ctx.api.load()
}

fn handle_list(ctx: &AppContext, json: bool) -> Result<()> {
    let result = ctx.api.list_contacts()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result.listed_contacts)?);
    } else {
        print_contacts(&result.listed_contacts);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_find(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.find_contact(id)?;
    print_contacts(&result.listed_contacts);
    Ok(())
}

fn handle_mutation<F>(ctx: &mut AppContext, op: F) -> Result<()>
where
    F: FnOnce(&mut PhonebookApi<FileStore>) -> Result<CmdResult>,
{
    let result = op(&mut ctx.api)?;
    if result.is_mutation() {
        ctx.api.save()?;
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_seed(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.ensure_seeded()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_menu(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    menu::run(&mut ctx.api, stdin.lock(), &mut stdout)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let result = ctx.api.config(action)?;
    print_messages(&result.messages);
    Ok(())
}
