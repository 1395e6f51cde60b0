use super::render::{
    render_book_list, render_config, render_error, render_messages, render_search_results,
};
use super::setup::{Cli, Commands};
use super::shell::Shell;
use clap::Parser;
use shelf::api::{CmdResult, ConfigAction};
use shelf::error::{Result, ShelfError};
use shelf::init::{default_config_dir, initialize, ShelfContext};
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Overrides the platform config directory.
const CONFIG_DIR_ENV: &str = "SHELF_CONFIG_DIR";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;
    print!("{}", render_messages(&ctx.messages));

    match cli.command {
        None | Some(Commands::Menu) => handle_menu(&mut ctx),
        Some(Commands::Add {
            title,
            author,
            isbn,
        }) => print_result(ctx.api.add_book(&title, &author, &isbn)?),
        Some(Commands::Remove { isbn }) => print_result(ctx.api.remove_book(&isbn)?),
        Some(Commands::Borrow { isbn }) => print_result(ctx.api.borrow_book(&isbn)?),
        Some(Commands::Return { isbn }) => print_result(ctx.api.return_book(&isbn)?),
        Some(Commands::List) => {
            let result = ctx.api.list_books()?;
            print!("{}", render_book_list(&result.listed_books));
            Ok(())
        }
        Some(Commands::Search { term }) => {
            let result = ctx.api.search_books(&term.join(" "))?;
            print!("{}", render_search_results(&result.listed_books));
            Ok(())
        }
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<ShelfContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config_dir = std::env::var_os(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| default_config_dir(&cwd));
    initialize(&cwd, config_dir, cli.file.as_deref())
}

fn handle_menu(ctx: &mut ShelfContext) -> Result<()> {
    debug!(data = %ctx.api.location(), "starting interactive menu");
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&mut ctx.api, stdin.lock(), stdout.lock()).run()
}

fn handle_config(ctx: &ShelfContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let (Some(config), Some(path)) = (&result.config, &result.config_path) {
            print!("{}", render_config(config, path, &ctx.data_file));
        }
    }
    print!("{}", render_messages(&result.messages));
    Ok(())
}

fn print_result(result: CmdResult) -> Result<()> {
    print!("{}", render_messages(&result.messages));
    Ok(())
}

/// Render an error for the one-shot commands, which exit non-zero on failure.
pub fn report_error(err: &ShelfError) {
    eprint!("{}", render_error(err));
}
