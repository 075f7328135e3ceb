//! Roomfit CLI - furniture inventory and room fit checks.

use clap::Parser;
use roomfit_cli::commands;
use roomfit_cli::{Cli, Command, Config, EditorSource, Formatter, Shell};
use roomfit_domain::Room;
use roomfit_store::{FileStore, Inventory};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> roomfit_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_tracing(&config.settings.log_level);

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let data_dir = cli.data_dir.unwrap_or_else(|| config.data_dir.clone());
    let mut store = FileStore::new(&data_dir);
    tracing::debug!(data_dir = %data_dir.display(), "using data directory");

    let outcome = store.load();
    for problem in &outcome.problems {
        eprintln!("{}", formatter.warning(&problem.to_string()));
    }
    let mut inventory = outcome.inventory;

    match cli.command {
        None | Some(Command::Shell) => {
            let shell_result = run_shell(&mut inventory, &config, &formatter);
            let failures = commands::execute_save(&store, &inventory, &formatter);
            println!("{}", formatter.info(commands::goodbye_message(failures)));
            shell_result?;
        }
        Some(Command::List) => commands::execute_list(&inventory, &formatter)?,
        Some(Command::Archived) => commands::execute_list_archived(&inventory, &formatter)?,
        Some(Command::Fit(args)) => {
            let mut room = Room::new(args.length, args.width);
            if let Some(height) = args.height {
                room = room.with_height(height);
            }
            commands::execute_fit(&inventory, &room, &formatter)?;
        }
        Some(Command::Add(args)) => {
            commands::execute_add(
                &mut inventory,
                &args.name,
                args.length,
                args.width,
                args.height,
                &formatter,
            )?;
            commands::save_or_fail(&store, &inventory, &formatter)?;
        }
        Some(Command::Archive(args)) => {
            commands::execute_archive(&mut inventory, args.index, &formatter)?;
            commands::save_or_fail(&store, &inventory, &formatter)?;
        }
    }

    Ok(())
}

/// Explicit `--config` must load; the default location is created on first run.
fn load_config(explicit: Option<&Path>) -> roomfit_cli::Result<Config> {
    if let Some(path) = explicit {
        return Config::load_from(path);
    }

    match Config::path() {
        Ok(path) if !path.exists() => {
            let config = Config::default();
            config.save_to(&path).ok();
            Ok(config)
        }
        Ok(_) => Config::load(),
        Err(_) => Ok(Config::default()),
    }
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Initialize tracing (log to stderr)
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

fn run_shell(
    inventory: &mut Inventory,
    config: &Config,
    formatter: &Formatter,
) -> roomfit_cli::Result<()> {
    println!(
        "{}",
        formatter.info("Roomfit - choose an option by number, 6 saves and exits")
    );

    let mut input = EditorSource::new(config.settings.history_size)?;
    if let Some(path) = history_path() {
        input = input.with_history(&path);
    }

    let mut shell = Shell::new(input, formatter);
    let result = shell.run(inventory);
    shell.into_input().save_history();
    result
}

fn history_path() -> Option<PathBuf> {
    let dir = Config::dir().ok()?;
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir.join("history.txt"))
}
