// Campus Directory Search - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/campus-search
// ```
//
// Or with a one-shot query:
//
// ```console
// $ ./target/release/campus-search --query 1ごうかん --output-format json
// ```

use anyhow::{Context, Result};
use campus_directory_search::directory::Directory;
use campus_directory_search::search::Selection;
use campus_directory_search::session::{Command, LoggingConfig, Session, HELP};
use campus_directory_search::types::config::CliArgs;
use campus_directory_search::types::{OutputFormat, SearchConfig};
use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    if args.print_config {
        match SearchConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let config = match SearchConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let mut logging = LoggingConfig::from_search_config(&config, args.verbose, args.debug);
    if !io::stderr().is_terminal() {
        logging = logging.without_ansi();
    }
    let _log_guard = match logging.init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(&args, &config) {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: &CliArgs, config: &SearchConfig) -> Result<()> {
    config.validate().context("Configuration validation failed")?;
    let output_format = config.get_output_format()?;

    let directory = load_directory(config)?;
    info!(
        facilities = directory.facility_count(),
        rooms = directory.room_count(),
        "Directory ready"
    );

    if args.print_directory {
        println!("{}", directory.to_json()?);
        return Ok(());
    }

    if args.dry_run {
        print_summary(config, &directory);
        eprintln!("Dry run mode - configuration and directory are valid.");
        return Ok(());
    }

    let mut session = Session::new(&directory)
        .with_output_format(output_format)
        .with_max_display(config.max_display);
    let stdout = io::stdout();

    if let Some(query) = &args.query {
        let selection = run_query(&mut session, query, args.enter)?;
        let mut out = stdout.lock();
        session.render(&mut out)?;
        out.flush()?;
        info!(%selection, "One-shot query finished");
        return Ok(());
    }

    if output_format == OutputFormat::Text {
        eprintln!("{}", HELP);
    }
    let stdin = io::stdin();
    session.run(stdin.lock(), stdout.lock()).context("Session failed")?;
    Ok(())
}

fn load_directory(config: &SearchConfig) -> Result<Directory> {
    match &config.data_file {
        Some(path) => Directory::from_file(path)
            .with_context(|| format!("Failed to load directory from {}", path)),
        None => {
            let directory = Directory::builtin();
            directory.validate().context("Built-in directory is invalid")?;
            Ok(directory)
        }
    }
}

fn run_query(session: &mut Session<'_>, query: &str, enter: bool) -> Result<Selection> {
    session.handle(&Command::Input(query.to_string()))?;
    if enter {
        session.handle(&Command::Enter)?;
    }
    Ok(session.selection())
}

fn print_summary(config: &SearchConfig, directory: &Directory) {
    eprintln!("Configuration:");
    eprintln!("  Max Display: {}", config.max_display);
    eprintln!("  Output Format: {}", config.output_format);
    match &config.data_file {
        Some(path) => eprintln!("  Directory: {}", path),
        None => eprintln!("  Directory: built-in"),
    }
    eprintln!("  Log Format: {}", if config.log_json { "json" } else { "plain" });
    if let Some(filter) = &config.log_filter {
        eprintln!("  Log Filter: {}", filter);
    }
    eprintln!("\nDirectory:");
    eprintln!("  Facilities: {}", directory.facility_count());
    eprintln!("  Rooms: {}", directory.room_count());
    for (kind, group) in directory.grouped_by_kind() {
        eprintln!("    {}: {}", kind, group.len());
    }
    eprintln!();
}
