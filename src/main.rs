use std::path::Path;

use clap::Parser;

use aptlog::cli::{Cli, ColorChoice, Commands, InfoArgs, ListArgs};
use aptlog::config::{Config, ConfigLoader, FileConfigLoader};
use aptlog::history::HistoryBuffer;
use aptlog::output::{ColorMode, DetailFormatter, TableFormatter};
use aptlog::{EXIT_CONFIG_ERROR, EXIT_INVALID_ID, EXIT_SUCCESS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::List(args) => run_list(args, &cli),
        Commands::Info(args) => run_info(args, &cli),
    };

    std::process::exit(exit_code);
}

fn run_list(args: &ListArgs, cli: &Cli) -> i32 {
    match run_list_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_list_impl(args: &ListArgs, cli: &Cli) -> aptlog::Result<()> {
    let buf = load_buffer(cli)?;

    let output = TableFormatter::with_column_width(args.width).format(&buf);
    if !cli.quiet {
        print!("{output}");
    }

    Ok(())
}

fn run_info(args: &InfoArgs, cli: &Cli) -> i32 {
    match run_info_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_info_impl(args: &InfoArgs, cli: &Cli) -> aptlog::Result<i32> {
    let buf = load_buffer(cli)?;

    let Some(entry) = buf.get(args.id) else {
        let noun = if buf.len() == 1 { "entry" } else { "entries" };
        println!(
            "Invalid transaction ID: {}, when history has {} {noun}!",
            args.id,
            buf.len()
        );
        return Ok(EXIT_INVALID_ID);
    };

    let formatter = DetailFormatter::new(color_choice_to_mode(cli.color));
    if !cli.quiet {
        print!("{}", formatter.format(entry, args.id));
    }

    Ok(EXIT_SUCCESS)
}

fn load_buffer(cli: &Cli) -> aptlog::Result<HistoryBuffer> {
    // 1. Load configuration
    let config = load_config(cli.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI override for the log path
    let log_path = cli
        .log_path
        .clone()
        .unwrap_or(config.history.log_path);

    // 3. Discover and parse the log files
    HistoryBuffer::load_dir(&log_path)
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> aptlog::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}
