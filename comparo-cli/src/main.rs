//! comparo CLI
//!
//! Diagnostics for the content and offer feeds: list what the site would
//! render, look up a slug, or run the pipeline against a local export.

mod cli_types;
mod commands;
mod error;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use cli_types::{Cli, Commands, ConfigAction};
use commands::config::{run_config_path, run_config_show};
use commands::content::{run_content, run_find};
use commands::offers::run_offers;
use commands::parse::run_parse;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Content {
            kind,
            all,
            newest_first,
        } => run_content(config, kind, all, newest_first),
        Commands::Offers { all, slug } => run_offers(config, all, slug.as_deref()),
        Commands::Find { slug } => run_find(config, &slug),
        Commands::Parse {
            file,
            offers,
            kind,
            format,
            all,
        } => run_parse(&file, offers, kind, format, all),
        Commands::Config { action } => match action {
            ConfigAction::Show => run_config_show(config),
            ConfigAction::Path => run_config_path(config),
        },
    };

    if let Err(e) = result {
        eprintln!(
            "{} {}",
            "error:".if_supports_color(Stderr, |t| t.red()),
            e,
        );
        std::process::exit(1);
    }
}

/// Install the logger. `RUST_LOG` still wins over the flags.
fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level));
    if !verbose {
        builder.format_timestamp(None).format_target(false);
    }
    builder.init();
}
