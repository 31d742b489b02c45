use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use comparo_core::ContentKind;
use comparo_feed::{ApiKeySource, FeedSource, api_key_source, config_path};

use super::load_config;
use crate::error::CliError;

fn mask_value(s: &str) -> String {
    if s.chars().count() <= 2 {
        "****".to_string()
    } else {
        format!("{}****", s.chars().take(2).collect::<String>())
    }
}

fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(config_path)
}

fn print_sources(section: &str, sources: &[FeedSource]) {
    println!("  [{}]", section.if_supports_color(Stdout, |t| t.bold()));
    if sources.is_empty() {
        println!("    {}", "(no sources)".if_supports_color(Stdout, |t| t.dimmed()));
        return;
    }
    for (i, source) in sources.iter().enumerate() {
        let auth = if source.auth { " auth" } else { "" };
        println!(
            "    {}. {} {}",
            i + 1,
            source.url.if_supports_color(Stdout, |t| t.cyan()),
            format!("({:?}{})", source.format, auth).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}

/// Show the configured sources and where the API key comes from.
pub(crate) fn run_config_show(explicit: Option<&Path>) -> Result<(), CliError> {
    let path = resolve_path(explicit);

    println!(
        "{}",
        "Feed Configuration".if_supports_color(Stdout, |t| t.bold())
    );
    println!();

    match &path {
        Some(p) if p.exists() => println!(
            "  Config file: {} {}",
            p.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        ),
        Some(p) => println!(
            "  Config file: {} {}",
            p.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        ),
        None => println!(
            "  Config file: {}",
            "could not determine path".if_supports_color(Stdout, |t| t.red()),
        ),
    }

    let config = load_config(explicit)?;
    let key_source = api_key_source(path.as_deref());
    let key = match (&key_source, &config.api_key) {
        (ApiKeySource::Missing, _) | (_, None) => "-".to_string(),
        (_, Some(k)) => mask_value(k),
    };
    println!(
        "  API key:     {} {}",
        key,
        format!("({})", key_source).if_supports_color(Stdout, |t| t.dimmed()),
    );
    println!("  Key header:  {}", config.api_key_header);
    println!("  Timeout:     {}s", config.timeout_secs);
    println!("  User agent:  {}", config.user_agent);
    println!("  Headers:     {:?}", config.header_normalization);
    println!();

    for &kind in ContentKind::all() {
        print_sources(kind.short_name(), config.sources(kind));
    }
    print_sources("offers", config.offer_sources());
    Ok(())
}

/// Print the config file path.
pub(crate) fn run_config_path(explicit: Option<&Path>) -> Result<(), CliError> {
    match resolve_path(explicit) {
        Some(p) => println!("{}", p.display()),
        None => log::warn!("Could not determine config directory"),
    }
    Ok(())
}
