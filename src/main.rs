use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use language_tour::{Console, Section, TourConfig};

/// Walks through a fixed tour of Rust language and library features.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// TOML file overriding the tour's literals
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run only this section (repeatable)
    #[arg(long = "section", value_enum, value_name = "NAME")]
    sections: Vec<Section>,

    /// List section names and exit
    #[arg(long)]
    list: bool,

    /// Disable colored headers
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    /// `--no-color` wins over `output.color` in the config file.
    fn effective_color(&self, config: &TourConfig) -> bool {
        config.output.color && !self.no_color
    }
}

fn write_section_list<W: Write>(out: &mut W) -> io::Result<()> {
    for section in Section::value_variants() {
        writeln!(out, "{section}")?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.list {
        write_section_list(&mut io::stdout().lock()).context("Failed to list sections")?;
        return Ok(());
    }

    let config = TourConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load tour configuration")?;
    let color = cli.effective_color(&config);

    let mut console = Console::stdout(color);
    language_tour::run(&mut console, &config, &cli.sections)
        .await
        .context("Tour aborted")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_color(color: bool) -> TourConfig {
        let mut config = TourConfig::default();
        config.output.color = color;
        config
    }

    #[test]
    fn test_no_color_overrides_config() {
        let cli = Cli::try_parse_from(["language-tour", "--no-color"]).unwrap();
        assert!(cli.no_color);
        assert!(!cli.effective_color(&config_with_color(true)));
        assert!(!cli.effective_color(&config_with_color(false)));
    }

    #[test]
    fn test_color_follows_config_without_flag() {
        let cli = Cli::try_parse_from(["language-tour"]).unwrap();
        assert!(cli.effective_color(&config_with_color(true)));
        assert!(!cli.effective_color(&config_with_color(false)));
    }

    #[test]
    fn test_list_flag_and_output() {
        let cli = Cli::try_parse_from(["language-tour", "--list"]).unwrap();
        assert!(cli.list);

        let mut out = Vec::new();
        write_section_list(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "types\ncollections\nshapes\ngenerics\nqueries\nasync\nerrors\nfiles\npatterns\nrecords\nevents\n"
        );
    }

    #[test]
    fn test_repeated_section_and_config_path() {
        let cli = Cli::try_parse_from([
            "language-tour",
            "--section",
            "queries",
            "--section",
            "records",
            "--config",
            "tour.toml",
        ])
        .unwrap();
        assert_eq!(cli.sections, vec![Section::Queries, Section::Records]);
        assert_eq!(cli.config, Some(PathBuf::from("tour.toml")));
        assert!(!cli.list);
    }

    #[test]
    fn test_unknown_section_rejected() {
        let result = Cli::try_parse_from(["language-tour", "--section", "lambdas"]);
        assert!(result.is_err());
    }
}
