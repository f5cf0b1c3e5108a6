//! Runs the sections in their fixed order.

use std::fmt;
use std::io::Write;

use clap::ValueEnum;
use tracing::{debug, info};

use crate::config::{TourConfig, APP_NAME};
use crate::console::Console;
use crate::error::Result;
use crate::{basics, events, failures, fetch, files, patterns, person, query, repository, shapes};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum Section {
    Types,
    Collections,
    Shapes,
    Generics,
    Queries,
    Async,
    Errors,
    Files,
    Patterns,
    Records,
    Events,
}

impl Section {
    pub const ALL: [Section; 11] = [
        Section::Types,
        Section::Collections,
        Section::Shapes,
        Section::Generics,
        Section::Queries,
        Section::Async,
        Section::Errors,
        Section::Files,
        Section::Patterns,
        Section::Records,
        Section::Events,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Section::Types => "types",
            Section::Collections => "collections",
            Section::Shapes => "shapes",
            Section::Generics => "generics",
            Section::Queries => "queries",
            Section::Async => "async",
            Section::Errors => "errors",
            Section::Files => "files",
            Section::Patterns => "patterns",
            Section::Records => "records",
            Section::Events => "events",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a tour run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TourReport {
    pub sections_run: usize,
}

/// Runs `selected` in canonical order, or every section when empty.
/// Duplicates run once.
pub async fn run<W: Write>(
    console: &mut Console<W>,
    config: &TourConfig,
    selected: &[Section],
) -> Result<TourReport> {
    let mut report = TourReport::default();

    console.banner(APP_NAME)?;
    console.blank()?;

    for section in Section::ALL {
        if !selected.is_empty() && !selected.contains(&section) {
            continue;
        }
        debug!(%section, "section started");
        run_section(console, config, section).await?;
        report.sections_run += 1;
    }

    console.banner(&format!("{APP_NAME} Completed"))?;
    console.flush()?;
    info!(sections = report.sections_run, "tour finished");
    Ok(report)
}

async fn run_section<W: Write>(
    console: &mut Console<W>,
    config: &TourConfig,
    section: Section,
) -> Result<()> {
    match section {
        Section::Types => basics::demo_types(console),
        Section::Collections => basics::demo_collections(console),
        Section::Shapes => shapes::demo(console),
        Section::Generics => repository::demo(console),
        Section::Queries => query::demo(console),
        Section::Async => {
            let delays = config.timing.task_delays();
            fetch::demo(console, config.timing.fetch_delay(), &delays).await
        }
        Section::Errors => failures::demo(console),
        Section::Files => files::demo(console, &config.files),
        Section::Patterns => patterns::demo(console),
        Section::Records => person::demo(console),
        Section::Events => events::demo(console),
    }
}
