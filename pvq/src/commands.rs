//! CLI command implementations.

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use pvsel::{
    Container, Disk, FieldResolver, ResourceKind, Selector, VirtualMachine, Volume,
};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{self, OutputFormat, Tabular};

/// Options for the listing commands (`vm`, `ct`, `disk`, `volume`).
#[derive(Debug, Default)]
pub struct ListOptions {
    /// Record dump to read; stdin when `None`.
    pub file: Option<PathBuf>,
    /// Selector strings from repeated `-l` flags.
    pub selectors: Vec<String>,
    /// Output format override.
    pub output: Option<String>,
}

/// Filter a record dump of one resource kind and print the matches.
pub fn list(config: &Config, kind: ResourceKind, opts: &ListOptions) -> Result<()> {
    let format = OutputFormat::parse(opts.output.as_deref().unwrap_or(&config.output))?;

    // Config defaults first, then the command line, all ANDed
    let selector = config
        .default_selector(kind)?
        .and(&Selector::parse_all(&opts.selectors)?);
    tracing::debug!(%kind, %selector, "listing resources");

    match kind {
        ResourceKind::VirtualMachine => list_records::<VirtualMachine>(&selector, opts, format),
        ResourceKind::Container => list_records::<Container>(&selector, opts, format),
        ResourceKind::Disk => list_records::<Disk>(&selector, opts, format),
        ResourceKind::Volume => list_records::<Volume>(&selector, opts, format),
    }
}

fn list_records<R>(selector: &Selector, opts: &ListOptions, format: OutputFormat) -> Result<()>
where
    R: FieldResolver + Tabular + DeserializeOwned,
{
    let filter = selector.filter::<R>();
    // Report bad fields before waiting on stdin
    filter.validate()?;

    let records: Vec<R> = read_records(opts.file.as_deref())?;
    let selected = filter.apply(&records)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::render(&mut out, format, &selected)?;
    out.flush()?;
    Ok(())
}

/// Read a JSON array of records from a file, or stdin when no path is given.
fn read_records<R: DeserializeOwned>(path: Option<&Path>) -> Result<Vec<R>> {
    let (reader, source_name): (Box<dyn Read>, String) = match path {
        Some(path) => (
            Box::new(BufReader::new(File::open(path)?)),
            path.display().to_string(),
        ),
        None => (Box::new(io::stdin().lock()), "stdin".to_string()),
    };

    let records: Vec<R> = serde_json::from_reader(reader)
        .map_err(|error| Error::Records { source_name, error })?;
    tracing::debug!(count = records.len(), "read records");
    Ok(records)
}

/// Print the selector fields a resource kind supports.
pub fn fields(kind: ResourceKind) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "# {}", kind)?;
    for field in kind.fields() {
        writeln!(out, "{}", field)?;
    }
    Ok(())
}

/// Parse selectors and print their canonical form, one condition per line.
pub fn check(selectors: &[String]) -> Result<()> {
    let selector = Selector::parse_all(selectors)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if selector.is_empty() {
        writeln!(out, "(empty selector: matches everything)")?;
        return Ok(());
    }

    for condition in selector.conditions() {
        writeln!(out, "{}", condition)?;
    }
    Ok(())
}
