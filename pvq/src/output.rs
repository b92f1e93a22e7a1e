//! Rendering filtered records as a table, JSON or bare names.

use std::io::Write;

use pvsel::{Container, Disk, VirtualMachine, Volume};
use serde::Serialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Names,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "names" | "name" => Ok(OutputFormat::Names),
            other => Err(Error::Format(other.to_string())),
        }
    }
}

/// Column layout for a record type.
pub trait Tabular: Serialize {
    const HEADERS: &'static [&'static str];

    fn row(&self) -> Vec<String>;

    /// Identifier printed by `-o names`.
    fn label(&self) -> String;
}

fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

fn yes_no(flag: bool) -> String {
    (if flag { "yes" } else { "no" }).to_string()
}

impl Tabular for VirtualMachine {
    const HEADERS: &'static [&'static str] = &["VMID", "NAME", "STATUS", "NODE", "POOL", "TAGS", "TEMPLATE"];

    fn row(&self) -> Vec<String> {
        vec![
            self.vmid.to_string(),
            opt(&self.name),
            opt(&self.status),
            opt(&self.node),
            opt(&self.pool),
            opt(&self.tags),
            yes_no(self.template),
        ]
    }

    fn label(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.vmid.to_string())
    }
}

impl Tabular for Container {
    const HEADERS: &'static [&'static str] = &["VMID", "NAME", "STATUS", "NODE", "POOL", "TAGS"];

    fn row(&self) -> Vec<String> {
        vec![
            self.vmid.to_string(),
            opt(&self.name),
            opt(&self.status),
            opt(&self.node),
            opt(&self.pool),
            opt(&self.tags),
        ]
    }

    fn label(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.vmid.to_string())
    }
}

impl Tabular for Disk {
    const HEADERS: &'static [&'static str] = &["DEVPATH", "TYPE", "HEALTH", "USED", "NODE", "GPT", "MOUNTED"];

    fn row(&self) -> Vec<String> {
        vec![
            self.devpath.clone(),
            opt(&self.disk_type),
            opt(&self.health),
            opt(&self.used),
            opt(&self.node),
            yes_no(self.gpt),
            yes_no(self.mounted),
        ]
    }

    fn label(&self) -> String {
        self.devpath.clone()
    }
}

impl Tabular for Volume {
    const HEADERS: &'static [&'static str] = &["VOLID", "FORMAT", "STORAGE", "NODE", "CONTENT", "TYPE"];

    fn row(&self) -> Vec<String> {
        vec![
            self.volid.clone(),
            opt(&self.format),
            opt(&self.storage),
            opt(&self.node),
            opt(&self.content),
            opt(&self.resource_type),
        ]
    }

    fn label(&self) -> String {
        self.display_name().to_string()
    }
}

/// Write records in the requested format.
pub fn render<R: Tabular>(out: &mut impl Write, format: OutputFormat, records: &[&R]) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        }
        OutputFormat::Names => {
            for record in records {
                writeln!(out, "{}", record.label())?;
            }
        }
        OutputFormat::Table => write_table(out, R::HEADERS, records.iter().map(|r| r.row()))?,
    }
    Ok(())
}

/// Left-aligned columns sized to their widest cell; the last column is not padded.
fn write_table(
    out: &mut impl Write,
    headers: &[&str],
    rows: impl Iterator<Item = Vec<String>>,
) -> std::io::Result<()> {
    let rows: Vec<Vec<String>> = rows.collect();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header_row: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    for row in std::iter::once(&header_row).chain(&rows) {
        let mut line = String::new();
        for (i, (cell, width)) in row.iter().zip(&widths).enumerate() {
            if i + 1 == row.len() {
                line.push_str(cell);
            } else {
                line.push_str(&format!("{:<width$}  ", cell, width = width));
            }
        }
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
