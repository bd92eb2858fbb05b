//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including data directory resolution, configuration loading, database
//! management, prompting, and output formatting.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use inn::config::OutputFormat;
use inn::database::DATABASE_FILE_NAME;
use inn::{Config, ConfigBuilder, Database, DatabaseConfig};
use serde::Serialize;

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the busy timeout (in seconds).
    pub busy_timeout: Option<u64>,
}

/// Resolve the data directory: `--data-dir`, then `INN_DATA_DIR`, then `~/.inn`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    if let Some(ref data_dir) = global.data_dir {
        return Ok(data_dir.clone());
    }
    inn::database::resolve_data_dir().map_err(|e| CliError::Config(e.to_string()))
}

/// Load layered configuration with the data directory's `config.yaml`.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. `<data dir>/config.yaml`
/// 3. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global)?;

    ConfigBuilder::new()
        .with_data_dir(data_dir)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open the ledger.
///
/// Only `create` callers may bring a new database into existence; every
/// other command fails with `NoDataDirectory` when the file is missing.
pub fn open_database(
    global: &GlobalOptions,
    config: &Config,
    create: bool,
) -> Result<Database, CliError> {
    let db_path = resolve_data_dir(global)?.join(DATABASE_FILE_NAME);

    // --busy-timeout beats the configured lock wait
    let timeout = global
        .busy_timeout
        .map_or_else(|| config.lock_wait(), Duration::from_secs);

    let db_config = DatabaseConfig::new(db_path)
        .with_busy_timeout(timeout)
        .with_auto_create(create);

    Database::open(db_config).map_err(CliError::from)
}

/// Today in local time.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Pick the output format: the command's flag, then configuration, then table.
pub fn output_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.or(config.output_format).unwrap_or_default()
}

/// A tabular result that can be written in any [`OutputFormat`].
pub struct Tabular<'a, T: Serialize> {
    /// Column headers, lowercase.
    pub headers: &'a [&'a str],
    /// One entry per row, in header order.
    pub rows: Vec<Vec<String>>,
    /// What JSON output serializes.
    pub records: &'a [T],
}

impl<T: Serialize> Tabular<'_, T> {
    /// Write to stdout in `format`.
    pub fn print(&self, format: OutputFormat) -> Result<(), CliError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write(format, &mut handle)
    }

    fn write<W: Write>(&self, format: OutputFormat, out: &mut W) -> Result<(), CliError> {
        match format {
            OutputFormat::Table => {
                let header_line = self
                    .headers
                    .iter()
                    .map(|s| s.to_uppercase())
                    .collect::<Vec<_>>()
                    .join("\t");
                writeln!(out, "{header_line}")?;
                for row in &self.rows {
                    writeln!(out, "{}", row.join("\t"))?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self.records)?;
                writeln!(out)?;
            }
            OutputFormat::Csv => self.write_delimited(b',', out)?,
            OutputFormat::Tsv => self.write_delimited(b'\t', out)?,
        }
        Ok(())
    }

    fn write_delimited<W: Write>(&self, delimiter: u8, out: &mut W) -> Result<(), CliError> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(out);
        writer.write_record(self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Print `message` to stderr and read one trimmed line from stdin.
///
/// Returns `None` at end of input.
pub fn prompt(message: &str) -> io::Result<Option<String>> {
    eprint!("{message}");
    io::stderr().flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tabular<'static, (&'static str, u32)> {
        Tabular {
            headers: &["room", "beds"],
            rows: vec![
                vec!["A1".into(), "1".into()],
                vec!["B, 2".into(), "2".into()],
            ],
            records: &[("A1", 1), ("B, 2", 2)],
        }
    }

    fn render(format: OutputFormat) -> String {
        let mut out = Vec::new();
        sample().write(format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_table_has_uppercase_headers() {
        assert_eq!(render(OutputFormat::Table), "ROOM\tBEDS\nA1\t1\nB, 2\t2\n");
    }

    #[test]
    fn test_csv_quotes_embedded_delimiters() {
        assert_eq!(render(OutputFormat::Csv), "room,beds\nA1,1\n\"B, 2\",2\n");
    }

    #[test]
    fn test_tsv_uses_tabs() {
        assert_eq!(render(OutputFormat::Tsv), "room\tbeds\nA1\t1\nB, 2\t2\n");
    }

    #[test]
    fn test_json_serializes_records() {
        let parsed: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        assert_eq!(parsed[1][0], "B, 2");
    }

    #[test]
    fn test_flag_beats_configuration() {
        let config = Config {
            output_format: Some(OutputFormat::Csv),
            ..Default::default()
        };
        assert_eq!(output_format(Some(OutputFormat::Json), &config), OutputFormat::Json);
        assert_eq!(output_format(None, &config), OutputFormat::Csv);
        assert_eq!(output_format(None, &Config::default()), OutputFormat::Table);
    }
}
