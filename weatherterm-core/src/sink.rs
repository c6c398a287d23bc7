//! Report sinks: where a rendered report goes.

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use crate::error::Error;

/// Destination for rendered reports.
///
/// The scheduler emits exactly one report (or the fallback message) per
/// cycle through this seam.
pub trait ReportSink {
    fn emit(&mut self, report: &str) -> Result<(), Error>;
}

/// Writes one report line per cycle to stdout.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn emit(&mut self, report: &str) -> Result<(), Error> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{report}")?;
        Ok(())
    }
}

/// Overwrites a single file in place with the latest report.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ReportSink for FileSink {
    fn emit(&mut self, report: &str) -> Result<(), Error> {
        fs::write(&self.path, report)?;
        Ok(())
    }
}
