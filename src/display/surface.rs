use std::io::Write;
use std::sync::Mutex;

use clap::ValueEnum;
use serde::Deserialize;

use crate::display::{DisplayError, ScriptSurface};

/// Which built-in surface the binary hands to the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceKind {
    /// Record each script in the log only
    #[default]
    Log,
    /// Write each script as one line on stdout, for a window host reading the pipe
    Stdout,
}

/// Surface that only traces the scripts it is asked to run.
#[derive(Debug, Default)]
pub struct LogSurface;

impl ScriptSurface for LogSurface {
    fn exec_js(&self, script: &str) -> Result<(), DisplayError> {
        tracing::info!(script, "display script");
        Ok(())
    }
}

/// Line-oriented script stream over any writer (stdout in the binary).
/// The mutex keeps lines whole if two writers ever race.
pub struct StdoutSurface<W: Write + Send = std::io::Stdout> {
    out: Mutex<W>,
}

impl StdoutSurface {
    pub fn new() -> Self {
        StdoutSurface::with_writer(std::io::stdout())
    }
}

impl Default for StdoutSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> StdoutSurface<W> {
    pub fn with_writer(out: W) -> Self {
        StdoutSurface { out: Mutex::new(out) }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> ScriptSurface for StdoutSurface<W> {
    fn exec_js(&self, script: &str) -> Result<(), DisplayError> {
        let mut out = self.out.lock().map_err(|_| DisplayError::NotReady)?;
        writeln!(out, "{script}")?;
        out.flush()?;
        Ok(())
    }
}
