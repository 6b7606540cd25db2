//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::ports::ExportFormat;

/// CLI arguments for intake-readiness
#[derive(Parser, Debug)]
#[command(name = "intake-readiness")]
#[command(author, version, about = "Guided immigration intake interview with readiness scoring")]
#[command(long_about = r#"
Walks a respondent through a fixed set of intake questions, scores the
answers, and prints a consultation readiness result with a consultant summary.

Settings are read from INTAKE__* environment variables (and a .env file):
  INTAKE__SCORING__PURSUE_THRESHOLD=20
  INTAKE__SUMMARY__FORMAT=lines
  INTAKE__EXPORT__ENABLED=true

Example:
  intake-readiness
  intake-readiness --export html --output-dir ./exports
"#)]
pub struct Cli {
    /// Export the summary when the interview completes (md, html, pdf, json)
    #[arg(short, long, value_name = "FORMAT", value_parser = parse_export_format)]
    pub export: Option<ExportFormat>,

    /// Directory for exported documents
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Applies flag overrides on top of loaded configuration.
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(format) = self.export {
            config.export.enabled = true;
            config.export.format = format;
        }
        if let Some(dir) = &self.output_dir {
            config.export.output_dir = dir.clone();
        }
    }

    /// Filter directive implied by `-v` flags, if any.
    pub fn verbosity_filter(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

fn parse_export_format(s: &str) -> Result<ExportFormat, String> {
    s.parse::<ExportFormat>().map_err(|e| e.to_string())
}
