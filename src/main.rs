//! CLI entrypoint for intake-readiness
//!
//! Wires configuration, adapters, and the interview together.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::BufReader;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use intake_readiness::adapters::{
    ConsoleInterview, LocalDocumentFileStorage, PulldownExportService, RandomAcknowledgements,
    TemplateDocumentGenerator,
};
use intake_readiness::application::{ExportReportCommand, ExportReportHandler, IntakeConversation};
use intake_readiness::cli::Cli;
use intake_readiness::config::{AppConfig, ExportConfig, LoggingConfig};
use intake_readiness::domain::intake::QuestionCatalog;
use intake_readiness::ports::GenerationOptions;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    cli.apply_to(&mut config);
    init_tracing(&cli, &config.logging);
    config.validate().context("Invalid configuration")?;

    let catalog = match QuestionCatalog::standard() {
        Ok(catalog) => Arc::new(catalog),
        Err(err) => {
            error!(code = %err.code(), error = %err, "invalid question catalog");
            return Err(err).context("Invalid question catalog");
        }
    };
    let thresholds = config.scoring.thresholds()?;
    info!(
        questions = catalog.len(),
        max_score = catalog.total_weight(),
        pursue = thresholds.pursue(),
        pending = thresholds.pending(),
        "starting intake"
    );

    let mut conversation = IntakeConversation::new(
        catalog,
        Arc::new(RandomAcknowledgements::new()),
        thresholds,
        config.summary.format,
    );

    let mut console =
        ConsoleInterview::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    console.run(&mut conversation).await?;

    if config.export.enabled {
        export(&conversation, &config.export).await?;
    }

    Ok(())
}

/// RUST_LOG wins, then `-v` flags, then configuration. Logs go to stderr.
fn init_tracing(cli: &Cli, logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(cli.verbosity_filter().unwrap_or(logging.level.as_str()))
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn export(conversation: &IntakeConversation, export: &ExportConfig) -> Result<()> {
    let mut export_service =
        PulldownExportService::new().with_pdf_timeout(export.pdf_timeout_secs);
    if let Some(path) = &export.pandoc_path {
        export_service = export_service.with_pandoc_path(path);
    }

    let handler = ExportReportHandler::new(
        Arc::new(TemplateDocumentGenerator::new()),
        Arc::new(export_service),
        Arc::new(LocalDocumentFileStorage::new(&export.output_dir)),
    );

    // The export is the consultant's copy
    let cmd = ExportReportCommand::new(conversation.report()?, export.format)
        .with_base_filename(&export.base_filename)
        .with_options(GenerationOptions::reviewer());

    match handler.handle(cmd).await {
        Ok(result) => {
            println!(
                "\nSummary exported to {} (sha256 {})",
                result.stored.path.display(),
                result.stored.checksum
            );
            Ok(())
        }
        Err(err) => {
            warn!(code = %err.code(), error = %err, "export failed");
            Err(err).context("Failed to export intake summary")
        }
    }
}
