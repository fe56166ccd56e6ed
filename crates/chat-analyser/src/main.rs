mod bootstrap;
mod report;

use anyhow::{Context, Result};
use transcript_core::settings::{OutputFormat, Settings};
use transcript_data::analysis::analyze_transcript;

use crate::report::Report;

fn main() -> Result<()> {
    let settings = Settings::load()?;

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_deref())
        .context("failed to initialise logging")?;

    tracing::info!("chat-analyser v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!(
        "Input: {}, reference: {:?}, range: {:?}..={:?}",
        settings.input.display(),
        settings.reference,
        settings.start,
        settings.end
    );

    let analysis = analyze_transcript(&settings.input, settings.reference.as_deref())?;

    let report = Report::build(
        &settings.input.display().to_string(),
        &analysis,
        settings.top_words,
        settings.start,
        settings.end,
    );

    match settings.format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
