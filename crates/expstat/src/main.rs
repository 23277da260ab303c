mod bootstrap;

use anyhow::Result;
use clap::Parser;
use expstat_core::settings::Settings;
use expstat_data::pipeline::ExperimentStatistics;

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("expstat v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Root: {}, markers: {}, output: {}",
        settings.root.display(),
        settings.markers.len(),
        settings.output.display()
    );

    let markers = settings.marker_set()?;
    let pipeline = ExperimentStatistics::new(settings.root, markers, settings.output);

    let outcome = pipeline.write_statistics()?;

    tracing::info!(
        "Done: {} files scanned, {} report blocks written",
        outcome.files_scanned,
        outcome.blocks_written
    );

    Ok(())
}
