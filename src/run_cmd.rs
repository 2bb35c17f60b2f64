//! Run command: compute SPI for every configured model and write the results.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use aridity_io::{read_anchors, read_observations, write_spi};
use aridity_spi::{RunSummary, compute_anchored_spi, compute_monthly_spi, to_json};

use crate::cli::RunArgs;
use crate::config::AridityConfig;
use crate::convert;

/// Run the SPI pipeline.
pub fn run(args: RunArgs) -> Result<()> {
    let _cmd = info_span!("run").entered();
    let mut config = AridityConfig::load(&args.config)?;

    // CLI overrides
    if let Some(n) = args.unit_count {
        config.spi.unit_count = n;
    }
    if let Some(shift) = args.shift_days {
        let anchored = config
            .anchored
            .as_mut()
            .ok_or_else(|| anyhow!("--shift-days needs an [anchored] section in the config"))?;
        anchored.shift_days = shift;
    }

    let input = config
        .io
        .input
        .as_ref()
        .ok_or_else(|| anyhow!("no input path: set [io].input in config"))?;
    let output: PathBuf = args
        .output
        .or_else(|| config.io.output.clone())
        .ok_or_else(|| anyhow!("no output path: set [io].output in config or use --output"))?;

    let spi_cfg = convert::build_spi_config(&config)?;
    let writer_cfg = convert::build_writer_config(&config.io)?;

    info!(path = %input.display(), "reading observation feed");
    let series = read_observations(input)
        .with_context(|| format!("failed to read observations: {}", input.display()))?;

    let mut runs = vec![
        compute_monthly_spi(&series, &spi_cfg).context("monthly SPI failed")?,
    ];

    if let Some(ref anchored) = config.anchored {
        let anchors = read_anchors(&anchored.anchors)
            .with_context(|| format!("failed to read anchors: {}", anchored.anchors.display()))?;
        runs.push(
            compute_anchored_spi(&series, &anchors, &spi_cfg).context("anchored SPI failed")?,
        );
    }

    for run in &runs {
        info!(
            model = %run.model(),
            n_results = run.results().len(),
            dropped = run.dropped(),
            low_confidence_groups = run.low_confidence_groups(),
            "model complete"
        );
    }

    write_spi(&output, &runs, &writer_cfg)
        .with_context(|| format!("failed to write Parquet: {}", output.display()))?;
    info!(path = %output.display(), "SPI results written");

    if let Some(ref summary_path) = config.io.summary {
        let summaries: Vec<RunSummary> = runs.iter().map(RunSummary::from_run).collect();
        let json = to_json(&summaries)?;
        std::fs::write(summary_path, json)
            .with_context(|| format!("failed to write summary: {}", summary_path.display()))?;
        info!(path = %summary_path.display(), "run summary written");
    }

    Ok(())
}
