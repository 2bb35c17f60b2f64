//! Windows command: print each model's windows without aggregating.

use anyhow::{Context, Result, anyhow};
use tracing::info_span;

use aridity_io::{read_anchors, read_observations};
use aridity_window::{Window, anchored_windows, monthly_windows};

use crate::cli::WindowsArgs;
use crate::config::AridityConfig;
use crate::convert;

/// Print the monthly windows, then the anchored windows if configured.
pub fn run(args: WindowsArgs) -> Result<()> {
    let _cmd = info_span!("windows").entered();
    let config = AridityConfig::load(&args.config)?;
    let spi_cfg = convert::build_spi_config(&config)?;

    let input = config
        .io
        .input
        .as_ref()
        .ok_or_else(|| anyhow!("no input path: set [io].input in config"))?;
    let series = read_observations(input)
        .with_context(|| format!("failed to read observations: {}", input.display()))?;

    println!(
        "record {} .. {} ({} observations)",
        series.earliest(),
        series.latest(),
        series.len()
    );

    let monthly = monthly_windows(series.earliest(), series.latest(), spi_cfg.unit_count())?;
    print_windows("monthly", &monthly, |w| w.members(&series).len());

    if let Some(ref anchored) = config.anchored {
        let anchors = read_anchors(&anchored.anchors)
            .with_context(|| format!("failed to read anchors: {}", anchored.anchors.display()))?;
        let windows = anchored_windows(&anchors, spi_cfg.day_count(), spi_cfg.shift_days())?;
        print_windows("anchored", &windows, |w| w.members(&series).len());
    }

    Ok(())
}

fn print_windows(model: &str, windows: &[Window], members: impl Fn(&Window) -> usize) {
    println!("{model}: {} window(s)", windows.len());
    for w in windows {
        println!(
            "  {}  doy {}  members {}",
            w,
            w.doy_range(),
            members(w)
        );
    }
}
