//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use crate::config::*;

use aridity_baseline::Strictness;
use aridity_io::{Compression, WriterConfig};
use aridity_raster::Extent;
use aridity_spi::SpiConfig;

/// Parses a compression algorithm name string into the corresponding enum variant.
pub fn parse_compression(s: &str) -> Result<Compression> {
    match s.to_lowercase().as_str() {
        "none" => Ok(Compression::None),
        "snappy" => Ok(Compression::Snappy),
        "zstd" => Ok(Compression::Zstd),
        other => bail!("unknown compression: {other:?}"),
    }
}

/// Parses a strictness name string into the corresponding enum variant.
pub fn parse_strictness(s: &str) -> Result<Strictness> {
    match s.to_lowercase().as_str() {
        "lenient" => Ok(Strictness::Lenient),
        "strict" => Ok(Strictness::Strict),
        other => bail!("unknown strictness: {other:?}"),
    }
}

/// Builds an [`Extent`] from the TOML extent section.
pub fn build_extent(extent: &ExtentToml) -> Result<Extent> {
    Ok(Extent::new(extent.row, extent.col, extent.rows, extent.cols)?)
}

/// Builds a validated [`SpiConfig`] from the TOML sections.
///
/// Anchored settings fall back to library defaults when the model is not
/// configured.
pub fn build_spi_config(config: &AridityConfig) -> Result<SpiConfig> {
    let mut cfg = SpiConfig::new()
        .with_unit_count(config.spi.unit_count)
        .with_strictness(parse_strictness(&config.spi.strictness)?)
        .with_min_group_size(config.spi.min_group_size);
    if let Some(ref anchored) = config.anchored {
        cfg = cfg
            .with_day_count(anchored.day_count)
            .with_shift_days(anchored.shift_days);
    }
    if let Some(ref extent) = config.extent {
        cfg = cfg.with_extent(build_extent(extent)?);
    }
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a [`WriterConfig`] from the TOML I/O configuration.
pub fn build_writer_config(io: &IoConfig) -> Result<WriterConfig> {
    let compression = parse_compression(&io.compression)?;
    let cfg = WriterConfig::default()
        .with_compression(compression)
        .with_row_group_size(io.row_group_size);
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> AridityConfig {
        toml::from_str(s).unwrap()
    }

    #[test]
    fn compression_names() {
        assert_eq!(parse_compression("ZSTD").unwrap(), Compression::Zstd);
        assert_eq!(parse_compression("none").unwrap(), Compression::None);
        assert!(parse_compression("gzip").is_err());
    }

    #[test]
    fn strictness_names() {
        assert_eq!(parse_strictness("Strict").unwrap(), Strictness::Strict);
        assert!(parse_strictness("loose").is_err());
    }

    #[test]
    fn spi_config_from_sections() {
        let cfg = build_spi_config(&parse(
            "[spi]\nunit_count = 6\n[anchored]\nanchors = \"a.parquet\"\nday_count = 8\nshift_days = -2\n[extent]\nrow = 0\ncol = 1\nrows = 2\ncols = 3\n",
        ))
        .unwrap();
        assert_eq!(cfg.unit_count(), 6);
        assert_eq!(cfg.day_count(), 8);
        assert_eq!(cfg.shift_days(), -2);
        assert_eq!(cfg.extent().map(|e| e.cols()), Some(3));
    }

    #[test]
    fn invalid_unit_count_rejected() {
        let err = build_spi_config(&parse("[spi]\nunit_count = 18\n")).unwrap_err();
        assert!(err.to_string().contains("invalid unit count"));
    }

    #[test]
    fn empty_extent_rejected() {
        let toml = "[extent]\nrow = 0\ncol = 0\nrows = 0\ncols = 4\n";
        assert!(build_spi_config(&parse(toml)).is_err());
    }

    #[test]
    fn writer_config_from_io() {
        let cfg = build_writer_config(&parse("[io]\ncompression = \"zstd\"\nrow_group_size = 10\n").io)
            .unwrap();
        assert_eq!(cfg.compression(), Compression::Zstd);
        assert_eq!(cfg.row_group_size(), 10);
        assert!(build_writer_config(&parse("[io]\nrow_group_size = 0\n").io).is_err());
    }
}
