//! Shared CLI utilities for the stone-lut binary.

use std::path::{Path, PathBuf};

use crate::table::TableShape;

/// Output file used when neither `--output` nor `STONE_LUT_OUTPUT` is given.
pub const DEFAULT_OUTPUT: &str = "day11_lut.bin";

/// Environment variable consulted for the output path.
pub const OUTPUT_ENV: &str = "STONE_LUT_OUTPUT";

/// Initialize tracing/logging to stderr.
///
/// If `disable` is true, no output is produced.
/// Otherwise respects `RUST_LOG` env var, defaulting to WARN.
pub fn init_logging(disable: bool) {
    use tracing_subscriber::EnvFilter;

    if disable {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Pick the output path: explicit flag, then `STONE_LUT_OUTPUT`, then the default.
pub fn resolve_output(flag: Option<&Path>) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    match std::env::var_os(OUTPUT_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_OUTPUT),
    }
}

/// Build a table shape from CLI dimensions, rejecting empty tables.
pub fn resolve_shape(values: usize, depths: usize) -> Result<TableShape, String> {
    if values == 0 || depths == 0 {
        return Err(format!(
            "Table must have at least one value and one depth (got values={}, depths={})",
            values, depths
        ));
    }
    Ok(TableShape::new(values, depths))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_output_flag_wins() {
        let path = resolve_output(Some(Path::new("/tmp/custom.bin")));
        assert_eq!(path, PathBuf::from("/tmp/custom.bin"));
    }

    #[test]
    fn test_resolve_output_env_then_default() {
        let original = std::env::var_os(OUTPUT_ENV);

        std::env::set_var(OUTPUT_ENV, "/tmp/from_env.bin");
        assert_eq!(resolve_output(None), PathBuf::from("/tmp/from_env.bin"));

        std::env::remove_var(OUTPUT_ENV);
        assert_eq!(resolve_output(None), PathBuf::from(DEFAULT_OUTPUT));

        std::env::set_var(OUTPUT_ENV, "");
        assert_eq!(resolve_output(None), PathBuf::from(DEFAULT_OUTPUT));

        match original {
            Some(v) => std::env::set_var(OUTPUT_ENV, v),
            None => std::env::remove_var(OUTPUT_ENV),
        }
    }

    #[test]
    fn test_resolve_shape() {
        assert_eq!(resolve_shape(1000, 76).unwrap(), TableShape::DEFAULT);
        assert!(resolve_shape(0, 76).is_err());
        let err = resolve_shape(10, 0).unwrap_err();
        assert!(err.contains("at least one"), "Error: {}", err);
    }

    #[test]
    fn test_init_logging_disabled_does_not_panic() {
        // Just smoke-test: calling with disable=true should not panic
        init_logging(true);
    }
}
