use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Sets up stderr logging. `METRO_PATHS_LOG` (or `RUST_LOG`) overrides the CLI flags.
pub fn init_tracing(verbose: bool, log_level: Option<&str>) -> Result<()> {
    let level = filter_directive(verbose, log_level);
    let filter = EnvFilter::try_from_env("METRO_PATHS_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}

fn filter_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("metro_paths={level}"),
        (true, None) => "metro_paths=debug".to_string(),
        (false, None) => "metro_paths=warn".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(false, None), "metro_paths=warn");
        assert_eq!(filter_directive(true, None), "metro_paths=debug");
        assert_eq!(filter_directive(true, Some("trace")), "metro_paths=trace");
        assert_eq!(
            filter_directive(false, Some("info,metro_paths=trace")),
            "info,metro_paths=trace"
        );
    }
}
