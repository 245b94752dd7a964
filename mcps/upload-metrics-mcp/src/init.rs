//! Tracing setup for the server binary

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log to stderr (stdout carries the MCP protocol).
///
/// Filtering comes from `RUST_LOG` with `<crate>=info` added.
/// `LOG_FORMAT=json` switches to structured JSON lines.
///
/// Uses `try_init`, so a subscriber already installed by an embedding host
/// is reported as an error instead of panicking.
pub fn init_tracing() -> anyhow::Result<()> {
    let directive = format!("{}=info", env!("CARGO_CRATE_NAME"));
    let filter = EnvFilter::from_default_env().add_directive(directive.parse()?);

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error() {
        // First call may fail if another test already installed a subscriber
        let _ = init_tracing();
        assert!(init_tracing().is_err());
    }
}
