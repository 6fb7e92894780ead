use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count; `RUST_LOG` takes precedence when set.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "warn,wavelab=info,wavelab_core=info",
        2 => "info,wavelab=debug,wavelab_core=debug",
        _ => "trace",
    }
}

/// Install a stderr `fmt` subscriber. `log` records from `wavelab-core` and
/// the GUI stack are bridged into it.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(e) = result {
        eprintln!("logging already initialized: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives_parse() {
        for v in 0..5 {
            assert!(EnvFilter::try_new(default_directive(v)).is_ok(), "verbosity {v}");
        }
    }
}
