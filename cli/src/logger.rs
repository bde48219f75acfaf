//! Log output for the CLI. The lowering core logs through the `log` facade;
//! the subscriber's `tracing-log` bridge forwards those records here.

use tracing_subscriber::EnvFilter;

/// Map `-v` count / `--quiet` onto a filter directive. Warnings show by default.
pub fn directive_for(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins unless `-v`/`-q` was given.
pub fn init(verbosity: u8, quiet: bool) -> Result<(), Box<dyn std::error::Error>> {
    let directive = directive_for(verbosity, quiet);
    let filter = if verbosity > 0 || quiet {
        EnvFilter::new(directive)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(console::colors_enabled_stderr())
        .with_target(false)
        .without_time()
        .compact()
        .try_init()
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    Ok(())
}
