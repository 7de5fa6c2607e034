use clerk_api::ClerkClient;
use clerk_config::ClerkConfig;

use crate::cli::GlobalFlags;

/// Install the stderr tracing subscriber. `CLERK_LOG` wins over the flags.
pub fn init_tracing(flags: &GlobalFlags) -> anyhow::Result<()> {
    let level = if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CLERK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Load the environment (plus `.env`) and build the API client.
///
/// `--secret-key` takes precedence over `CLERK_SECRET_KEY`.
pub fn connect(flags: &GlobalFlags) -> anyhow::Result<ClerkClient> {
    let config = ClerkConfig::load_with_dotenv()?;
    let client = ClerkClient::resolve(flags.secret_key.as_deref(), &config)?;
    tracing::debug!(base_url = client.base_url(), "clerk client ready");
    Ok(client)
}
