use clap::Parser;
use clerk_cli::cli::OrgsCli;
use clerk_cli::{bootstrap, commands, report};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{}", report::render_error(&error));
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = OrgsCli::parse();
    let flags = cli.global.flags();
    bootstrap::init_tracing(&flags)?;

    let client = bootstrap::connect(&flags)?;
    commands::organizations::handle(&cli.command, &client, &flags).await
}
