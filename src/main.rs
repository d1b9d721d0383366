mod cli;
mod facts;
mod render;
mod server;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::parse_args();
    init_tracing(cli.verbose);

    if cli.serve {
        return server::run_server(cli.port).await;
    }

    let snapshot = facts::collect_current();
    print!("{}", render::render_text(&snapshot));
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
