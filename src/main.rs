use clap::Parser;
use ntview::web::server;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ntview", version, about = "Read-only web viewer for ntkpr notes")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let args = Args::parse();
    server::run(&args.host, args.port).await?;
    Ok(())
}
