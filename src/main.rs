use clap::Parser;
use ytcfg::application::ejecutar_cli;
use ytcfg::infrastructure::{AppConfig, InfrastructureError, YoutubeClient};
use ytcfg::presentation::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load();
    let result: Result<YoutubeClient, InfrastructureError> = YoutubeClient::new();
    let client = match result {
        Ok(client) => client,
        Err(e) => anyhow::bail!("Failed to initialize YouTube client: {}", e),
    };

    ejecutar_cli(cli, config, client).await?;

    Ok(())
}
