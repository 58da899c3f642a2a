use anyhow::Result;
use helpers::{connect, deploy_payroll, ClientConfig};
use tracing::Level;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()),
        )
        .init();

    let provider = connect(ClientConfig::from_env()).await?;
    let payroll = deploy_payroll(&provider).await?;

    println!("Payroll contract deployed to: {}", payroll.address());

    Ok(())
}
