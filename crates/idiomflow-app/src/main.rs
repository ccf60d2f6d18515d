use clap::Parser;
use idiomflow_config::Config;

pub mod cli;
pub mod commands;
pub mod logging;
pub mod state;
pub mod status;


use self::cli::Cli;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is normal outside development
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let mut config = Config::new();
    cli.apply(&mut config);

    logging::init_logging(config.log.format);

    let state = AppState::load(config).await?;
    let output = commands::execute(&state, &cli.command)?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
