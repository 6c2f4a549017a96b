use bbtm_scripts::{cli::Cli, errors::ScriptError};
use clap::Parser;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    // Load .env file
    dotenv().ok();

    let Cli { command } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    command.run().await
}
