//! Definitions of CLI arguments and commands for the BBTM toolkit

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::{
    commands,
    constants::{
        COMMENTS_FILE, CONTRACT_NAME, DEFAULT_ARTIFACT_PATH, DEFAULT_BASE_URI, DEFAULT_CREATOR,
        DEFAULT_OWNER, MANUAL_ABI_PATH,
    },
    errors::ScriptError,
};

/// Companion scripts for the BigBrotherTheMusical NFT contract
#[derive(Parser)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The possible CLI commands
#[derive(Subcommand)]
pub enum Command {
    /// Check the hand-maintained ABI against the compiled one
    CheckAbi(CheckAbiArgs),
    /// Deploy the BBTM contract
    Deploy(DeployArgs),
    /// Render the display-page token price table
    PriceTable(PriceTableArgs),
    /// Manage the display-page comment store
    Comments(CommentsArgs),
}

impl Command {
    /// Run the command
    pub async fn run(self) -> Result<(), ScriptError> {
        match self {
            Command::CheckAbi(args) => commands::check_abi(&args),
            Command::Deploy(args) => {
                info!("Deploying contract...");
                commands::deploy(args).await
            }
            Command::PriceTable(args) => commands::print_price_table(&args),
            Command::Comments(args) => commands::comments(&args),
        }
    }
}

/// Check the two ABI copies for drift
#[derive(Args)]
pub struct CheckAbiArgs {
    /// Path of the hand-maintained ABI source
    #[arg(long, default_value = MANUAL_ABI_PATH)]
    pub manual: PathBuf,

    /// Path of the compiled build artifact
    #[arg(long, default_value = DEFAULT_ARTIFACT_PATH)]
    pub artifact: PathBuf,

    /// Exit non-zero when the ABIs differ
    #[arg(long)]
    pub strict: bool,

    /// Disable ANSI colors in the diff output
    #[arg(long)]
    pub no_color: bool,
}

/// Deploy the contract with its three constructor arguments
#[derive(Args)]
pub struct DeployArgs {
    /// Name of the contract inside the Solidity sources
    #[arg(long, default_value = CONTRACT_NAME)]
    pub contract_name: String,

    /// Base URI of the token metadata
    #[arg(long, default_value = DEFAULT_BASE_URI)]
    pub base_uri: String,

    /// Address of the owner of the contract
    #[arg(short, long, default_value = DEFAULT_OWNER)]
    pub owner: String,

    /// Address of the creator wallet
    #[arg(short, long, default_value = DEFAULT_CREATOR)]
    pub creator: String,
}

/// Render the token price table
#[derive(Args)]
pub struct PriceTableArgs {
    /// EUR price of one POL
    #[arg(long, default_value_t = 1.0)]
    pub rate: f64,
}

/// Manage the comment store
#[derive(Args)]
pub struct CommentsArgs {
    /// Path of the comment store file
    #[arg(long, default_value = COMMENTS_FILE)]
    pub store: PathBuf,

    /// What to do with the store
    #[command(subcommand)]
    pub action: CommentsAction,
}

/// Comment store actions
#[derive(Subcommand)]
pub enum CommentsAction {
    /// Add a comment with an optional star rating
    Add {
        /// The comment text
        #[arg(long)]
        text: String,

        /// Star rating from 0 to 5
        #[arg(long, default_value_t = 0)]
        rating: u8,
    },
    /// List the stored comments, newest first
    List,
}
