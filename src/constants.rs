//! Constants used across the BBTM toolkit

/// Default RPC endpoint, used when `NODE_URL_POLYGON_MAINNET` is unset
pub const DEFAULT_RPC: &str = "https://polygon-rpc.com";

/// Chain id of Polygon mainnet, the network BBTM deploys to
pub const POLYGON_CHAIN_ID: u64 = 137;

/// Gas price pinned by the Polygon network profile (30 gwei)
pub const GAS_PRICE_WEI: u128 = 30_000_000_000;

/// Deployer balance below this threshold triggers a warning (never a failure)
pub const MIN_DEPLOYER_BALANCE_POL: &str = "0.1";

/// Name of the BBTM contract inside the Solidity sources
pub const CONTRACT_NAME: &str = "BigBrotherTheMusical";

/// Base URI of the token metadata, the final CID of the JSON documents
pub const DEFAULT_BASE_URI: &str =
    "ipfs://bafybeickfxxa5nmkt3afvbohnfuaodylzbt4c4ei5yf2ht3kf5mb5i7iye/";

/// Default owner of the deployed contract
pub const DEFAULT_OWNER: &str = "0x83114bA5262CD62AF6E7d619035d20bfaF33Eaa5";

/// Default creator wallet baked into the contract
pub const DEFAULT_CREATOR: &str = "0x83114bA5262CD62AF6E7d619035d20bfaF33Eaa5";

/// Default path of the hand-maintained ABI source
pub const MANUAL_ABI_PATH: &str = "abi.js";

/// Default path of the compiled BBTM build artifact
pub const DEFAULT_ARTIFACT_PATH: &str =
    "artifacts/contracts/BigBrotherTheMusical.sol/BigBrotherTheMusical.json";

/// Directory holding the per-contract build artifacts
pub const ARTIFACTS_DIR: &str = "artifacts/contracts";

/// File recording the deployed contract addresses
pub const DEPLOY_OUTPUT_FILE: &str = "deployed.json";

/// Default path of the display-page comment store
pub const COMMENTS_FILE: &str = "bbtm_comments.json";

/// Number of tokens shown in the display-page price table
pub const TOKEN_COUNT: u64 = 20;

/// BBTM value of a token is its id times this step
pub const BBTM_PER_TOKEN: u64 = 5;
