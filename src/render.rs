use crate::types::{Config, TokenContract};

const WALLETCONNECT_PROJECT_ID: &str = "9c949a62a5bde2de36fcd8485d568064";
const L1_RPC_URL: &str = "http://localhost:8545";
const PXE_URL: &str = "http://localhost:8080";

/// Renders the config as a TypeScript module. Field order and quoting are
/// fixed; the wallet frontend imports this file as source.
pub fn render(config: &Config) -> String {
    let tokens = config
        .tokens
        .iter()
        .map(render_token)
        .collect::<Vec<_>>()
        .join(",\n");

    let document = format!(
        "export const CONFIG = {{
  WALLETCONNECT_PROJECT_ID: '{WALLETCONNECT_PROJECT_ID}',
  l1RpcUrl: '{L1_RPC_URL}',
  //PXE_URL: 'https://pxe.obsidion.xyz',
  PXE_URL: '{PXE_URL}',

  TOKEN_CONTRACTS: [
{tokens}
  ],

  RPS_CONTRACT: {{
    ADDRESS: '{address}',
    PARTIAL_ADDRESS: '{partial_address}',
    INIT_HASH: '{init_hash}',
    DEPLOYMENT_SALT: '{deployment_salt}',
    TX_HASH: '{tx_hash}',
    DEPLOYER: '{deployer}'
  }},

  SDK_METADATA: {{
    name: \"Aztec Wallet\",
    description: \"\",
    url: \"\",
    icons: [],
  }}
}};",
        address = config.rps.address,
        partial_address = config.rps.partial_address,
        init_hash = config.rps.init_hash,
        deployment_salt = config.rps.deployment_salt,
        tx_hash = config.rps.tx_hash,
        deployer = config.rps.deployer,
    );

    document.trim().to_string()
}

fn render_token(token: &TokenContract) -> String {
    format!(
        "    {{
      ADDRESS: '{address}',
      PARTIAL_ADDRESS: '{partial_address}',
      INIT_HASH: '{init_hash}',
      DEPLOYMENT_SALT: '{deployment_salt}',
      TX_HASH: '{tx_hash}',
      DEPLOYER: '{deployer}',
      NAME: '{name}',
      SYMBOL: '{symbol}',
      DECIMALS: {decimals}
    }}",
        address = token.address,
        partial_address = token.partial_address,
        init_hash = token.init_hash,
        deployment_salt = token.deployment_salt,
        tx_hash = token.tx_hash,
        deployer = token.deployer,
        name = token.name,
        symbol = token.symbol,
        decimals = token.decimals,
    )
}
