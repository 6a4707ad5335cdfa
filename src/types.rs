use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct TokenContract {
    pub address: String,
    pub partial_address: String,
    pub init_hash: String,
    pub deployment_salt: String,
    pub tx_hash: String,
    pub deployer: String,
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
}

/// The rock-paper-scissors game contract deployed alongside the tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct RpsContract {
    pub address: String,
    pub partial_address: String,
    pub init_hash: String,
    pub deployment_salt: String,
    pub tx_hash: String,
    pub deployer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub tokens: Vec<TokenContract>,
    pub rps: RpsContract,
}
