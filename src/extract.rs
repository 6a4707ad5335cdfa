use regex::Regex;
use tracing::info;

const ADDRESS_PATTERN: &str = r"Contract deployed at\s+(0x[a-fA-F0-9]{64})";
const PARTIAL_ADDRESS_PATTERN: &str = r"Contract partial address\s+(0x[a-fA-F0-9]{64})";
const INIT_HASH_PATTERN: &str = r"Contract init hash\s+(0x[a-fA-F0-9]{64})";
const TX_HASH_PATTERN: &str = r"Deployment tx hash:\s+(0x[a-fA-F0-9]{64})";
const SALT_PATTERN: &str = r"Deployment salt:\s+(0x[a-fA-F0-9]{64})";
const DEPLOYER_PATTERN: &str = r"Address:\s+(0x[a-fA-F0-9]{64})";

/// All matches per pattern, in order of occurrence in the log.
/// Duplicates are kept; an empty list is not an error at this stage.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub addresses: Vec<String>,
    pub partial_addresses: Vec<String>,
    pub init_hashes: Vec<String>,
    pub tx_hashes: Vec<String>,
    pub salts: Vec<String>,
    pub deployers: Vec<String>,
}

pub fn extract(log: &str) -> Extraction {
    let extraction = Extraction {
        addresses: find_all(ADDRESS_PATTERN, log),
        partial_addresses: find_all(PARTIAL_ADDRESS_PATTERN, log),
        init_hashes: find_all(INIT_HASH_PATTERN, log),
        tx_hashes: find_all(TX_HASH_PATTERN, log),
        salts: find_all(SALT_PATTERN, log),
        deployers: find_all(DEPLOYER_PATTERN, log),
    };

    info!(matches = ?extraction.addresses, "contract addresses");
    info!(matches = ?extraction.partial_addresses, "partial addresses");
    info!(matches = ?extraction.init_hashes, "init hashes");
    info!(matches = ?extraction.tx_hashes, "deployment tx hashes");
    info!(matches = ?extraction.salts, "deployment salts");
    info!(matches = ?extraction.deployers, "deployer addresses");

    extraction
}

fn find_all(pattern: &str, log: &str) -> Vec<String> {
    let re = Regex::new(pattern).expect("Invalid extraction pattern");
    re.captures_iter(log)
        .map(|caps| caps[1].to_string())
        .collect()
}
