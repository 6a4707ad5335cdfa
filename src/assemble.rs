use thiserror::Error;

use crate::extract::Extraction;
use crate::types::{Config, RpsContract, TokenContract};

pub struct TokenMeta {
    pub name: &'static str,
    pub symbol: &'static str,
}

pub struct Layout {
    pub tokens: &'static [TokenMeta],
    /// Write empty strings into every PARTIAL_ADDRESS field instead of the
    /// matches found in the log. The multi-token deployment does not wire
    /// partial addresses up yet.
    pub blank_partial_addresses: bool,
}

pub const MULTI_TOKEN: Layout = Layout {
    tokens: &[
        TokenMeta {
            name: "TestToken1",
            symbol: "TST1",
        },
        TokenMeta {
            name: "TestToken2",
            symbol: "TST2",
        },
        TokenMeta {
            name: "TestToken3",
            symbol: "TST3",
        },
    ],
    blank_partial_addresses: true,
};

pub const SINGLE_TOKEN: Layout = Layout {
    tokens: &[TokenMeta {
        name: "TestToken",
        symbol: "TST",
    }],
    blank_partial_addresses: false,
};

const DECIMALS: u8 = 18;

#[derive(Debug, Error)]
pub enum AssembleError {
    #[error("'{pattern}' matched {found} time(s) in the log, at least {required} required")]
    OutOfRange {
        pattern: &'static str,
        required: usize,
        found: usize,
    },
}

pub fn assemble(extraction: &Extraction, layout: &Layout) -> Result<Config, AssembleError> {
    // The game contract's values sit right after the token values in every list.
    let required = layout.tokens.len() + 1;

    check_count("Contract deployed at", &extraction.addresses, required)?;
    check_count("Contract init hash", &extraction.init_hashes, required)?;
    check_count("Deployment salt", &extraction.salts, required)?;
    check_count("Deployment tx hash", &extraction.tx_hashes, required)?;
    if !layout.blank_partial_addresses {
        check_count(
            "Contract partial address",
            &extraction.partial_addresses,
            required,
        )?;
    }

    // Every record shares the wallet address; a log without one still renders,
    // with the field left empty.
    let deployer = extraction.deployers.first().cloned().unwrap_or_default();

    let partial_address = |index: usize| {
        if layout.blank_partial_addresses {
            String::new()
        } else {
            extraction.partial_addresses[index].clone()
        }
    };

    let tokens = layout
        .tokens
        .iter()
        .enumerate()
        .map(|(i, meta)| TokenContract {
            address: extraction.addresses[i].clone(),
            partial_address: partial_address(i),
            init_hash: extraction.init_hashes[i].clone(),
            deployment_salt: extraction.salts[i].clone(),
            tx_hash: extraction.tx_hashes[i].clone(),
            deployer: deployer.clone(),
            name: meta.name,
            symbol: meta.symbol,
            decimals: DECIMALS,
        })
        .collect();

    let rps_index = layout.tokens.len();
    let rps = RpsContract {
        address: extraction.addresses[rps_index].clone(),
        partial_address: partial_address(rps_index),
        init_hash: extraction.init_hashes[rps_index].clone(),
        deployment_salt: extraction.salts[rps_index].clone(),
        tx_hash: extraction.tx_hashes[rps_index].clone(),
        deployer,
    };

    Ok(Config { tokens, rps })
}

fn check_count(
    pattern: &'static str,
    matches: &[String],
    required: usize,
) -> Result<(), AssembleError> {
    if matches.len() < required {
        return Err(AssembleError::OutOfRange {
            pattern,
            required,
            found: matches.len(),
        });
    }

    Ok(())
}
