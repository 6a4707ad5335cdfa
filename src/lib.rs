pub mod assemble;
pub mod extract;
pub mod render;
pub mod types;
pub mod write;

use crate::assemble::{AssembleError, Layout};

/// Full pipeline minus the file write: extract the deployment details from
/// the log and render the config document for the given layout.
pub fn generate(log: &str, layout: &Layout) -> Result<String, AssembleError> {
    let extraction = extract::extract(log);
    let config = assemble::assemble(&extraction, layout)?;

    Ok(render::render(&config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::{MULTI_TOKEN, SINGLE_TOKEN};

    fn hex(n: usize) -> String {
        format!("0x{n:064x}")
    }

    /// A log shaped like the deployment tool's real output: wallet address
    /// first, then one block of lines per deployed contract.
    fn deployment_log(contract_count: usize) -> String {
        let mut log = format!("Creating wallet...\nAddress: {}\n", hex(600));
        for i in 0..contract_count {
            log.push_str(&format!(
                "Deployment salt: {salt}\nDeployment tx hash: {tx}\nContract deployed at {address}\nContract partial address {partial}\nContract init hash {init}\n",
                salt = hex(500 + i),
                tx = hex(400 + i),
                address = hex(100 + i),
                partial = hex(200 + i),
                init = hex(300 + i),
            ));
        }
        log
    }

    #[test]
    fn test_multi_token_log_produces_three_tokens_and_game_record() {
        let document = generate(&deployment_log(4), &MULTI_TOKEN).unwrap();

        assert!(document.contains(&format!("ADDRESS: '{}'", hex(100))));
        assert!(document.contains("NAME: 'TestToken1'"));
        assert!(document.contains("NAME: 'TestToken3'"));
        assert!(document.contains("DECIMALS: 18"));
        assert!(document.contains(&format!("ADDRESS: '{}'", hex(103))));
        assert!(document.contains(&format!("DEPLOYER: '{}'", hex(600))));
    }

    #[test]
    fn test_multi_token_log_drops_matched_partial_addresses() {
        let document = generate(&deployment_log(4), &MULTI_TOKEN).unwrap();

        assert!(document.contains("PARTIAL_ADDRESS: ''"));
        assert!(!document.contains(&hex(200)));
    }

    #[test]
    fn test_single_token_log_keeps_partial_addresses() {
        let document = generate(&deployment_log(2), &SINGLE_TOKEN).unwrap();

        assert!(document.contains("NAME: 'TestToken'"));
        assert!(document.contains(&format!("PARTIAL_ADDRESS: '{}'", hex(200))));
        assert!(document.contains(&format!("PARTIAL_ADDRESS: '{}'", hex(201))));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let log = deployment_log(4);

        assert_eq!(
            generate(&log, &MULTI_TOKEN).unwrap(),
            generate(&log, &MULTI_TOKEN).unwrap()
        );
    }

    #[test]
    fn test_log_without_wallet_address_renders_empty_deployers() {
        let log = deployment_log(4)
            .lines()
            .filter(|line| !line.starts_with("Address:"))
            .collect::<Vec<_>>()
            .join("\n");

        let document = generate(&log, &MULTI_TOKEN).unwrap();

        assert!(document.contains("DEPLOYER: ''"));
        assert!(!document.contains(&hex(600)));
    }

    #[test]
    fn test_truncated_log_fails_before_rendering() {
        let err = generate(&deployment_log(1), &MULTI_TOKEN).unwrap_err();

        assert!(matches!(err, AssembleError::OutOfRange { .. }));
    }
}
