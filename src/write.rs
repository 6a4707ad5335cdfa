use std::fs;

/// Overwrites the config file in place. The parent directory must already
/// exist; the frontend tree owns it, not this tool.
pub fn write(path: &str, document: &str) -> Result<(), std::io::Error> {
    fs::write(path, document)
}
