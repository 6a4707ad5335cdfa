use std::io::Read;

use aztec_config_gen::{assemble::SINGLE_TOKEN, generate, write};

const OUTPUT_PATH: &str = "src/config.ts";

fn main() {
    tracing_subscriber::fmt::init();

    let mut log = String::new();
    std::io::stdin()
        .read_to_string(&mut log)
        .expect("Failed to read deployment log from stdin");

    let document = generate(&log, &SINGLE_TOKEN).expect("Failed to assemble config");

    write::write(OUTPUT_PATH, &document).expect("Failed to write config");
}
