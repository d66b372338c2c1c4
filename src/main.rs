use std::env;
use std::process;

use storefront_icons::{generate, GeneratorConfig, Result, DEFAULT_OUTPUT_DIR};

fn run() -> Result<()> {
    let output_dir = match env::current_dir() {
        Ok(cwd) => cwd.join(DEFAULT_OUTPUT_DIR),
        Err(_) => DEFAULT_OUTPUT_DIR.into(),
    };

    let written = generate(&GeneratorConfig::standard(output_dir))?;
    for spec in &written {
        let size = spec.size();
        println!("Generated {} ({size}x{size})", spec.output_path().display());
    }

    println!("\nAll app icons generated successfully.");
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("ERROR: {e}");
        process::exit(1);
    }
}
