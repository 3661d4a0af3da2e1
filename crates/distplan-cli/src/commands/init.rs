use std::path::Path;

use anyhow::{Result, bail};
use distplan_core::DistplanConfig;

pub fn init(path: &str, files: &str, nodes: &str, force: bool) -> Result<()> {
    let output = Path::new(path).join("distplan.toml");
    if output.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", output.display());
    }

    let config = DistplanConfig::scaffold(files, nodes);
    std::fs::write(&output, config.to_toml_string()?)?;
    println!("✓ Generated {}", output.display());

    Ok(())
}
