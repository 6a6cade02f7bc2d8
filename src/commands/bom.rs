//! Bom command handler
//!
//! Prints the component versions a deployment version pins.

use anyhow::Result;

use bomcfg::config::Config;
use bomcfg::fetch_bom;
use bomcfg::presentation::factory::create_assembler;

pub fn cmd_bom(config: &Config, version: &str, json: bool) -> Result<()> {
    let assembler = create_assembler(config);
    let label = format!("bill of materials {}", version);
    let bom = fetch_bom(assembler.store(), assembler.bucket(), version, &label)?;

    if json {
        println!("{}", serde_json::to_string(&bom)?);
        return Ok(());
    }

    println!("version: {}", bom.version.as_deref().unwrap_or(version));
    for (service, service_version) in &bom.services {
        println!("  {:<12} {}", service, service_version);
    }
    Ok(())
}
