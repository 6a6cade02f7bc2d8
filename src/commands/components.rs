//! Components command handler

use anyhow::Result;

use bomcfg::all_components;
use bomcfg::presentation::output::OutputEvent;

pub fn cmd_components(json: bool) -> Result<()> {
    for component in all_components() {
        if json {
            println!("{}", OutputEvent::component(&component).to_json_line());
        } else {
            println!(
                "{:<12} {:<16} {}",
                component.name(),
                component.config_file_name(),
                component.comment_prefix().trim_end()
            );
        }
    }
    Ok(())
}
