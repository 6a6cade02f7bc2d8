//! Generate command handler
//!
//! Resolves each requested component for one deployment and writes (or
//! prints) the generated files.

use std::path::PathBuf;

use anyhow::{bail, Result};

use bomcfg::config::Config;
use bomcfg::domain::ports::DeploymentRepository;
use bomcfg::infrastructure::LocalFs;
use bomcfg::presentation::factory::create_assembler;
use bomcfg::presentation::output::OutputEvent;
use bomcfg::{
    all_components, get_component, BomcfgError, ComponentDescriptor, DeploymentReference,
};

#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub components: Vec<String>,
    pub all: bool,
    pub deployment: Option<String>,
    pub out_dir: Option<PathBuf>,
    pub stdout: bool,
    pub json: bool,
}

pub fn cmd_generate(config: &Config, options: GenerateOptions) -> Result<()> {
    let components = select_components(&options)?;
    let assembler = create_assembler(config);

    let reference = match &options.deployment {
        Some(name) => DeploymentReference::new(name.as_str()),
        None => assembler.deployments().current_deployment()?,
    };

    let single = components.len() == 1;
    let results = if single {
        vec![assembler.document(&components[0], &reference)]
    } else {
        assembler.documents(&components, &reference)
    };

    let out_dir = options
        .out_dir
        .clone()
        .unwrap_or_else(|| config.output_dir());
    let fs = LocalFs::new();
    let mut failed = 0usize;

    for (component, result) in components.iter().zip(results) {
        let document = match result {
            Ok(document) => document,
            Err(err) if single && !options.json => return Err(err.into()),
            Err(err) => {
                failed += 1;
                report_failure(component.name(), &err, options.json);
                continue;
            }
        };

        if options.stdout {
            if options.json {
                println!("{}", OutputEvent::generated(&document, None).to_json_line());
            } else {
                print!("{}", document.content());
            }
            continue;
        }

        let path = out_dir.join(document.file_name());
        if let Err(err) = fs.write_atomic(&path, document.content()) {
            if single && !options.json {
                return Err(err.into());
            }
            failed += 1;
            report_failure(component.name(), &err, options.json);
            continue;
        }

        if options.json {
            println!(
                "{}",
                OutputEvent::generated(&document, Some(&path)).to_json_line()
            );
        } else {
            println!("✓ {} → {}", document.component(), path.display());
        }
    }

    if failed > 0 {
        bail!(
            "{} of {} components failed for deployment '{}'",
            failed,
            components.len(),
            reference
        );
    }
    Ok(())
}

fn report_failure(component: &str, err: &BomcfgError, json: bool) {
    if json {
        println!("{}", OutputEvent::failed(component, err).to_json_line());
    } else {
        eprintln!("✗ {}: {}", component, err);
    }
}

fn select_components(options: &GenerateOptions) -> Result<Vec<ComponentDescriptor>> {
    if options.all {
        return Ok(all_components());
    }

    let mut selected = Vec::with_capacity(options.components.len());
    for name in &options.components {
        match get_component(name) {
            Some(component) => selected.push(component),
            None => {
                let known: Vec<String> = all_components()
                    .iter()
                    .map(|c| c.name().to_string())
                    .collect();
                bail!(
                    "unknown component '{}'\n  → Known components: {}",
                    name,
                    known.join(", ")
                );
            }
        }
    }
    Ok(selected)
}
