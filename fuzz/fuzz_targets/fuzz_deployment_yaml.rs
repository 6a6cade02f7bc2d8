#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz deployment parsing - this should never panic
    if let Ok(deployment) = serde_yaml_ng::from_slice::<bomcfg::DeploymentConfiguration>(data) {
        let _ = deployment.declared_version();
    }
});
