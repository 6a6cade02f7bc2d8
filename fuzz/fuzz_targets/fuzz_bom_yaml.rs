#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz BOM parsing through the generic tree - this should never panic
    if let Ok(tree) = serde_yaml_ng::from_slice::<serde_yaml_ng::Value>(data) {
        if let Ok(bom) = bomcfg::BillOfMaterials::from_value(tree) {
            for name in bom.services.keys() {
                let _ = bomcfg::locate(&bom, name, "config.yml");
            }
        }
    }
});
