//! Property tests for BOM parsing.

use std::collections::BTreeMap;

use proptest::prelude::*;

use bomcfg::BillOfMaterials;

fn service_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9-]{0,11}")
        .unwrap()
        .prop_map(|name| format!("svc-{}", name))
}

fn version() -> impl Strategy<Value = String> {
    (0u32..20, 0u32..20, 0u32..20).prop_map(|(a, b, c)| format!("{}.{}.{}", a, b, c))
}

fn parse(yaml: &str) -> Result<BillOfMaterials, serde_yaml_ng::Error> {
    BillOfMaterials::from_value(serde_yaml_ng::from_str(yaml)?)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: bare and table service entries parse to the same map.
    #[test]
    fn property_bare_and_table_entries_agree(
        services in proptest::collection::btree_map(service_name(), version(), 1..8)
    ) {
        let mut bare = String::from("services:\n");
        let mut table = String::from("services:\n");
        for (name, version) in &services {
            bare.push_str(&format!("  {}: {}\n", name, version));
            table.push_str(&format!("  {}:\n    version: {}\n", name, version));
        }

        let from_bare = parse(&bare).unwrap();
        let from_table = parse(&table).unwrap();

        prop_assert_eq!(&from_bare.services, &services);
        prop_assert_eq!(&from_table.services, &services);
    }

    /// PROPERTY: parsing arbitrary text never panics.
    #[test]
    fn property_parse_never_panics(s in ".{0,256}") {
        let _ = parse(&s);
    }
}

#[test]
fn empty_service_map_parses() {
    let bom = parse("services: {}\n").unwrap();
    assert_eq!(bom.services, BTreeMap::new());
}
