//! Property tests for storage key construction.

use proptest::prelude::*;

use bomcfg::{bom_key, locate, BillOfMaterials, BomcfgError};

fn segment() -> impl Strategy<Value = String> {
    // Component names, versions and file names never contain '/'.
    proptest::string::string_regex("[A-Za-z0-9._-]{1,16}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a listed component always maps to `<name>/<version>/<file>`.
    #[test]
    fn property_locate_joins_name_version_file(
        name in segment(),
        version in segment(),
        file in segment(),
    ) {
        let bom = BillOfMaterials::new().with_service(name.clone(), version.clone());

        let key = locate(&bom, &name, &file).unwrap();

        prop_assert_eq!(key.as_str(), format!("{}/{}/{}", name, version, file));
        prop_assert_eq!(key.as_str().split('/').count(), 3);
    }

    /// PROPERTY: locating an unlisted component never yields a key.
    #[test]
    fn property_locate_unlisted_is_unknown_component(
        listed in segment(),
        requested in segment(),
    ) {
        prop_assume!(listed != requested);
        let bom = BillOfMaterials::new().with_service(listed, "1.0.0");

        let result = locate(&bom, &requested, "x.yml");

        let is_unknown = matches!(result, Err(BomcfgError::UnknownComponent { .. }));
        prop_assert!(is_unknown);
    }

    /// PROPERTY: the BOM key is always `bom/<version>.yml`.
    #[test]
    fn property_bom_key_pattern(version in segment()) {
        let key = bom_key(&version);
        prop_assert!(key.starts_with("bom/"));
        prop_assert!(key.ends_with(".yml"));
        prop_assert_eq!(&key[4..key.len() - 4], version.as_str());
    }
}
