//! Config Assembler Tests

use super::*;
use crate::domain::entities::DeploymentConfiguration;
use crate::domain::ports::{DeploymentError, ObjectStoreError, ReadMode};
use crate::domain::value_objects::{Generation, StoredObjectMetadata};
use crate::infrastructure::{InMemoryDeploymentRepository, InMemoryObjectStore};
use serde_yaml_ng::Value;
use std::io::Read;
use std::sync::{Arc, Mutex};

const BUCKET: &str = "profiles";

const BANNER: &str = "# WARNING\n\
                      # This file was autogenerated, and _will_ be overwritten by bomcfg.\n\
                      # Any edits you make here _will_ be lost.\n";

/// Object store wrapper recording every key touched
struct RecordingStore {
    inner: InMemoryObjectStore,
    touched: Mutex<Vec<String>>,
}

impl RecordingStore {
    fn new(inner: InMemoryObjectStore) -> Self {
        Self {
            inner,
            touched: Mutex::new(Vec::new()),
        }
    }

    fn touched(&self) -> Vec<String> {
        self.touched.lock().unwrap().clone()
    }
}

impl ObjectStore for RecordingStore {
    fn metadata(&self, bucket: &str, key: &str) -> Result<StoredObjectMetadata, ObjectStoreError> {
        self.touched.lock().unwrap().push(key.to_string());
        self.inner.metadata(bucket, key)
    }

    fn contents(
        &self,
        bucket: &str,
        key: &str,
        generation: &Generation,
        mode: ReadMode,
    ) -> Result<Box<dyn Read + Send>, ObjectStoreError> {
        self.touched.lock().unwrap().push(key.to_string());
        self.inner.contents(bucket, key, generation, mode)
    }
}

/// Object store reporting a size no buffer can hold
struct OversizedMetadataStore(InMemoryObjectStore);

impl ObjectStore for OversizedMetadataStore {
    fn metadata(&self, bucket: &str, key: &str) -> Result<StoredObjectMetadata, ObjectStoreError> {
        let metadata = self.0.metadata(bucket, key)?;
        Ok(StoredObjectMetadata::new(metadata.generation, u64::MAX))
    }

    fn contents(
        &self,
        bucket: &str,
        key: &str,
        generation: &Generation,
        mode: ReadMode,
    ) -> Result<Box<dyn Read + Send>, ObjectStoreError> {
        self.0.contents(bucket, key, generation, mode)
    }
}

/// Deployment repository counting reads and tagging each returned copy with its read number
struct CountingDeployments {
    inner: InMemoryDeploymentRepository,
    reads: Mutex<usize>,
}

impl CountingDeployments {
    fn new(inner: InMemoryDeploymentRepository) -> Self {
        Self {
            inner,
            reads: Mutex::new(0),
        }
    }

    fn reads(&self) -> usize {
        *self.reads.lock().unwrap()
    }
}

impl DeploymentRepository for CountingDeployments {
    fn current_deployment(&self) -> Result<DeploymentReference, DeploymentError> {
        self.inner.current_deployment()
    }

    fn deployment_configuration(
        &self,
        reference: &DeploymentReference,
    ) -> Result<DeploymentConfiguration, DeploymentError> {
        let read = {
            let mut reads = self.reads.lock().unwrap();
            *reads += 1;
            *reads
        };
        let mut deployment = self.inner.deployment_configuration(reference)?;
        deployment
            .extra
            .insert("read".to_string(), Value::String(format!("read-{}", read)));
        Ok(deployment)
    }
}

fn prod_deployments(version: Option<&str>) -> InMemoryDeploymentRepository {
    let mut deployment = DeploymentConfiguration::new("prod");
    deployment.version = version.map(str::to_string);
    InMemoryDeploymentRepository::new().with_deployment(deployment)
}

fn seeded_store() -> InMemoryObjectStore {
    let store = InMemoryObjectStore::new();
    store.put(
        BUCKET,
        "bom/1.10.0.yml",
        "version: 1.10.0\nservices:\n  clouddriver: 2.0.1\n  deck: 2.3.0\n",
    );
    store.put(BUCKET, "clouddriver/2.0.1/clouddriver.yml", "foo: bar");
    store.put(BUCKET, "deck/2.3.0/settings.js", "window.spinnakerSettings = {};\n");
    store
}

fn prod() -> DeploymentReference {
    DeploymentReference::new("prod")
}

#[test]
fn full_config_is_banner_plus_base_config() {
    let assembler = ConfigAssembler::new(prod_deployments(Some("1.10.0")), seeded_store(), BUCKET);
    let clouddriver = ComponentDescriptor::yaml("clouddriver");

    let config = assembler.full_config(&clouddriver, &prod()).unwrap();

    assert_eq!(config, format!("{}foo: bar", BANNER));
}

#[test]
fn banner_uses_component_comment_prefix() {
    let assembler = ConfigAssembler::new(prod_deployments(Some("1.10.0")), seeded_store(), BUCKET);
    let deck = ComponentDescriptor::new("deck", "settings.js", "// ");

    let document = assembler.document(&deck, &prod()).unwrap();

    assert_eq!(document.file_name(), "settings.js");
    let lines: Vec<&str> = document.content().lines().collect();
    assert_eq!(lines[0], "// WARNING");
    assert!(lines[1].starts_with("// This file was autogenerated"));
    assert_eq!(lines[2], "// Any edits you make here _will_ be lost.");
    assert_eq!(lines[3], "window.spinnakerSettings = {};");
}

#[test]
fn missing_version_never_touches_the_store() {
    for version in [None, Some(""), Some("   ")] {
        let store = Arc::new(RecordingStore::new(seeded_store()));
        let assembler = ConfigAssembler::new(prod_deployments(version), store.clone(), BUCKET);

        let err = assembler
            .full_config(&ComponentDescriptor::yaml("clouddriver"), &prod())
            .unwrap_err();

        assert!(matches!(err, BomcfgError::MissingVersion { .. }));
        assert!(store.touched().is_empty());
    }
}

#[test]
fn unknown_component_fails_before_base_config_fetch() {
    let inner = InMemoryObjectStore::new();
    inner.put(BUCKET, "bom/1.10.0.yml", "services:\n  orca: 1.0.0\n");
    inner.put(BUCKET, "clouddriver/2.0.1/clouddriver.yml", "foo: bar");
    let store = Arc::new(RecordingStore::new(inner));
    let assembler = ConfigAssembler::new(prod_deployments(Some("1.10.0")), store.clone(), BUCKET);

    let err = assembler
        .full_config(&ComponentDescriptor::yaml("clouddriver"), &prod())
        .unwrap_err();

    assert!(matches!(
        err,
        BomcfgError::UnknownComponent { ref component } if component == "clouddriver"
    ));
    assert!(store
        .touched()
        .iter()
        .all(|key| !key.starts_with("clouddriver/")));
}

#[test]
fn missing_base_config_is_an_artifact_fetch_error() {
    let store = InMemoryObjectStore::new();
    store.put(BUCKET, "bom/1.10.0.yml", "services:\n  echo: 2.1.0\n");
    let assembler = ConfigAssembler::new(prod_deployments(Some("1.10.0")), store, BUCKET);

    let err = assembler
        .full_config(&ComponentDescriptor::yaml("echo"), &prod())
        .unwrap_err();

    match err {
        BomcfgError::ArtifactFetch { component, message, .. } => {
            assert_eq!(component, "echo");
            assert!(message.contains("echo/2.1.0/echo.yml"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn non_utf8_base_config_is_an_artifact_fetch_error() {
    let store = seeded_store();
    store.put(BUCKET, "clouddriver/2.0.1/clouddriver.yml", vec![0xffu8, 0xfe, 0x00]);
    let assembler = ConfigAssembler::new(prod_deployments(Some("1.10.0")), store, BUCKET);

    let err = assembler
        .full_config(&ComponentDescriptor::yaml("clouddriver"), &prod())
        .unwrap_err();

    assert!(matches!(err, BomcfgError::ArtifactFetch { .. }));
}

#[test]
fn specializer_receives_base_config_and_deployment() {
    let assembler = ConfigAssembler::new(prod_deployments(Some("1.10.0")), seeded_store(), BUCKET);
    let clouddriver = ComponentDescriptor::yaml("clouddriver").with_specializer(|base, deployment| {
        format!("{}\ndeployment: {}\n", base, deployment.name)
    });

    let config = assembler.full_config(&clouddriver, &prod()).unwrap();

    assert!(config.starts_with(BANNER));
    assert!(config.ends_with("foo: bar\ndeployment: prod\n"));
}

#[test]
fn banner_is_not_passed_to_specializer() {
    let assembler = ConfigAssembler::new(prod_deployments(Some("1.10.0")), seeded_store(), BUCKET);
    let clouddriver = ComponentDescriptor::yaml("clouddriver")
        .with_specializer(|base, _| base.replace("WARNING", "changed"));

    let config = assembler.full_config(&clouddriver, &prod()).unwrap();

    assert!(config.starts_with("# WARNING\n"));
}

#[test]
fn sequential_calls_are_identical() {
    let assembler = ConfigAssembler::new(prod_deployments(Some("1.10.0")), seeded_store(), BUCKET);
    let clouddriver = ComponentDescriptor::yaml("clouddriver");

    let first = assembler.full_config(&clouddriver, &prod()).unwrap();
    let second = assembler.full_config(&clouddriver, &prod()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn version_bump_is_picked_up_without_caching() {
    let store = seeded_store();
    store.put(BUCKET, "bom/1.11.0.yml", "services:\n  clouddriver: 2.1.0\n");
    store.put(BUCKET, "clouddriver/2.1.0/clouddriver.yml", "foo: baz");
    let deployments = Arc::new(prod_deployments(Some("1.10.0")));
    let assembler = ConfigAssembler::new(deployments.clone(), store, BUCKET);
    let clouddriver = ComponentDescriptor::yaml("clouddriver");

    let before = assembler.full_config(&clouddriver, &prod()).unwrap();
    deployments.insert(DeploymentConfiguration::new("prod").with_version("1.11.0"));
    let after = assembler.full_config(&clouddriver, &prod()).unwrap();

    assert!(before.ends_with("foo: bar"));
    assert!(after.ends_with("foo: baz"));
}

#[test]
fn documents_keeps_component_order() {
    let assembler = ConfigAssembler::new(prod_deployments(Some("1.10.0")), seeded_store(), BUCKET);
    let components = vec![
        ComponentDescriptor::new("deck", "settings.js", "// "),
        ComponentDescriptor::yaml("echo"),
        ComponentDescriptor::yaml("clouddriver"),
    ];

    let results = assembler.documents(&components, &prod());

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().component(), "deck");
    assert!(matches!(
        results[1],
        Err(BomcfgError::UnknownComponent { .. })
    ));
    assert_eq!(results[2].as_ref().unwrap().component(), "clouddriver");
}

#[test]
fn bogus_reported_size_does_not_abort_the_read() {
    let store = OversizedMetadataStore(seeded_store());
    let assembler = ConfigAssembler::new(prod_deployments(Some("1.10.0")), store, BUCKET);

    let config = assembler
        .full_config(&ComponentDescriptor::yaml("clouddriver"), &prod())
        .unwrap();

    assert_eq!(config, format!("{}foo: bar", BANNER));
}

#[test]
fn specializer_sees_a_second_deployment_read() {
    let deployments = Arc::new(CountingDeployments::new(prod_deployments(Some("1.10.0"))));
    let assembler = ConfigAssembler::new(deployments.clone(), seeded_store(), BUCKET);
    let clouddriver = ComponentDescriptor::yaml("clouddriver").with_specializer(|base, deployment| {
        let read = deployment.get("read").and_then(Value::as_str).unwrap_or("none");
        format!("{}\nread: {}\n", base, read)
    });

    let config = assembler.full_config(&clouddriver, &prod()).unwrap();

    assert_eq!(deployments.reads(), 2);
    assert!(config.ends_with("foo: bar\nread: read-2\n"));
}
