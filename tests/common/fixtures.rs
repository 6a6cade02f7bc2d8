//! Test fixtures - reusable content constants for tests.

/// Bucket used by every test environment
pub const BUCKET: &str = "profiles";

/// BOM for deployment version 1.10.0
pub const BOM_1_10_0: &str = r#"version: 1.10.0
timestamp: "2017-06-01 12:00:00"
services:
  clouddriver: 2.0.1
  deck:
    version: 2.3.0
  echo:
    version: 2.1.0
    commit: 4f1c2e9
"#;

/// Deployment file with a `prod` deployment on 1.10.0 and an unversioned `staging`
pub const DEPLOYMENTS: &str = r#"currentDeployment: prod
deploymentConfigurations:
  - name: prod
    version: 1.10.0
    timezone: UTC
  - name: staging
"#;

/// Base clouddriver config published for 2.0.1
pub const CLOUDDRIVER_BASE: &str = "foo: bar";

/// Base deck settings published for 2.3.0
pub const DECK_BASE: &str = "window.spinnakerSettings = {};\n";

/// Banner expected on every `# `-commented component
pub const HASH_BANNER: &str = "# WARNING\n\
                               # This file was autogenerated, and _will_ be overwritten by bomcfg.\n\
                               # Any edits you make here _will_ be lost.\n";
