//! osbuild manifest (format version 2).
//!
//! The manifest is the container handed to the build engine: a version tag
//! and a list of named pipelines, each holding stages.

mod pipeline;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ManifestError;

pub use pipeline::Pipeline;

/// The only manifest format version this crate produces.
pub const MANIFEST_VERSION: &str = "2";

/// A complete osbuild manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawManifest")]
pub struct Manifest {
    version: String,
    pipelines: Vec<Pipeline>,
}

#[derive(Deserialize)]
struct RawManifest {
    version: String,
    #[serde(default)]
    pipelines: Vec<Pipeline>,
}

impl TryFrom<RawManifest> for Manifest {
    type Error = ManifestError;

    fn try_from(raw: RawManifest) -> Result<Self, Self::Error> {
        if raw.version != MANIFEST_VERSION {
            return Err(ManifestError::UnsupportedVersion(raw.version));
        }
        Ok(Self {
            version: raw.version,
            pipelines: raw.pipelines,
        })
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new()
    }
}

impl Manifest {
    /// Creates an empty manifest.
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: MANIFEST_VERSION.to_string(),
            pipelines: Vec::new(),
        }
    }

    /// Appends a pipeline.
    pub fn add_pipeline(&mut self, pipeline: Pipeline) {
        debug!(
            pipeline = %pipeline.name(),
            stages = pipeline.stages().len(),
            "Adding pipeline to manifest"
        );
        self.pipelines.push(pipeline);
    }

    /// Appends a pipeline, builder style.
    #[must_use]
    pub fn with_pipeline(mut self, pipeline: Pipeline) -> Self {
        self.add_pipeline(pipeline);
        self
    }

    /// Returns the manifest version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns all pipelines in insertion order.
    #[must_use]
    pub fn pipelines(&self) -> &[Pipeline] {
        &self.pipelines
    }

    /// Looks up a pipeline by name.
    #[must_use]
    pub fn pipeline(&self, name: &str) -> Option<&Pipeline> {
        self.pipelines.iter().find(|p| p.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stages::{HostnameStageOptions, WaAgentConfStageOptions, WaAgentConfig};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> Manifest {
        Manifest::new()
            .with_pipeline(Pipeline::new("build").unwrap().with_runner("org.osbuild.linux"))
            .with_pipeline(
                Pipeline::new("os")
                    .unwrap()
                    .with_build("name:build")
                    .with_stage(HostnameStageOptions::new("azure-vm"))
                    .with_stage(WaAgentConfStageOptions::new(
                        WaAgentConfig::new()
                            .with_provisioning_use_cloud_init(true)
                            .with_provisioning_enabled(false),
                    )),
            )
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = Manifest::default();
        assert_eq!(manifest.version(), "2");
        assert_eq!(
            serde_json::to_value(&manifest).unwrap(),
            json!({"version": "2", "pipelines": []})
        );
    }

    #[test]
    fn test_manifest_shape() {
        assert_eq!(
            serde_json::to_value(sample()).unwrap(),
            json!({
                "version": "2",
                "pipelines": [
                    {"name": "build", "runner": "org.osbuild.linux"},
                    {
                        "name": "os",
                        "build": "name:build",
                        "stages": [
                            {"type": "org.osbuild.hostname", "options": {"hostname": "azure-vm"}},
                            {
                                "type": "org.osbuild.waagent.conf",
                                "options": {"config": {
                                    "Provisioning.UseCloudInit": true,
                                    "Provisioning.Enabled": false
                                }}
                            }
                        ]
                    }
                ]
            })
        );
    }

    #[test]
    fn test_manifest_round_trip() {
        let manifest = sample();
        let text = serde_json::to_string(&manifest).unwrap();
        let decoded: Manifest = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded, manifest);
    }

    #[test]
    fn test_pipeline_lookup() {
        let manifest = sample();
        assert_eq!(manifest.pipeline("os").map(|p| p.stages().len()), Some(2));
        assert!(manifest.pipeline("missing").is_none());
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let err = serde_json::from_str::<Manifest>(r#"{"version":"1","pipelines":[]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("unsupported manifest version \"1\""));
    }

    #[test]
    fn test_missing_pipelines_defaults_to_empty() {
        let manifest: Manifest = serde_json::from_str(r#"{"version":"2"}"#).unwrap();
        assert!(manifest.pipelines().is_empty());
    }
}
