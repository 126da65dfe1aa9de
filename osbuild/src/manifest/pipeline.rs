//! A named pipeline: an ordered list of stages.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ManifestError, Result};
use crate::stages::{Stage, StageOptions};

/// A pipeline in an osbuild manifest.
///
/// Stages are kept in the order they were added. No ordering rules or
/// cross-stage checks are applied here; the build engine owns those.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    name: String,

    /// Reference to the pipeline providing the build root, e.g. `name:build`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    build: Option<String>,

    /// Runner used to execute the stages, e.g. `org.osbuild.fedora38`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    runner: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    stages: Vec<Stage>,
}

impl Pipeline {
    /// Creates an empty pipeline.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or whitespace-only.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(ManifestError::validation(
                "Pipeline name cannot be empty or whitespace-only",
            ));
        }

        Ok(Self {
            name,
            build: None,
            runner: None,
            stages: Vec::new(),
        })
    }

    /// Sets the build pipeline reference.
    #[must_use]
    pub fn with_build(mut self, build: impl Into<String>) -> Self {
        self.build = Some(build.into());
        self
    }

    /// Sets the runner.
    #[must_use]
    pub fn with_runner(mut self, runner: impl Into<String>) -> Self {
        self.runner = Some(runner.into());
        self
    }

    /// Appends a stage.
    pub fn add_stage(&mut self, stage: Stage) {
        debug!(
            pipeline = %self.name,
            stage_type = %stage.stage_type(),
            position = self.stages.len(),
            "Appending stage"
        );
        self.stages.push(stage);
    }

    /// Appends a stage built from `options`.
    pub fn add_options<O: StageOptions>(&mut self, options: O) {
        self.add_stage(Stage::new(options));
    }

    /// Appends a stage, builder style.
    #[must_use]
    pub fn with_stage(mut self, stage: impl Into<Stage>) -> Self {
        self.add_stage(stage.into());
        self
    }

    /// Returns the pipeline name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the build pipeline reference, if any.
    #[must_use]
    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    /// Returns the runner, if any.
    #[must_use]
    pub fn runner(&self) -> Option<&str> {
        self.runner.as_deref()
    }

    /// Returns the stages in insertion order.
    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Returns the first stage configured by `O`, if any.
    #[must_use]
    pub fn find_options<O: StageOptions>(&self) -> Option<&O> {
        self.stages.iter().find_map(|stage| stage.options_as::<O>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stages::{
        new_hostname_stage, HostnameStageOptions, LocaleStageOptions, WaAgentConfStageOptions,
        WaAgentConfig,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_pipeline_empty_name() {
        assert!(Pipeline::new("").is_err());
        assert!(Pipeline::new("   ").is_err());
        assert!(matches!(
            Pipeline::new("\t"),
            Err(ManifestError::Validation(_))
        ));
    }

    #[test]
    fn test_stages_keep_insertion_order() {
        let mut pipeline = Pipeline::new("os").unwrap();
        pipeline.add_options(LocaleStageOptions::new("en_US.UTF-8"));
        pipeline.add_stage(new_hostname_stage(HostnameStageOptions::new("vm")));
        pipeline.add_options(WaAgentConfStageOptions::default());

        let types: Vec<_> = pipeline.stages().iter().map(Stage::stage_type).collect();
        assert_eq!(
            types,
            vec![
                "org.osbuild.locale",
                "org.osbuild.hostname",
                "org.osbuild.waagent.conf"
            ]
        );
    }

    #[test]
    fn test_optional_fields_omitted() {
        let pipeline = Pipeline::new("build").unwrap();
        assert_eq!(serde_json::to_value(&pipeline).unwrap(), json!({"name": "build"}));
    }

    #[test]
    fn test_pipeline_serialization() {
        let pipeline = Pipeline::new("os")
            .unwrap()
            .with_build("name:build")
            .with_runner("org.osbuild.rhel9")
            .with_stage(WaAgentConfStageOptions::new(
                WaAgentConfig::new().with_resource_disk_format(false),
            ));

        assert_eq!(pipeline.build(), Some("name:build"));
        assert_eq!(pipeline.runner(), Some("org.osbuild.rhel9"));
        assert_eq!(
            serde_json::to_value(&pipeline).unwrap(),
            json!({
                "name": "os",
                "build": "name:build",
                "runner": "org.osbuild.rhel9",
                "stages": [{
                    "type": "org.osbuild.waagent.conf",
                    "options": {"config": {"ResourceDisk.Format": false}}
                }]
            })
        );
    }

    #[test]
    fn test_find_options() {
        let pipeline = Pipeline::new("os")
            .unwrap()
            .with_stage(HostnameStageOptions::new("first"))
            .with_stage(HostnameStageOptions::new("second"));

        assert_eq!(
            pipeline
                .find_options::<HostnameStageOptions>()
                .map(|o| o.hostname.as_str()),
            Some("first")
        );
        assert!(pipeline.find_options::<LocaleStageOptions>().is_none());
    }
}
