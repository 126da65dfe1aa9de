//! `org.osbuild.waagent.conf`: configure the Azure Linux agent.

use serde::{Deserialize, Serialize};

use super::Stage;

/// Settings written to `/etc/waagent.conf`.
///
/// Every field is tri-state: `None` leaves the key out of the manifest so the
/// image keeps the agent's packaged default, while `Some(false)` and
/// `Some(true)` are written out explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WaAgentConfig {
    /// Delegate provisioning to cloud-init instead of the agent.
    #[serde(
        rename = "Provisioning.UseCloudInit",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub provisioning_use_cloud_init: Option<bool>,

    /// Enable the agent's provisioning.
    #[serde(
        rename = "Provisioning.Enabled",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub provisioning_enabled: Option<bool>,

    /// Format the resource disk.
    #[serde(
        rename = "ResourceDisk.Format",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub resource_disk_format: Option<bool>,

    /// Create a swap file on the resource disk.
    #[serde(
        rename = "ResourceDisk.EnableSwap",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub resource_disk_enable_swap: Option<bool>,
}

impl WaAgentConfig {
    /// Creates a config with every key unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `Provisioning.UseCloudInit`.
    #[must_use]
    pub fn with_provisioning_use_cloud_init(mut self, value: bool) -> Self {
        self.provisioning_use_cloud_init = Some(value);
        self
    }

    /// Sets `Provisioning.Enabled`.
    #[must_use]
    pub fn with_provisioning_enabled(mut self, value: bool) -> Self {
        self.provisioning_enabled = Some(value);
        self
    }

    /// Sets `ResourceDisk.Format`.
    #[must_use]
    pub fn with_resource_disk_format(mut self, value: bool) -> Self {
        self.resource_disk_format = Some(value);
        self
    }

    /// Sets `ResourceDisk.EnableSwap`.
    #[must_use]
    pub fn with_resource_disk_enable_swap(mut self, value: bool) -> Self {
        self.resource_disk_enable_swap = Some(value);
        self
    }

    /// Returns true if no key is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Options for the `org.osbuild.waagent.conf` stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WaAgentConfStageOptions {
    /// The agent configuration. Always emitted, even when empty.
    pub config: WaAgentConfig,
}

impl WaAgentConfStageOptions {
    /// Creates options wrapping the given config.
    #[must_use]
    pub fn new(config: WaAgentConfig) -> Self {
        Self { config }
    }
}

stage_options!(WaAgentConfStageOptions, WaAgentConf, "org.osbuild.waagent.conf");

/// Creates an `org.osbuild.waagent.conf` stage.
#[must_use]
pub fn new_waagent_conf_stage(options: WaAgentConfStageOptions) -> Stage {
    Stage::new(options)
}
