//! # osbuild
//!
//! Typed building blocks for osbuild image manifests.
//!
//! Every build step in a manifest is a *stage*: a stage type such as
//! `org.osbuild.waagent.conf` plus an options object. This crate provides:
//!
//! - **Sealed stage options**: one strongly typed record per stage kind; only
//!   the records defined here can be placed in a stage
//! - **Tri-state settings**: `Option<bool>` fields that are left out of the
//!   manifest when unset instead of being written as `false`
//! - **Stage envelope**: [`Stage`](stages::Stage), whose type string always
//!   matches its options
//! - **Manifest assembly and encoding**: pipelines, manifests, JSON and YAML
//!
//! ## Quick Start
//!
//! ```rust
//! use osbuild::prelude::*;
//!
//! let stage = new_waagent_conf_stage(WaAgentConfStageOptions::new(
//!     WaAgentConfig::new().with_provisioning_enabled(true),
//! ));
//!
//! let manifest = Manifest::new()
//!     .with_pipeline(Pipeline::new("os")?.with_stage(stage));
//!
//! let json = to_json(&manifest)?;
//! assert!(json.contains(r#""Provisioning.Enabled":true"#));
//! # Ok::<(), osbuild::errors::ManifestError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc
)]

pub mod encoding;
pub mod errors;
pub mod manifest;
pub mod stages;

/// Prelude module for convenient imports
pub mod prelude {
    #[cfg(feature = "yaml")]
    pub use crate::encoding::{from_yaml, to_yaml};
    pub use crate::encoding::{
        decode, encode, encode_to_writer, from_json, to_json, to_json_pretty, EncodingConfig,
        ManifestFormat,
    };
    pub use crate::errors::{ManifestError, Result};
    pub use crate::manifest::{Manifest, Pipeline, MANIFEST_VERSION};
    pub use crate::stages::{
        new_hostname_stage, new_keymap_stage, new_locale_stage, new_timezone_stage,
        new_waagent_conf_stage, HostnameStageOptions, KeymapStageOptions, LocaleStageOptions,
        Stage, StageOptions, StageOptionsKind, TimezoneStageOptions, WaAgentConfStageOptions,
        WaAgentConfig, X11Keymap,
    };
}
