//! `org.osbuild.locale`: set the system locale.

use serde::{Deserialize, Serialize};

use super::Stage;

/// Options for the `org.osbuild.locale` stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocaleStageOptions {
    /// Locale name, e.g. `en_US.UTF-8`.
    pub language: String,
}

impl LocaleStageOptions {
    /// Creates locale options.
    #[must_use]
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }
}

stage_options!(LocaleStageOptions, Locale, "org.osbuild.locale");

/// Creates an `org.osbuild.locale` stage.
#[must_use]
pub fn new_locale_stage(options: LocaleStageOptions) -> Stage {
    Stage::new(options)
}
