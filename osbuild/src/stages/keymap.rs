//! `org.osbuild.keymap`: set the console and, optionally, X11 keyboard layouts.

use serde::{Deserialize, Serialize};

use super::Stage;

/// X11 keyboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct X11Keymap {
    /// Layouts in priority order, e.g. `["us", "de"]`.
    pub layouts: Vec<String>,
}

impl X11Keymap {
    /// Creates an X11 keymap from a list of layouts.
    #[must_use]
    pub fn new(layouts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            layouts: layouts.into_iter().map(Into::into).collect(),
        }
    }
}

/// Options for the `org.osbuild.keymap` stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeymapStageOptions {
    /// Virtual console keymap.
    pub keymap: String,

    /// X11 layouts. Omitted from the manifest when unset.
    #[serde(rename = "x11-keymap", default, skip_serializing_if = "Option::is_none")]
    pub x11_keymap: Option<X11Keymap>,
}

impl KeymapStageOptions {
    /// Creates keymap options for the virtual console only.
    #[must_use]
    pub fn new(keymap: impl Into<String>) -> Self {
        Self {
            keymap: keymap.into(),
            x11_keymap: None,
        }
    }

    /// Sets the X11 keymap.
    #[must_use]
    pub fn with_x11_keymap(mut self, x11_keymap: X11Keymap) -> Self {
        self.x11_keymap = Some(x11_keymap);
        self
    }
}

stage_options!(KeymapStageOptions, Keymap, "org.osbuild.keymap");

/// Creates an `org.osbuild.keymap` stage.
#[must_use]
pub fn new_keymap_stage(options: KeymapStageOptions) -> Stage {
    Stage::new(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_console_only_omits_x11() {
        let json = serde_json::to_string(&KeymapStageOptions::new("us")).unwrap();
        assert_eq!(json, r#"{"keymap":"us"}"#);
    }

    #[test]
    fn test_x11_layouts() {
        let options = KeymapStageOptions::new("de").with_x11_keymap(X11Keymap::new(["de", "us"]));
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"keymap":"de","x11-keymap":{"layouts":["de","us"]}}"#);

        let decoded: KeymapStageOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, options);
    }
}
