//! Host configuration.
use crate::Result;
use serde::Deserialize;
use serde_json::Value as JsValue;
use tagpage_core::pagination::PaginatorConfig;
use tagpage_core::tags::TagEditorConfig;

/// Id of the element holding the configuration.
pub static CONFIG_ELEMENT_ID: &str = "tagpage-config";

/// Configuration of the demo page.
#[derive(Deserialize, Default, Clone, PartialEq, Debug)]
#[serde(default)]
pub struct DemoConfig {
    pub tags: TagEditorConfig,
    pub pagination: PaginatorConfig,

    /// Tags displayed on load.
    /// Passed to the editor as is, so anything other than an array is ignored.
    pub tags_initial: JsValue,
}

impl DemoConfig {
    /// Parses a configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads the configuration embedded in the page.
    ///
    /// # Returns
    /// The default configuration if the page does not embed one.
    pub fn load() -> Result<Self> {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return Ok(Self::default());
        };

        let Some(elm) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
            tracing::debug!("no configuration found");
            return Ok(Self::default());
        };

        let json = elm.text_content().unwrap_or_default();
        Self::from_json(&json)
    }

    /// Loads the configuration, falling back to the default if it is invalid.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(?err, "using default configuration");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
#[path = "./config_test.rs"]
mod config_test;
