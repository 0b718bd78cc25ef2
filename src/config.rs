//! Enhancement configuration
//!
//! Every field has a default reproducing the markup contract of the original
//! site templates, so the zero-config path needs no input at all. Hosts with
//! different markup pass a partial JSON object; absent fields keep their
//! defaults and unknown fields are ignored.

use serde::Deserialize;

use crate::error::EnhanceResult;

/// Selectors, class names and strings the two behaviors are bound with
#[derive(Debug, Clone, Deserialize)]
pub struct EnhanceConfig {
    /// Element id of the mobile nav toggle control
    #[serde(default = "default_nav_toggle_id")]
    pub nav_toggle_id: String,

    /// Selector of the nav links container the toggle acts on
    #[serde(default = "default_nav_links_selector")]
    pub nav_links_selector: String,

    /// Class toggled on the container to open/close the menu
    #[serde(default = "default_nav_open_class")]
    pub nav_open_class: String,

    /// Attribute marking elements that need confirmation before their
    /// default action; its value is the prompt message
    #[serde(default = "default_confirm_attribute")]
    pub confirm_attribute: String,

    /// Prompt shown when the marker attribute has no usable value
    #[serde(default = "default_confirm_message")]
    pub default_confirm_message: String,
}

fn default_nav_toggle_id() -> String {
    "nav-toggle".to_string()
}

fn default_nav_links_selector() -> String {
    ".nav-links".to_string()
}

fn default_nav_open_class() -> String {
    "open".to_string()
}

fn default_confirm_attribute() -> String {
    "data-confirm".to_string()
}

fn default_confirm_message() -> String {
    "確定嗎？".to_string()
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            nav_toggle_id: default_nav_toggle_id(),
            nav_links_selector: default_nav_links_selector(),
            nav_open_class: default_nav_open_class(),
            confirm_attribute: default_confirm_attribute(),
            default_confirm_message: default_confirm_message(),
        }
    }
}

impl EnhanceConfig {
    /// Parse a configuration from a JSON object string
    pub fn from_json(json: &str) -> EnhanceResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
