//! Page Configuration
//!
//! Selectors, element ids and literals used by the behaviors. Pages may
//! override any field through a JSON block; missing fields keep defaults.

use log::LevelFilter;
use serde::Deserialize;

use crate::domain::{UiError, UiResult};

/// Id of the `<script type="application/json">` element holding overrides
pub const CONFIG_ELEMENT_ID: &str = "admin-ui-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub items_modal: ItemsModalConfig,
    pub upload: UploadConfig,
    pub theme: ThemeConfig,
    pub status: StatusConfig,
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            items_modal: ItemsModalConfig::default(),
            upload: UploadConfig::default(),
            theme: ThemeConfig::default(),
            status: StatusConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl UiConfig {
    pub fn from_json(json: &str) -> UiResult<Self> {
        serde_json::from_str(json).map_err(|e| UiError::Config(e.to_string()))
    }

    /// `None` when `log_level` is not a known level name
    pub fn log_level_filter(&self) -> Option<LevelFilter> {
        self.log_level.trim().parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ItemsModalConfig {
    pub trigger_selector: String,
    pub table_body_id: String,
    pub modal_id: String,
    /// No timeout when unset
    pub fetch_timeout_ms: Option<u32>,
}

impl Default for ItemsModalConfig {
    fn default() -> Self {
        Self {
            trigger_selector: ".show-items".to_string(),
            table_body_id: "items-table-body".to_string(),
            modal_id: "itemsModal".to_string(),
            fetch_timeout_ms: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub input_id: String,
    pub required_file_name: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            input_id: "out_form".to_string(),
            required_file_name: "OUT-FORM.xlsx".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub button_id: String,
    pub icon_id: String,
    /// Attribute set on `<html>`
    pub attribute: String,
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            button_id: "themeToggleBtn".to_string(),
            icon_id: "themeIcon".to_string(),
            attribute: "data-bs-theme".to_string(),
            storage_key: "theme".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    pub selector: String,
    /// Form id is this prefix followed by the record id
    pub form_id_prefix: String,
    pub field_name: String,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            selector: ".change-status".to_string(),
            form_id_prefix: "status-form-".to_string(),
            field_name: "status".to_string(),
        }
    }
}
