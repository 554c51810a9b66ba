//! Reads page overrides from `<script type="application/json" id="admin-ui-config">`.

use web_sys::Document;

use admin_behaviors::{UiConfig, UiResult, CONFIG_ELEMENT_ID};

/// Defaults when the page carries no config block
pub fn read(document: &Document) -> UiResult<UiConfig> {
    let text = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty());

    match text {
        Some(json) => UiConfig::from_json(&json),
        None => Ok(UiConfig::default()),
    }
}
