//! Bootstrap 5 Bindings
//!
//! The admin pages load Bootstrap's bundle; its `Modal` class is reached
//! through the `bootstrap` global.

use wasm_bindgen::prelude::*;

use admin_behaviors::{UiError, UiResult};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Modal)]
    type BootstrapModal;

    #[wasm_bindgen(catch, static_method_of = BootstrapModal, js_namespace = bootstrap, js_class = "Modal", js_name = getOrCreateInstance)]
    fn get_or_create_instance(element: &web_sys::Element) -> Result<BootstrapModal, JsValue>;

    #[wasm_bindgen(catch, method)]
    fn show(this: &BootstrapModal) -> Result<(), JsValue>;
}

/// Open the modal rooted at `element`, reusing its instance if one exists
pub fn show_modal(element: &web_sys::Element) -> UiResult<()> {
    let modal = BootstrapModal::get_or_create_instance(element)
        .map_err(|e| UiError::Js(format!("bootstrap.Modal unavailable: {:?}", e)))?;
    modal.show().map_err(|e| UiError::Js(format!("{:?}", e)))
}
