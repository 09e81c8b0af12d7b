//! Clipboard access.
//!
//! Tries the async Clipboard API first. Browsers without it, or pages where
//! it is denied, fall back to selecting the report text area and running the
//! legacy `copy` command.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

/// Copy `text`, using `source` for the fallback path.
///
/// Fallback failures are only logged; the caller reports success either way.
pub async fn copy_to_clipboard(text: &str, source: Option<&HtmlTextAreaElement>) {
    match write_with_clipboard_api(text).await {
        Ok(()) => log::info!("📋 Report copied ({} characters)", text.chars().count()),
        Err(e) => {
            log::warn!("Clipboard API failed, using copy command: {:?}", e);
            match source {
                Some(textarea) => {
                    if let Err(e) = copy_with_command(textarea) {
                        log::warn!("Copy command failed: {:?}", e);
                    }
                }
                None => log::warn!("No report text area to copy from"),
            }
        }
    }
}

async fn write_with_clipboard_api(text: &str) -> Result<(), JsValue> {
    let navigator = gloo_utils::window().navigator();

    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(JsValue::from_str("Clipboard API unavailable"));
    }

    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?
        .dyn_into::<Function>()?;
    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into::<Promise>()?;

    JsFuture::from(promise).await?;
    Ok(())
}

fn copy_with_command(textarea: &HtmlTextAreaElement) -> Result<(), JsValue> {
    textarea.select();

    let document = gloo_utils::document()
        .dyn_into::<HtmlDocument>()
        .map_err(JsValue::from)?;

    if document.exec_command("copy")? {
        Ok(())
    } else {
        Err(JsValue::from_str("copy command was rejected"))
    }
}
