//! File download via a synthetic anchor element.
//!
//! The CSV is wrapped in a `Blob`, exposed through an object URL, and
//! clicked through a hidden `<a download>` that is removed right after.

/// MIME type for exported claim lists.
pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

/// Current time as an ISO-8601 UTC string (`YYYY-MM-DDTHH:MM:SS.sssZ`).
pub fn now_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Offer `content` to the user as a file named `filename`.
///
/// # Errors
///
/// Returns an error string if the browser refuses to build the blob, object
/// URL, or anchor element.
pub fn trigger_download(filename: &str, content: &str, mime: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let js_err = |e: wasm_bindgen::JsValue| format!("{e:?}");
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let body = document.body().ok_or("no document body")?;

        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(content));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

        let link = document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "anchor cast failed".to_owned())?;
        link.set_href(&url);
        link.set_download(filename);
        let _ = link.style().set_property("visibility", "hidden");
        body.append_child(&link).map_err(js_err)?;
        link.click();
        body.remove_child(&link).map_err(js_err)?;
        let _ = web_sys::Url::revoke_object_url(&url);
        log::info!("downloaded {filename} ({} bytes)", content.len());
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, content, mime);
        Err("downloads are only available in the browser".to_owned())
    }
}
