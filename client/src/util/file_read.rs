//! Reading user-selected files in the browser.

/// Read a selected file fully as raw bytes.
///
/// # Errors
///
/// Returns an error string if the browser cannot read the file.
#[cfg(feature = "hydrate")]
pub async fn read_bytes(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
