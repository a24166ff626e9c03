use wasm_bindgen_futures::JsFuture;

pub async fn copy_to_clipboard(text: String) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window".to_string())?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(&text))
        .await
        .map_err(|_| {
            "Clipboard write failed (HTTPS + user gesture required in some browsers)".to_string()
        })?;
    Ok(())
}
