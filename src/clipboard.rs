use thiserror::Error;
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no browser window available")]
    NoWindow,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::NoWindow)?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map_err(|e| ClipboardError::Rejected(format!("{:?}", e)))?;
    Ok(())
}
