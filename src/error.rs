//! Error type shared by the browser initializers.
//!
//! Nothing here is fatal: initializers return these so the entry point can
//! log them and leave the rest of the page working.

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("document unavailable")]
    NoDocument,
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("dom operation failed: {0}")]
    Dom(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Dom(message)
    }
}
