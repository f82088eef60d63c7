use slide_carousel_core::SetupError;
use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum AttachError {
    #[error("window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("no element matches '{selector}'")]
    MissingElement { selector: String },
    #[error("element '{selector}' is not an html element")]
    NotHtmlElement { selector: String },
    #[error("invalid data-carousel config: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error("dom call failed: {0}")]
    Js(String),
}

impl From<JsValue> for AttachError {
    fn from(value: JsValue) -> Self {
        AttachError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}
