use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum EnhanceError {
    #[error("no global window available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for EnhanceError {
    fn from(value: JsValue) -> Self {
        EnhanceError::Js(format!("{:?}", value))
    }
}

pub type Result<T> = std::result::Result<T, EnhanceError>;
