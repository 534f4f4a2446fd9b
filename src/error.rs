use wasm_bindgen::JsValue;

/// Failures while bringing a scene up.
///
/// Nothing in the frame loop itself can fail; these are all mount-time.
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("element #{0} is not a {1}")]
    WrongElement(String, &'static str),

    #[error("WebGL2 not supported")]
    NoWebGl2,

    #[error("shader compile failed: {0}")]
    ShaderCompile(String),

    #[error("program link failed: {0}")]
    ProgramLink(String),

    #[error("failed to allocate {0}")]
    Allocation(&'static str),

    #[error("uniform {0} not found")]
    MissingUniform(&'static str),

    #[error("{0}")]
    Js(String),
}

impl From<JsValue> for SceneError {
    fn from(value: JsValue) -> Self {
        SceneError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<SceneError> for JsValue {
    fn from(err: SceneError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// A modal identifier coming from markup that names no known dialog.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown modal `{0}`")]
pub struct UnknownModal(pub String);

/// A `data-options` key that names no known option list.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown option list `{0}`")]
pub struct UnknownOptionList(pub String);
