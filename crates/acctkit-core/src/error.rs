#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("invalid json input: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
