use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error performing IO")]
    Io(#[from] std::io::Error),

    #[error("Error reading or writing the data file")]
    Json(#[from] serde_json::Error),

    #[error("An entry for this image already exists")]
    KeyAlreadyExists,

    #[error("The clipboard is not available")]
    Clipboard,
}
