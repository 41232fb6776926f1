use std::path::PathBuf;

/// Errors raised while building lights, probes and lookup tables.
///
/// Evaluating a light never fails; only construction does.
#[derive(Debug, thiserror::Error)]
pub enum LightingError {
    /// I/O error reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to decode or encode an image.
    #[error("Image error for {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A light name no factory knows about.
    #[error("Unknown light type \"{0}\"")]
    UnknownLight(String),

    /// A required parameter was not supplied.
    #[error("Missing parameter \"{0}\"")]
    MissingParameter(String),

    /// A parameter was supplied with an unusable value.
    #[error("Invalid parameter \"{name}\": {message}")]
    InvalidParameter { name: String, message: String },

    /// Texel data does not match the declared resolution.
    #[error("Invalid image: {0}")]
    InvalidImage(String),
}

pub type Result<T> = std::result::Result<T, LightingError>;
