use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Library directory not found: {0}")]
    LibraryNotFound(String),

    #[error("Custom hook failed: {0}")]
    Hook(String),

    #[error("README generation failed: {0}")]
    Readme(String),

    #[error("Invalid partials file {path}: {message}")]
    Partials { path: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::Config(_) => "CONFIG_ERROR",
            Error::LibraryNotFound(_) => "LIBRARY_NOT_FOUND",
            Error::Hook(_) => "HOOK_FAILED",
            Error::Readme(_) => "README_GENERATION_FAILED",
            Error::Partials { .. } => "PARTIALS_INVALID",
            Error::Io(_) => "IO_ERROR",
            Error::Yaml(_) => "YAML_ERROR",
            Error::Other(_) => "ERROR",
        }
    }
}
