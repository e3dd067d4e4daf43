use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error(
        "Unknown facet: {0} (expected one of origami, material, manufacturing, input, output, function)"
    )]
    UnknownFacet(String),

    #[error("{0}")]
    Interaction(String),

    #[error("Cannot open paper: {0}")]
    Activation(String),

    #[error("Browser error: {0}")]
    Browser(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
