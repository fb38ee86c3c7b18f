use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    /// Writing the SVG artifact failed
    #[error("Failed to write {path}: {source}")]
    Filesystem {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RenderError>;
