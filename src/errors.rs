use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Unable to open file {0} {1}")]
    FileOpenError(String, String),
    #[error("Unable to read file {0} {1}")]
    FileReadError(String, String),
    #[error("Unable to create file {0} {1}")]
    FileCreationError(String, String),
    #[error("Failed to parse config {0} {1}")]
    ConfigError(String, String),
    #[error("{0} has no type name line")]
    MissingTypeName(String),
    #[error("Failed to generated {0} code {1}")]
    CodeGenerationError(String, String),
}
