#[derive(Debug, thiserror::Error)]
pub enum Error {
    // config errors
    #[error("config dir was not found, {message}")]
    ConfigDirNotFound { message: String },

    #[error("failed to load config, {message}")]
    ConfigLoadFailed {
        message: String,

        #[source]
        source: anyhow::Error,
    },

    // logging errors
    #[error("failed to initialize logging, {message}")]
    LoggingInitFailed {
        message: String,

        #[source]
        source: anyhow::Error,
    },

    // label errors
    #[error("unknown label source: '{source_name}'")]
    InvalidLabelSource { source_name: String },
}
