#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Failed to open controlling terminal {path}: {source}")]
    TtyOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to switch terminal mode: {0}")]
    RawMode(#[source] std::io::Error),

    #[error("Failed to read from terminal: {0}")]
    TtyRead(#[source] std::io::Error),

    #[error("Failed to write menu output: {0}")]
    Output(#[source] std::io::Error),
}
