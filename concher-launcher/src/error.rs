use thiserror::Error;

/// A location could not be started.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The OS refused to start the process (missing shell, permissions, …).
    #[error("{name}: {source}")]
    Spawn {
        name: String,
        #[source]
        source: std::io::Error,
    },
}
