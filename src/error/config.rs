use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The bot requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but contains only whitespace.
    ///
    /// Role and channel names are matched exactly against guild objects, so an
    /// empty name can never resolve to anything meaningful.
    #[error("Environment variable {0} must not be empty")]
    EmptyValue(String),
}
