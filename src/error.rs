#[derive(Debug, thiserror::Error)]
pub enum AnonymizerError {
    #[error("no such strategy: {name}")]
    UnknownStrategy { name: String },

    #[error("malformed strategy spec `{spec}`: {reason}")]
    MalformedSpec { spec: String, reason: String },

    #[error("strategy {strategy} requires option `{option}`")]
    MissingOption {
        strategy: &'static str,
        option: &'static str,
    },

    #[error("invalid value `{value}` for option `{option}`: {reason}")]
    InvalidOption {
        option: String,
        value: String,
        reason: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnonymizerError>;
