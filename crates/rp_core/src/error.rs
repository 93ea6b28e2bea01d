use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Not enough present players: found {found}, need at least {required}")]
    InsufficientPlayers { found: usize, required: usize },

    #[error("No schedule has been generated yet")]
    NoSchedule,

    #[error("Invalid game format: {rotation_minutes}-minute rotations do not divide a {total_minutes}-minute game")]
    InvalidFormat { total_minutes: u32, rotation_minutes: u32 },

    #[error("Competitive balance out of range (0..=100): {value}")]
    BalanceOutOfRange { value: u8 },

    #[error("Invalid roster: {0}")]
    InvalidRoster(String),

    #[error("Invalid JSON request: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    #[error("Unsupported schema version: {found}")]
    UnsupportedSchemaVersion { found: u8 },
}

impl ScheduleError {
    /// All scheduling errors are user-correctable: fix the input and retry.
    /// Malformed JSON is the one case the caller cannot recover by toggling
    /// attendance or moving a slider.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ScheduleError::InvalidRequest(_))
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_players_message_names_counts() {
        let err = ScheduleError::InsufficientPlayers { found: 2, required: 3 };
        assert_eq!(err.to_string(), "Not enough present players: found 2, need at least 3");
        assert!(err.is_recoverable());
    }

    #[test]
    fn invalid_request_is_not_recoverable() {
        let err: ScheduleError =
            serde_json::from_str::<serde_json::Value>("{not json").unwrap_err().into();
        assert!(!err.is_recoverable());
    }
}
