use std::fmt;

#[derive(Clone, Debug)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// Text for the single transient notice shown under a form. Auth failures
    /// carry the server's `message` field when one was present; everything
    /// else falls back to the caller's generic text.
    pub fn notice<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            AppError::Http { message, .. } if !message.is_empty() => message,
            _ => fallback,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn notice_prefers_the_server_message() {
        let err = AppError::Http {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.notice("Error signing in"), "Invalid credentials");
    }

    #[test]
    fn notice_falls_back_for_transport_errors() {
        let err = AppError::Network("Unable to reach the server: refused".to_string());
        assert_eq!(err.notice("Error signing in"), "Error signing in");

        let err = AppError::Timeout("Request timed out. Please try again.".to_string());
        assert_eq!(err.notice("Error creating account"), "Error creating account");
    }

    #[test]
    fn notice_falls_back_when_the_server_message_is_empty() {
        let err = AppError::Http {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.notice("Error signing in"), "Error signing in");
    }
}
