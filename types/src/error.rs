use serde::{Deserialize, Serialize};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A serializable error for client rendering.
///
/// When `RUST_BACKTRACE=1` is set, the message will include the full backtrace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Error {
    /// The error message (includes chain and backtrace from eyre's Debug output)
    pub message: String,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl From<eyre::Report> for Error {
    fn from(report: eyre::Report) -> Self {
        Self {
            message: format!("{:?}", report),
        }
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self {
            message: s.to_string(),
        }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self { message: s }
    }
}

#[cfg(test)]
mod tests {
    use eyre::WrapErr;

    use super::*;

    #[test]
    fn report_chain_is_kept_in_message() {
        let result: std::result::Result<(), std::fmt::Error> = Err(std::fmt::Error);
        let error: Error = result.wrap_err("rendering failed").unwrap_err().into();

        assert!(error.message.contains("rendering failed"));
        assert!(error.message.contains("an error occurred when formatting"));
    }

    #[test]
    fn err_macro_formats_arguments() {
        let error = crate::err!("page {} of {}", 3, 2);
        assert!(error.to_string().starts_with("page 3 of 2"));
    }
}
