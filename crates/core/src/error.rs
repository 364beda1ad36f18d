use thiserror::Error;

/// Top-level error type used across the entire application.
///
/// Only the glue layers (config, theme, terminal) ever produce one; the
/// rendering engine defaults bad data instead of failing.
#[derive(Debug, Error)]
pub enum VtopError {
    #[error("config error: {0}")]
    Config(String),

    #[error("theme error: {0}")]
    Theme(String),

    #[error("terminal error: {0}")]
    Terminal(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = VtopError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert() {
        fn open() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }
        let err = open().unwrap_err();
        assert!(matches!(err, VtopError::Io { .. }));
        assert_eq!(err.to_string(), "I/O error: gone");
    }

    #[test]
    fn messages_name_the_failing_layer() {
        assert_eq!(VtopError::Config("bad".into()).to_string(), "config error: bad");
        assert_eq!(VtopError::Theme("bad".into()).to_string(), "theme error: bad");
        assert_eq!(VtopError::Terminal("bad".into()).to_string(), "terminal error: bad");
    }
}
