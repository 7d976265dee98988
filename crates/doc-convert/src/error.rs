use std::path::PathBuf;

use thiserror::Error;

/// Errors from routing or running a converter.

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Invalid converter command: {0}")]
    InvalidCommand(String),

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {}: {stderr}", exit_label(.code))]
    Failed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Converter produced no output at {}", .0.display())]
    MissingOutput(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_display_with_status() {
        let err = ConvertError::Failed {
            program: "soffice".to_string(),
            code: Some(1),
            stderr: "source file could not be loaded".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "soffice exited with status 1: source file could not be loaded"
        );
    }

    #[test]
    fn test_failed_display_killed_by_signal() {
        let err = ConvertError::Failed {
            program: "pdf2docx".to_string(),
            code: None,
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), "pdf2docx exited with a signal: ");
    }
}
