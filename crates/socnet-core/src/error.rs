use std::fmt;

/// Machine-readable error codes for scripted callers of the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidInput,
    ComputationDegenerate,
    ConfigParseError,
    EdgeListParseError,
    FileAccess,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidInput => "E1001",
            Self::ComputationDegenerate => "E2001",
            Self::ConfigParseError => "E3001",
            Self::EdgeListParseError => "E3002",
            Self::FileAccess => "E4001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid input",
            Self::ComputationDegenerate => "Metric could not be computed",
            Self::ConfigParseError => "Config file parse error",
            Self::EdgeListParseError => "Edge list parse error",
            Self::FileAccess => "File could not be read or written",
        }
    }

    /// Optional remediation hint surfaced next to the error.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::InvalidInput => {
                Some("Check that the graph is non-empty and parameters are within range.")
            }
            Self::ComputationDegenerate => {
                Some("The metric is undefined for this graph (e.g. constant degree or disconnected).")
            }
            Self::ConfigParseError => Some("Fix syntax in socnet.toml and retry."),
            Self::EdgeListParseError => {
                Some("Each data line needs two integer node ids; prefix comments with % or #.")
            }
            Self::FileAccess => Some("Check that the path exists and is accessible."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The metric a [`AnalysisError::ComputationDegenerate`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Eigenvector,
    Clustering,
    Assortativity,
    PathLength,
    PowerLaw,
}

impl Metric {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eigenvector => "eigenvector",
            Self::Clustering => "clustering",
            Self::Assortativity => "assortativity",
            Self::PathLength => "path_length",
            Self::PowerLaw => "power_law",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by analysis routines.
///
/// `InvalidInput` aborts the call. `ComputationDegenerate` is meant to be
/// recovered by the caller for the affected metric only.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{metric} is degenerate: {reason}")]
    ComputationDegenerate { metric: Metric, reason: String },
}

impl AnalysisError {
    #[must_use]
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    #[must_use]
    pub fn degenerate(metric: Metric, reason: impl Into<String>) -> Self {
        Self::ComputationDegenerate {
            metric,
            reason: reason.into(),
        }
    }

    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidInput(_) => ErrorCode::InvalidInput,
            Self::ComputationDegenerate { .. } => ErrorCode::ComputationDegenerate,
        }
    }

    /// Returns `true` for errors a caller may recover from locally.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        matches!(self, Self::ComputationDegenerate { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::{AnalysisError, ErrorCode, Metric};
    use std::collections::HashSet;

    #[test]
    fn all_codes_are_unique() {
        let all = [
            ErrorCode::InvalidInput,
            ErrorCode::ComputationDegenerate,
            ErrorCode::ConfigParseError,
            ErrorCode::EdgeListParseError,
            ErrorCode::FileAccess,
        ];

        let mut seen = HashSet::new();
        for code in all {
            assert!(seen.insert(code.code()), "duplicate code {}", code.code());
        }
    }

    #[test]
    fn code_format_is_machine_friendly() {
        let code = ErrorCode::ComputationDegenerate.code();
        assert_eq!(code.len(), 5);
        assert!(code.starts_with('E'));
        assert!(code.chars().skip(1).all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn degenerate_error_names_metric() {
        let err = AnalysisError::degenerate(Metric::Eigenvector, "did not converge");
        assert!(err.is_degenerate());
        assert_eq!(err.code(), ErrorCode::ComputationDegenerate);
        assert_eq!(err.to_string(), "eigenvector is degenerate: did not converge");
    }

    #[test]
    fn invalid_input_is_not_recoverable() {
        let err = AnalysisError::invalid("graph has no nodes");
        assert!(!err.is_degenerate());
        assert_eq!(err.code(), ErrorCode::InvalidInput);
    }
}
