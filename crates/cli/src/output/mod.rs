//! Console output for the statistics run

mod summary;
mod table;

pub use summary::render_report;
pub use table::TableFormatter;

/// Output format enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The report itself as pretty JSON
    Json,
    /// Table output (default)
    #[default]
    Table,
    /// Fixed-width plain text lines
    Plain,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Table => write!(f, "table"),
            Self::Plain => write!(f, "plain"),
        }
    }
}

/// Color helpers
pub mod colors {
    use colored::*;

    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    pub fn error(s: &str) -> ColoredString {
        s.red()
    }

    pub fn heading(s: &str) -> ColoredString {
        s.bold().cyan()
    }

    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }
}
