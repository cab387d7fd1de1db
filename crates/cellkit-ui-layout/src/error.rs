use std::fmt;

/// Misconfiguration of a layout value.
///
/// These describe programmer errors: callers either propagate them from the
/// `try_*` constructors or let the panicking constructors abort early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    InvalidColumns { columns: usize },
    InvalidRows { rows: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::InvalidColumns { columns } => write!(
                f,
                "the number of columns must be greater than or equal to 1 (got {columns})"
            ),
            LayoutError::InvalidRows { rows } => write!(
                f,
                "the number of rows must be greater than or equal to 1 (got {rows})"
            ),
        }
    }
}

impl std::error::Error for LayoutError {}
