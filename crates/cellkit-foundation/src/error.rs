use crate::IndexPath;
use std::fmt;

/// Misconfiguration of a collection container.
///
/// The owner skipped a setup step before the container was asked for items.
/// This never depends on the data being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    MissingItemProvider { index_path: IndexPath },
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionError::MissingItemProvider { index_path } => write!(
                f,
                "item {index_path} requested before an item provider was set; \
                 call set_item_provider first"
            ),
        }
    }
}

impl std::error::Error for CollectionError {}
