//! Fetch lifecycle shared by every collection page.
//!
//! DESIGN
//! ======
//! One generic state type covers all five list views. A page only ever sees
//! `Loading`, `Failed` or `Loaded`; data from an earlier load is never shown
//! next to a spinner or an error.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

use crate::net::error::ApiError;

/// Local state of one collection view.
#[derive(Clone, Debug, PartialEq)]
pub enum CollectionState<T> {
    Loading,
    Failed(String),
    Loaded(Vec<T>),
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

/// Data-free projection of [`CollectionState`] used by the frame component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Failed(String),
    Loaded(usize),
}

impl<T> CollectionState<T> {
    /// Enter `Loading`, dropping whatever was shown before.
    pub fn begin_load(&mut self) {
        *self = Self::Loading;
    }

    /// Apply the outcome of a fetch.
    pub fn finish(&mut self, result: Result<Vec<T>, ApiError>) {
        *self = match result {
            Ok(items) => Self::Loaded(items),
            Err(e) => Self::Failed(e.to_string()),
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Records to render; empty unless loaded.
    pub fn items(&self) -> &[T] {
        match self {
            Self::Loaded(items) => items.as_slice(),
            _ => &[],
        }
    }

    pub fn count(&self) -> usize {
        self.items().len()
    }

    pub fn status(&self) -> LoadStatus {
        match self {
            Self::Loading => LoadStatus::Loading,
            Self::Failed(message) => LoadStatus::Failed(message.clone()),
            Self::Loaded(items) => LoadStatus::Loaded(items.len()),
        }
    }
}
