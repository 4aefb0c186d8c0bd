//! Carousel State
//!
//! Load state of the card list and the per-card image state.

use std::future::Future;

use card_source::{DisplayItem, LoadError};
use futures::future::Abortable;

/// Skeleton cards shown while loading
pub const SKELETON_COUNT: usize = 3;

/// Result of the one-shot card load
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    /// User-facing message
    Failed(String),
    Ready(Vec<DisplayItem>),
}

impl LoadState {
    pub fn from_result(result: Result<Vec<DisplayItem>, LoadError>) -> Self {
        match result {
            Ok(items) => LoadState::Ready(items),
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }

    pub fn display(&self) -> DisplayState<'_> {
        match self {
            LoadState::Loading => DisplayState::Skeletons(SKELETON_COUNT),
            LoadState::Failed(message) => DisplayState::Error(message),
            LoadState::Ready(items) if items.is_empty() => DisplayState::Empty,
            LoadState::Ready(items) => DisplayState::Cards(items),
        }
    }
}

/// Await a load and hand its outcome to `apply`.
///
/// An aborted load never calls `apply`, so the state stays as it was.
/// Returns whether the outcome was applied.
pub async fn run_load<F>(load: Abortable<F>, apply: impl FnOnce(LoadState)) -> bool
where
    F: Future<Output = Result<Vec<DisplayItem>, LoadError>>,
{
    match load.await {
        Ok(result) => {
            if let Err(e) = &result {
                log::warn!("[CardSlider] Load failed: {:?}", e);
            }
            apply(LoadState::from_result(result));
            true
        }
        Err(_) => {
            log::debug!("[CardSlider] Load aborted");
            false
        }
    }
}

/// What the carousel renders; exactly one at a time
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayState<'a> {
    Skeletons(usize),
    Error(&'a str),
    Empty,
    Cards(&'a [DisplayItem]),
}

/// Image slot of a single card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageState {
    #[default]
    Loading,
    Loaded,
    Failed,
}

impl ImageState {
    /// `load` event; a failed image stays failed
    pub fn on_load(self) -> Self {
        match self {
            ImageState::Failed => ImageState::Failed,
            _ => ImageState::Loaded,
        }
    }

    /// `error` event
    pub fn on_error(self) -> Self {
        ImageState::Failed
    }

    pub fn shows_skeleton(self) -> bool {
        self == ImageState::Loading
    }

    pub fn shows_placeholder(self) -> bool {
        self == ImageState::Failed
    }
}
