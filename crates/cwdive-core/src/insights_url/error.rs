//! Decode error for console URLs.

use thiserror::Error;

/// A structural marker the decoder requires is missing.
///
/// Optional query fields are never an error; only the skeleton of the URL
/// (region parameter, fragment, `queryDetail` payload) is mandatory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedUrlError {
    /// No `region=<value>` query parameter ahead of the fragment.
    #[error("invalid URL: no region parameter before the fragment")]
    MissingRegion,
    /// The URL has no fragment at all.
    #[error("invalid URL: no fragment")]
    MissingFragment,
    /// The fragment decoded but carries no `queryDetail` payload.
    #[error("invalid URL: no queryDetail in the fragment")]
    MissingQueryDetail,
}
