//! Contract for the external quote fetcher.
//!
//! Core never talks to the network itself; the binary plugs in a concrete
//! source and the save workflow consumes whatever it returns.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type FetchResult<T> = Result<T, FetchError>;

/// Failure to obtain candidate quotes. Never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport-level failure (DNS, TLS, timeout, ...).
    Network(String),
    /// The page was reached but answered with a non-success status.
    Status(u16),
    /// The page could not be turned into quotes.
    Extract(String),
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(message) => write!(f, "could not reach quote source: {message}"),
            Self::Status(code) => write!(f, "quote source answered with HTTP status {code}"),
            Self::Extract(message) => write!(f, "could not read quotes from page: {message}"),
        }
    }
}

impl Error for FetchError {}

/// Supplier of candidate quote strings for an author.
pub trait QuoteSource {
    /// Returns at most `limit` candidate quotes, in source order.
    fn fetch_quotes(&self, author: &str, limit: usize) -> FetchResult<Vec<String>>;
}

impl<S: QuoteSource + ?Sized> QuoteSource for &S {
    fn fetch_quotes(&self, author: &str, limit: usize) -> FetchResult<Vec<String>> {
        (**self).fetch_quotes(author, limit)
    }
}
