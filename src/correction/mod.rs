//! Grammar correction
//!
//! The corrector is an external collaborator invoked on demand with a
//! snapshot of the committed text, never automatically and never retried.
//! It is opaque and possibly non-idempotent; the only contract is "some
//! corrected string for non-empty input, an error otherwise".

pub mod http;

pub use http::HttpCorrector;

use crate::Result;

/// Narrow capability interface over the grammar-correction model.
pub trait TextCorrector {
    /// Correct the given text. Fails with
    /// [`Error::NoInputProvided`](crate::Error::NoInputProvided) on empty
    /// input and [`Error::CorrectionFailure`](crate::Error::CorrectionFailure)
    /// on any internal error.
    fn correct(&self, text: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}
