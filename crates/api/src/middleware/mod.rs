//! Request extractors and response middleware.
//!
//! - [`validated::ValidatedJson`] -- JSON body run through the entry validator.
//! - [`validated::ValidatedQuery`] -- query string run through a query schema.
//! - [`error_detail::expose_error_detail`] -- adds 500 detail in development.
//! - [`envelope::envelope_bare_errors`] -- JSON body for bare layer errors (e.g. timeout).

pub mod envelope;
pub mod error_detail;
pub mod validated;
