//! Export sinks
//!
//! Thin serializers for the two artifacts the pipeline produces: the
//! filtered spreadsheet and the assembled PDF. Sinks never retry; a write
//! failure fails that export alone and leaves the other path untouched.

pub mod error;
pub mod pdf;
pub mod spreadsheet;

pub use error::SinkError;
pub use pdf::write_pdf;
pub use spreadsheet::write_spreadsheet;
