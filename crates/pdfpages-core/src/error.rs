use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfPagesError {
    #[error("Failed to parse PDF: {0}")]
    ParseError(String),

    #[error("Invalid page: {0}")]
    InvalidPage(String),

    #[error("PDF operation failed: {0}")]
    OperationError(String),
}
