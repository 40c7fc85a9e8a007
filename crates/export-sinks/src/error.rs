use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to write spreadsheet: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error("Failed to write file: {0}")]
    Io(#[from] std::io::Error),
}
