//! PDF byte sink

use crate::error::SinkError;
use std::path::Path;

/// Write an assembled PDF to `dest`
pub fn write_pdf(bytes: &[u8], dest: &Path) -> Result<(), SinkError> {
    std::fs::write(dest, bytes)?;
    Ok(())
}
