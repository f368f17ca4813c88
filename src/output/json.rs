//! JSON export of harvested posts

use crate::model::PostDetail;
use crate::ScrapeError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the harvested posts to `path` as a pretty-printed JSON array
///
/// # Arguments
///
/// * `details` - The posts, in harvest order
/// * `path` - Destination file; replaced if it exists
///
/// # Returns
///
/// * `Ok(())` - File written
/// * `Err(ScrapeError)` - The file could not be created or written
pub fn write_results_json(details: &[PostDetail], path: &Path) -> Result<(), ScrapeError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, details)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    tracing::info!("Wrote {} posts to {}", details.len(), path.display());
    Ok(())
}
