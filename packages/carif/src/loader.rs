//! Loading CARIF documents from strings and files.
//!
//! Thin front-end over [`Parser`]: reads the file, builds the `roxmltree`
//! tree and runs the parser on it.

use std::fs;
use std::path::Path;

use crate::error::{CarifError, Result};
use crate::parser::Parser;
use crate::types::Document;

/// Read CARIF XML content from a file.
///
/// # Arguments
/// * `path` - File to read
/// * `max_size` - Maximum accepted file size in bytes
///
/// # Returns
/// Raw XML content as a string
pub fn read_carif_xml(path: &Path, max_size: u64) -> Result<String> {
    let size = fs::metadata(path)?.len();
    if size > max_size {
        return Err(CarifError::InputTooLarge {
            path: path.to_path_buf(),
            size,
            max: max_size,
        });
    }

    let xml = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = xml.len(), "Read CARIF file");
    Ok(xml)
}

/// Parse CARIF XML content into a [`Document`].
///
/// # Examples
/// ```
/// use carif_parser::loader::parse_carif_str;
///
/// let doc = parse_carif_str("<Features/>").unwrap();
/// assert!(doc.is_empty());
/// ```
pub fn parse_carif_str(xml: &str) -> Result<Document> {
    let tree = roxmltree::Document::parse(xml)?;
    let parser = Parser::new(Some(&tree));
    tracing::debug!(features = parser.feature_count(), "Located Feature elements");

    let doc = parser.parse()?;
    tracing::debug!(pois = doc.len(), "Parsed CARIF document");
    Ok(doc)
}

/// Read and parse a CARIF file.
///
/// This is a convenience function combining [`read_carif_xml`] and
/// [`parse_carif_str`].
pub fn load_carif_file(path: &Path, max_size: u64) -> Result<Document> {
    let xml = read_carif_xml(path, max_size)?;
    parse_carif_str(&xml)
}
