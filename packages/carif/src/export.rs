//! Export of parsed documents for downstream consumers.
//!
//! Output mirrors the document model with camelCase keys, plus the derived
//! action `type` so clients don't have to classify mime types themselves.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::types::{ActionType, Document, Location, Poi, PoiAction};

/// Output formats for a parsed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable overview.
    #[default]
    Summary,
    Json,
    Yaml,
}

/// Action representation for export, including the derived type.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportAction<'a> {
    mime_type: Option<&'a str>,
    label: Option<&'a str>,
    uri: Option<&'a str>,
    #[serde(rename = "type")]
    action_type: Option<ActionType>,
}

impl<'a> From<&'a PoiAction> for ExportAction<'a> {
    fn from(action: &'a PoiAction) -> Self {
        Self {
            mime_type: action.mime_type.as_deref(),
            label: action.label.as_deref(),
            uri: action.uri.as_deref(),
            action_type: action.action_type(),
        }
    }
}

/// POI representation for export.
#[derive(Debug, Serialize)]
struct ExportPoi<'a> {
    id: Option<&'a str>,
    name: Option<&'a str>,
    description: Option<&'a str>,
    image: Option<&'a str>,
    location: Option<&'a Location>,
    actions: Vec<ExportAction<'a>>,
}

impl<'a> From<&'a Poi> for ExportPoi<'a> {
    fn from(poi: &'a Poi) -> Self {
        Self {
            id: poi.id.as_deref(),
            name: poi.name.as_deref(),
            description: poi.description.as_deref(),
            image: poi.image.as_deref(),
            location: poi.location.as_ref(),
            actions: poi.actions.iter().map(ExportAction::from).collect(),
        }
    }
}

/// Document representation for export.
#[derive(Debug, Serialize)]
struct ExportDocument<'a> {
    pois: Vec<ExportPoi<'a>>,
}

impl<'a> From<&'a Document> for ExportDocument<'a> {
    fn from(doc: &'a Document) -> Self {
        Self {
            pois: doc.pois.iter().map(ExportPoi::from).collect(),
        }
    }
}

/// Serialize a document as pretty-printed JSON.
pub fn to_json(doc: &Document) -> Result<String> {
    let json = serde_json::to_string_pretty(&ExportDocument::from(doc))?;
    Ok(format!("{json}\n"))
}

/// Serialize a document as YAML, starting with a document marker.
pub fn to_yaml(doc: &Document) -> Result<String> {
    let yaml = serde_yaml_ng::to_string(&ExportDocument::from(doc))?;
    let lines: Vec<&str> = yaml.lines().map(|l| l.trim_end()).collect();
    Ok(format!("---\n{}\n", lines.join("\n")))
}

/// Build the human-readable summary.
///
/// First line is `<n> Features parsed!`, followed by one line per POI.
pub fn to_summary(doc: &Document) -> String {
    let mut out = format!("{} Features parsed!\n", doc.len());

    for poi in &doc.pois {
        let id = poi.id.as_deref().unwrap_or("-");
        let name = poi.name.as_deref().unwrap_or("(unnamed)");
        let position = poi.location.as_ref().map_or_else(
            || "no location".to_string(),
            |loc| match loc.altitude {
                Some(alt) => format!("lon {} lat {} alt {}", loc.longitude, loc.latitude, alt),
                None => format!("lon {} lat {}", loc.longitude, loc.latitude),
            },
        );
        out.push_str(&format!(
            "  [{id}] {name} ({position}), {} action(s)\n",
            poi.actions.len()
        ));
    }

    out
}

/// Render a document in the requested format.
pub fn render(doc: &Document, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Summary => Ok(to_summary(doc)),
        OutputFormat::Json => to_json(doc),
        OutputFormat::Yaml => to_yaml(doc),
    }
}

/// Save a rendered document to a file.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
///
/// # Arguments
/// * `doc` - The document to save
/// * `format` - Output format
/// * `path` - Destination file
pub fn save(doc: &Document, format: OutputFormat, path: &Path) -> Result<()> {
    let content = render(doc, format)?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "carif-output".to_string());
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn create_test_document() -> Document {
        Document {
            pois: vec![
                Poi {
                    id: Some("hq".to_string()),
                    name: Some("Wikitude HQ".to_string()),
                    location: Some(Location::new(13.0433, 47.8225, Some(430.0))),
                    actions: vec![
                        PoiAction::new(Some("text/html"), Some("Web"), Some("http://www.wikitude.com")),
                        PoiAction::new(Some("x-unknown/type"), None::<String>, None::<String>),
                    ],
                    ..Poi::default()
                },
                Poi {
                    location: Some(Location::new(1.0, 2.0, None)),
                    ..Poi::default()
                },
            ],
        }
    }

    #[test]
    fn test_to_summary() {
        let summary = to_summary(&create_test_document());
        let lines: Vec<_> = summary.lines().collect();

        assert_eq!(lines[0], "2 Features parsed!");
        assert_eq!(
            lines[1],
            "  [hq] Wikitude HQ (lon 13.0433 lat 47.8225 alt 430), 2 action(s)"
        );
        assert_eq!(lines[2], "  [-] (unnamed) (lon 1 lat 2), 0 action(s)");
    }

    #[test]
    fn test_to_summary_empty() {
        assert_eq!(to_summary(&Document::new()), "0 Features parsed!\n");
    }

    #[test]
    fn test_to_json_includes_action_type() {
        let json = to_json(&create_test_document()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let actions = &value["pois"][0]["actions"];
        assert_eq!(actions[0]["mimeType"], "text/html");
        assert_eq!(actions[0]["type"], "OPEN_WEBPAGE");
        assert!(actions[1]["type"].is_null());
        assert_eq!(value["pois"][0]["location"]["longitude"], 13.0433);
        assert!(value["pois"][1]["location"]["altitude"].is_null());
    }

    #[test]
    fn test_to_yaml() {
        let yaml = to_yaml(&create_test_document()).unwrap();

        assert!(yaml.starts_with("---\n"));
        assert!(yaml.contains("mimeType: text/html"));
        assert!(yaml.contains("type: OPEN_WEBPAGE"));
    }

    #[test]
    fn test_render_dispatch() {
        let doc = create_test_document();
        assert_eq!(render(&doc, OutputFormat::Summary).unwrap(), to_summary(&doc));
        assert_eq!(render(&doc, OutputFormat::Json).unwrap(), to_json(&doc).unwrap());
    }

    #[test]
    fn test_save() {
        let doc = create_test_document();
        let temp_dir = tempdir().unwrap();
        let output_path = temp_dir.path().join("pois.json");

        save(&doc, OutputFormat::Json, &output_path).unwrap();

        let content = fs::read_to_string(&output_path).unwrap();
        assert_eq!(content, to_json(&doc).unwrap());
        assert!(!temp_dir.path().join(".pois.json.tmp").exists());
    }
}
