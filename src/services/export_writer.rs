// src/services/export_writer.rs
// DOCUMENTATION: Export file output
// PURPOSE: Write the export document as pretty-printed UTF-8 JSON

use crate::errors::PlacesError;
use crate::models::ExportDocument;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct ExportWriter;

impl ExportWriter {
    /// Write the document to `path`, replacing any existing file
    /// DOCUMENTATION: Creates missing parent directories. Output uses a
    /// 2-space indent and keeps non-ASCII characters as-is.
    pub fn write(path: &Path, document: &ExportDocument) -> Result<(), PlacesError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, document)?;
        writer.flush()?;

        log::info!(
            "Wrote {} actors to {}",
            document.total(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Actor, Category};

    fn actor() -> Actor {
        Actor {
            id: "ChIJ1".to_string(),
            name: "Café de la Place".to_string(),
            category: Category::Restaurant,
            description: "cafe, food, point_of_interest".to_string(),
            address: "Place Fabre d'Olivet, Ganges".to_string(),
            phone: "Non renseigné".to_string(),
            email: String::new(),
            website: String::new(),
            horaires: "Horaires non renseignés".to_string(),
            specialites: vec!["cafe".to_string(), "food".to_string()],
            lat: 43.9339,
            lng: 3.7086,
            image: "https://example.test/photo.jpg".to_string(),
            rating: serde_json::Number::from_f64(4.2).unwrap(),
            reviews_count: 88,
            google_maps_url: "https://maps.google.com/?cid=1".to_string(),
        }
    }

    #[test]
    fn test_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("nested").join("actors-data.json");

        ExportWriter::write(&path, &ExportDocument::new()).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let object = written.as_object().unwrap();
        assert_eq!(object.len(), 6);
        for category in Category::ALL {
            assert!(object[category.as_str()].as_array().unwrap().is_empty());
        }
    }

    #[test]
    fn test_pretty_printed_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actors-data.json");
        let mut document = ExportDocument::new();
        document.push(actor());

        ExportWriter::write(&path, &document).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("{\n  \"commerce\": []"));
        assert!(content.contains("\"name\": \"Café de la Place\""));
        assert!(content.contains("\"horaires\": \"Horaires non renseignés\""));
        assert!(!content.contains("\\u00e9"));
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actors-data.json");
        fs::write(&path, "previous run with much longer content than the new one").unwrap();

        ExportWriter::write(&path, &ExportDocument::new()).unwrap();

        let written: ExportDocument =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, ExportDocument::new());
    }

    #[test]
    fn test_unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("data");
        fs::write(&blocker, "not a directory").unwrap();

        let err = ExportWriter::write(&blocker.join("actors-data.json"), &ExportDocument::new())
            .unwrap_err();
        assert!(matches!(err, PlacesError::IoError(_)));
    }
}
