//! EXIF metadata for the image-info page

use exif::{In, Tag, Value};
use std::{fs::File, io::BufReader, path::Path};

/// The subset of EXIF data shown in the info page.
///
/// Missing or unreadable EXIF segments simply leave the fields empty; the
/// info page falls back to filesystem facts.
#[derive(Debug, Clone, Default)]
pub struct ImageMetadata {
    pub captured: Option<String>,
    pub camera_make: Option<String>,
    pub camera_model: Option<String>,
}

pub fn read_metadata(path: &Path) -> ImageMetadata {
    let Ok(file) = File::open(path) else {
        return ImageMetadata::default();
    };

    let mut reader = BufReader::new(file);
    let Ok(exif) = exif::Reader::new().read_from_container(&mut reader) else {
        return ImageMetadata::default();
    };

    ImageMetadata {
        captured: field_text(&exif, Tag::DateTimeOriginal),
        camera_make: field_text(&exif, Tag::Make),
        camera_model: field_text(&exif, Tag::Model),
    }
}

fn field_text(exif: &exif::Exif, tag: Tag) -> Option<String> {
    let field = exif.get_field(tag, In::PRIMARY)?;

    let text = match &field.value {
        Value::Ascii(values) => {
            let bytes = values.first()?;
            String::from_utf8_lossy(bytes).trim().to_string()
        }
        _ => field.display_value().to_string(),
    };

    if text.is_empty() { None } else { Some(text) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_empty_metadata() {
        let meta = read_metadata(Path::new("/nonexistent/rotunda.jpg"));
        assert!(meta.captured.is_none());
        assert!(meta.camera_make.is_none());
        assert!(meta.camera_model.is_none());
    }

    #[test]
    fn file_without_exif_yields_empty_metadata() {
        let path = std::env::temp_dir().join("rotunda-metadata-test.jpg");
        std::fs::write(&path, b"no exif here").unwrap();

        let meta = read_metadata(&path);
        assert!(meta.captured.is_none());

        let _ = std::fs::remove_file(&path);
    }
}
