//! Light labels and daylight classification derived from image filenames.

/// Extensions recognized as light layers (case-insensitive).
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

const PREFIX_SEPARATOR: &str = " - ";

/// Split off a recognized image extension, if any.
fn image_stem(filename: &str) -> Option<&str> {
    let (stem, ext) = filename.rsplit_once('.')?;
    IMAGE_EXTENSIONS
        .iter()
        .any(|known| ext.eq_ignore_ascii_case(known))
        .then_some(stem)
}

/// True when the filename ends with a recognized image extension.
pub fn is_image_file(filename: &str) -> bool {
    image_stem(filename).is_some()
}

/// Human-facing label for a light image.
///
/// Strips the extension, keeps only what follows the first `" - "`, turns
/// underscores into spaces, uppercases and trims.
///
/// `sanitize_label("Camera 01 - DOME_LUZ.png") == "DOME LUZ"`.
pub fn sanitize_label(filename: &str) -> String {
    let name = image_stem(filename).unwrap_or(filename);
    let name = match name.split_once(PREFIX_SEPARATOR) {
        Some((_, suffix)) => suffix,
        None => name,
    };
    name.replace('_', " ").to_uppercase().trim().to_string()
}

/// Decides which lights follow the ambient daylight control.
#[derive(Debug, Clone)]
pub struct DaylightClassifier {
    keywords: Vec<String>,
}

impl DaylightClassifier {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(cfg: &crate::config::ClassificationConfig) -> Self {
        Self::new(cfg.daylight_keywords.iter().cloned())
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Substring match against the (already uppercase) label.
    pub fn is_daylight(&self, label: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| !k.is_empty() && label.contains(k.as_str()))
    }
}

impl Default for DaylightClassifier {
    fn default() -> Self {
        Self::from_config(&crate::config::ClassificationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_label() {
        assert_eq!(sanitize_label("Camera 01 - DOME_LUZ.png"), "DOME LUZ");
        assert_eq!(sanitize_label("sala.jpg"), "SALA");
        assert_eq!(sanitize_label("spot_teto.JPEG"), "SPOT TETO");
        assert_eq!(sanitize_label("a - b - c.webp"), "B - C");
        assert_eq!(sanitize_label(" _pendente_ .png"), "PENDENTE");
    }

    #[test]
    fn test_sanitize_label_keeps_unknown_extension() {
        assert_eq!(sanitize_label("notes.txt"), "NOTES.TXT");
    }

    #[test]
    fn test_is_image_file() {
        assert!(is_image_file("FINAL.png"));
        assert!(is_image_file("x.JPG"));
        assert!(is_image_file("x.webp"));
        assert!(!is_image_file("viewerState.json"));
        assert!(!is_image_file("png"));
    }

    #[test]
    fn test_daylight_classifier_default_keywords() {
        let c = DaylightClassifier::default();
        assert!(c.is_daylight("DOME LUZ"));
        assert!(c.is_daylight("CORTINA ESQUERDA"));
        assert!(c.is_daylight("SOLAR"));
        assert!(!c.is_daylight("PENDENTE MESA"));
    }

    #[test]
    fn test_daylight_classifier_custom_keywords() {
        let c = DaylightClassifier::new(["JANELA"]);
        assert!(c.is_daylight("JANELA SALA"));
        assert!(!c.is_daylight("DOME"));
        assert!(!DaylightClassifier::new([""]).is_daylight("ANY"));
    }
}
