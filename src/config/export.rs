//! Export configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::ports::ExportFormat;

/// Document export settings
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Write a document when the interview completes
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub format: ExportFormat,

    /// Directory exports are written into
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// File stem; the extension comes from the format
    #[serde(default = "default_base_filename")]
    pub base_filename: String,

    /// Pandoc executable; PATH lookup when unset
    pub pandoc_path: Option<String>,

    /// PDF conversion timeout in seconds
    #[serde(default = "default_pdf_timeout")]
    pub pdf_timeout_secs: u64,
}

impl ExportConfig {
    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.pdf_timeout_secs == 0 || self.pdf_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyOutputDir);
        }
        let name = self.base_filename.trim();
        if name.is_empty() || name.contains(&['/', '\\'][..]) || name == "." || name == ".." {
            return Err(ValidationError::InvalidBaseFilename(
                self.base_filename.clone(),
            ));
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            format: ExportFormat::default(),
            output_dir: default_output_dir(),
            base_filename: default_base_filename(),
            pandoc_path: None,
            pdf_timeout_secs: default_pdf_timeout(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./intake-exports")
}

fn default_base_filename() -> String {
    "intake-summary".to_string()
}

fn default_pdf_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_defaults() {
        let config = ExportConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.format, ExportFormat::Pdf);
        assert_eq!(config.output_dir, PathBuf::from("./intake-exports"));
        assert_eq!(config.base_filename, "intake-summary");
        assert!(config.pandoc_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_timeout_bounds() {
        let mut config = ExportConfig::default();

        config.pdf_timeout_secs = 0;
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));

        config.pdf_timeout_secs = 301;
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));

        config.pdf_timeout_secs = 300;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_base_filename_must_be_bare() {
        let config = ExportConfig {
            base_filename: "../escape".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidBaseFilename(_))
        ));
    }

    #[test]
    fn test_export_deserialization() {
        let json = r#"{
            "enabled": true,
            "format": "html",
            "output_dir": "/tmp/out"
        }"#;

        let config: ExportConfig = serde_json::from_str(json).unwrap();
        assert!(config.enabled);
        assert_eq!(config.format, ExportFormat::Html);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.pdf_timeout_secs, 30);
    }
}
