//! Loading format tables from JSON and TOML

use crate::{BuiltinProvider, Locale, LocaleError, LocaleFormatProvider, LocaleFormats, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Supported format file types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "toml" => Some(FileFormat::Toml),
            _ => None,
        }
    }
}

/// Parses format tables from text or files.
pub struct FormatLoader {
    format: FileFormat,
}

impl FormatLoader {
    pub fn new(format: FileFormat) -> Self {
        Self { format }
    }

    /// Detect the file format from the extension.
    pub fn auto(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| LocaleError::UnsupportedFormat(path.display().to_string()))?;

        let format = FileFormat::from_extension(ext)
            .ok_or_else(|| LocaleError::UnsupportedFormat(path.display().to_string()))?;

        Ok(Self::new(format))
    }

    /// Load a table from a file.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<LocaleFormats> {
        let content = fs::read_to_string(path)?;
        self.parse(&content)
    }

    /// Parse a table from text. Fields left out keep their English defaults.
    pub fn parse(&self, content: &str) -> Result<LocaleFormats> {
        let formats: LocaleFormats = match self.format {
            FileFormat::Json => serde_json::from_str(content)?,
            FileFormat::Toml => toml::from_str(content)?,
        };

        if formats.number.delimiter == Some(formats.number.separator) {
            return Err(LocaleError::ParseError(format!(
                "separator and delimiter are both {:?}",
                formats.number.separator
            )));
        }

        Ok(formats)
    }
}

/// Provider holding tables registered at runtime, layered over another provider.
///
/// # Examples
///
/// ```
/// use hform_locale::{Locale, LocaleFormatProvider, MemoryProvider};
///
/// let provider = MemoryProvider::new();
/// provider
///     .insert_json("pt", r#"{ "number": { "separator": ",", "delimiter": "." } }"#)
///     .unwrap();
///
/// let pt_br: Locale = "pt-BR".parse().unwrap();
/// assert_eq!(provider.number_format(&pt_br).separator, ',');
/// ```
pub struct MemoryProvider {
    tables: RwLock<HashMap<String, Arc<LocaleFormats>>>,
    fallback: Arc<dyn LocaleFormatProvider>,
}

impl MemoryProvider {
    /// Empty provider falling back to the built-in tables.
    pub fn new() -> Self {
        Self::with_fallback(Arc::new(BuiltinProvider))
    }

    /// Empty provider falling back to `fallback`.
    pub fn with_fallback(fallback: Arc<dyn LocaleFormatProvider>) -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
            fallback,
        }
    }

    /// Register a table for a locale, replacing any previous one.
    pub fn insert(&self, locale: &Locale, formats: LocaleFormats) {
        self.tables.write().insert(locale.tag(), Arc::new(formats));
    }

    /// Register a table given as JSON text.
    pub fn insert_json(&self, tag: &str, json: &str) -> Result<()> {
        let locale = Locale::parse(tag)?;
        let formats = FormatLoader::new(FileFormat::Json).parse(json)?;
        self.insert(&locale, formats);
        Ok(())
    }

    /// Register a table given as TOML text.
    pub fn insert_toml(&self, tag: &str, toml: &str) -> Result<()> {
        let locale = Locale::parse(tag)?;
        let formats = FormatLoader::new(FileFormat::Toml).parse(toml)?;
        self.insert(&locale, formats);
        Ok(())
    }

    /// Load one file; the locale is taken from the file stem (`es-AR.toml`).
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Locale> {
        let path = path.as_ref();
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| LocaleError::ParseError(format!("Invalid filename: {:?}", path)))?;

        let locale = Locale::parse(stem)?;
        let formats = FormatLoader::auto(path)?.load_file(path)?;
        self.insert(&locale, formats);
        hform_log::debug!("loaded format table {} from {:?}", locale, path);
        Ok(locale)
    }

    /// Load every `.json` and `.toml` file of a directory.
    ///
    /// Expected structure:
    /// - `formats/es.toml`
    /// - `formats/es-AR.json`
    pub fn load_dir(&self, dir: impl AsRef<Path>) -> Result<Vec<Locale>> {
        let dir = dir.as_ref();

        if !dir.exists() {
            return Err(LocaleError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Directory not found: {:?}", dir),
            )));
        }

        let mut loaded = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let supported = path
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(FileFormat::from_extension)
                .is_some();

            if supported {
                loaded.push(self.load_file(&path)?);
            }
        }

        Ok(loaded)
    }

    /// Tags registered directly on this provider.
    pub fn tags(&self) -> Vec<String> {
        let mut tags: Vec<_> = self.tables.read().keys().cloned().collect();
        tags.sort();
        tags
    }
}

impl Default for MemoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryProvider")
            .field("tags", &self.tags())
            .finish_non_exhaustive()
    }
}

impl LocaleFormatProvider for MemoryProvider {
    fn lookup(&self, tag: &str) -> Option<Arc<LocaleFormats>> {
        self.tables
            .read()
            .get(tag)
            .cloned()
            .or_else(|| self.fallback.lookup(tag))
    }
}
