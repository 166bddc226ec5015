//! Hero sources.
//!
//! A source produces the full hero collection once, at load time. This is
//! the only place malformed data is detected: a record missing a field or
//! a document of the wrong shape becomes a typed [`DatasetError`] here
//! instead of surfacing later inside search or narration.

use crate::error::DatasetError;
use crate::hero::Hero;
use std::path::{Path, PathBuf};

/// Trait for anything that can supply the hero collection.
///
/// # Examples
///
/// ```rust
/// use herodex::source::{HeroSource, JsonStrSource};
///
/// let source = JsonStrSource::new(r#"[{
///     "id": 1, "name": "A-Bomb", "image": "",
///     "powerstats": {"intelligence":38,"strength":100,"speed":17,"durability":80,"power":24,"combat":64}
/// }]"#);
///
/// let heroes = source.load().unwrap();
/// assert_eq!(heroes.len(), 1);
/// ```
pub trait HeroSource: Send + Sync {
    /// Load every hero, in dataset order.
    fn load(&self) -> Result<Vec<Hero>, DatasetError>;

    /// Short description used in log output.
    fn describe(&self) -> String;
}

/// Reads a JSON array of heroes from a file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HeroSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Hero>, DatasetError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| DatasetError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_heroes(&text)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parses heroes from JSON text already in memory.
#[derive(Debug, Clone)]
pub struct JsonStrSource {
    text: String,
}

impl JsonStrSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl HeroSource for JsonStrSource {
    fn load(&self) -> Result<Vec<Hero>, DatasetError> {
        parse_heroes(&self.text)
    }

    fn describe(&self) -> String {
        format!("<inline json, {} bytes>", self.text.len())
    }
}

/// Parse a JSON document holding an array of heroes.
pub fn parse_heroes(text: &str) -> Result<Vec<Hero>, DatasetError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    if !value.is_array() {
        return Err(DatasetError::NotAnArray(json_kind(&value).to_string()));
    }
    Ok(serde_json::from_value(value)?)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ONE_HERO: &str = r#"[{
        "id": "7", "name": "Bane", "image": "bane.jpg",
        "powerstats": {"intelligence":88,"strength":38,"speed":23,"durability":56,"power":51,"combat":95}
    }]"#;

    #[test]
    fn test_str_source() {
        let heroes = JsonStrSource::new(ONE_HERO).load().unwrap();
        assert_eq!(heroes[0].name(), "Bane");
        assert_eq!(heroes[0].id().as_str(), "7");
    }

    #[test]
    fn test_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ONE_HERO.as_bytes()).unwrap();

        let source = JsonFileSource::new(file.path());
        let heroes = source.load().unwrap();
        assert_eq!(heroes.len(), 1);
        assert_eq!(source.describe(), file.path().display().to_string());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("nope.json"));
        assert!(matches!(source.load(), Err(DatasetError::Io { .. })));
    }

    #[test]
    fn test_object_document_is_rejected() {
        let err = parse_heroes(r#"{"heroes": []}"#).unwrap_err();
        assert!(matches!(err, DatasetError::NotAnArray(ref kind) if kind == "object"));
    }

    #[test]
    fn test_missing_powerstat_is_parse_error() {
        let text = r#"[{"id": 1, "name": "Half", "image": "",
            "powerstats": {"intelligence":1,"strength":1,"speed":1,"durability":1,"power":1}}]"#;
        assert!(matches!(parse_heroes(text), Err(DatasetError::Parse(_))));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        assert!(matches!(parse_heroes("[{"), Err(DatasetError::Parse(_))));
    }

    #[test]
    fn test_empty_array() {
        assert!(parse_heroes("[]").unwrap().is_empty());
    }
}
