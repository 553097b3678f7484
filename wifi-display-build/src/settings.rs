//! Override file parsing.

use regex::Regex;
use std::{
    fmt,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
    sync::OnceLock,
};

use crate::{Error, Result};

/// Setting value classified by its lexical shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Hexadecimal literal, kept verbatim.
    Hex(String),
    /// Decimal integer literal, kept verbatim.
    Int(String),
    /// Anything else; rendered as a quoted C string.
    Str(String),
}

impl Value {
    /// Classifies a raw value.
    ///
    /// No range checking is done, out of range numbers are left for the
    /// C compiler to reject.
    pub fn classify(raw: &str) -> Self {
        static INT: OnceLock<Regex> = OnceLock::new();
        let int = INT.get_or_init(|| Regex::new(r"^-?[0-9]+$").unwrap());

        if raw.starts_with("0x") {
            Self::Hex(raw.to_string())
        } else if int.is_match(raw) {
            Self::Int(raw.to_string())
        } else {
            Self::Str(raw.to_string())
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(v) | Self::Int(v) => write!(f, "{v}"),
            Self::Str(v) => write!(f, "\"{v}\""),
        }
    }
}

/// Settings in the order they were first defined.
///
/// Redefining a setting replaces its value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    entries: Vec<(String, Value)>,
}

impl Settings {
    /// Creates an empty set of settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Gets the value of a setting.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Whether the setting is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates over all settings.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Number of settings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no settings are defined.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overlays `overrides` on top of these settings.
    pub fn merge(&mut self, overrides: &Settings) {
        for (name, value) in overrides.iter() {
            self.insert(name, value.clone());
        }
    }
}

/// Parses a single setting line of the form `NAME=value`.
///
/// Blank lines, comment lines starting with `#` and lines without `=` yield `None`.
fn parse_line(line: &str) -> Option<(&str, Value)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (name, value) = line.split_once('=')?;
    Some((name.trim(), Value::classify(value.trim())))
}

/// Parses settings from the contents of an override file.
pub fn parse(content: &str) -> Settings {
    let mut settings = Settings::new();
    for (name, value) in content.lines().filter_map(parse_line) {
        settings.insert(name, value);
    }
    settings
}

/// Reads settings from an override file.
///
/// A missing file yields no settings.
pub fn read_settings(path: &Path) -> Result<Settings> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::info!("{} not found, using default values", path.display());
            return Ok(Settings::new());
        }
        Err(source) => return Err(Error::Io { path: path.to_path_buf(), source }),
    };

    let mut settings = Settings::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        if let Some((name, value)) = parse_line(&line) {
            settings.insert(name, value);
        }
    }

    Ok(settings)
}
