//! Pure extraction: source text in, generated Dart files out.
//!
//! Nothing here touches the filesystem; see `output` for writing.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::levels::LevelDescriptor;

pub const MODEL_IMPORT: &str = "import '../models/level.dart';";

/// Which part of the source the level patterns run against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Whole source file. The initializer body only has to exist.
    #[default]
    Full,
    /// Only the body of `_initializeLevels`.
    Initializer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub level_id: &'static str,
    pub filename: &'static str,
    pub accessor: String,
    /// The matched `Level(...)` literal, byte-for-byte.
    pub literal: String,
    pub contents: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub files: Vec<GeneratedFile>,
    /// Ids with no matching literal, in descriptor order.
    pub misses: Vec<&'static str>,
}

/// One report line per descriptor, in descriptor order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'a> {
    Found(&'a GeneratedFile),
    Missing(&'static str),
}

impl Extraction {
    pub fn outcomes<'a>(&'a self, levels: &[LevelDescriptor]) -> Vec<Outcome<'a>> {
        levels
            .iter()
            .map(|level| match self.files.iter().find(|f| f.level_id == level.id) {
                Some(file) => Outcome::Found(file),
                None => Outcome::Missing(level.id),
            })
            .collect()
    }
}

/// Body of `void _initializeLevels() {`, up to the first two-space indented
/// closing brace.
pub fn initializer_body(source: &str) -> Option<&str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"(?s)void _initializeLevels\(\) \{(.*?)\n  \}").unwrap());
    re.captures(source).and_then(|caps| caps.get(1)).map(|m| m.as_str())
}

pub fn render(accessor: &str, literal: &str) -> String {
    format!(
        "{}\n\n{}() {{\n  return {};\n}}\n",
        MODEL_IMPORT, accessor, literal
    )
}

pub fn extract(source: &str, levels: &[LevelDescriptor], scope: Scope) -> Extraction {
    let mut out = Extraction::default();

    let Some(body) = initializer_body(source) else {
        warn!("_initializeLevels not found in source, no levels extracted");
        out.misses = levels.iter().map(|l| l.id).collect();
        return out;
    };

    let haystack = match scope {
        Scope::Full => source,
        Scope::Initializer => body,
    };
    debug!(?scope, body_len = body.len(), scanned = haystack.len(), "scanning for levels");

    for level in levels {
        match level.regex().find(haystack) {
            Some(m) => {
                debug!(id = level.id, start = m.start(), end = m.end(), "level matched");
                let accessor = level.accessor_name();
                let literal = m.as_str().to_string();
                let contents = render(&accessor, &literal);
                out.files.push(GeneratedFile {
                    level_id: level.id,
                    filename: level.filename,
                    accessor,
                    literal,
                    contents,
                });
            }
            None => out.misses.push(level.id),
        }
    }
    out
}
