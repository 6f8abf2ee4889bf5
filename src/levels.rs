//! The fixed set of levels pulled out of the mock data service.
//!
//! Each level is matched by a `Level(...)` literal whose `id:` field comes
//! first and whose last two fields are `totalExamples` then
//! `completedExamples`. Anything in between is taken verbatim.

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelDescriptor {
    pub id: &'static str,
    pub filename: &'static str,
}

pub const LEVELS: [LevelDescriptor; 8] = [
    LevelDescriptor { id: "junior_high_1", filename: "junior_high_1_data.dart" },
    LevelDescriptor { id: "junior_high_2", filename: "junior_high_2_data.dart" },
    LevelDescriptor { id: "junior_high_3", filename: "junior_high_3_data.dart" },
    LevelDescriptor { id: "high_school_1", filename: "high_school_1_data.dart" },
    LevelDescriptor { id: "high_school_2", filename: "high_school_2_data.dart" },
    LevelDescriptor { id: "high_school_3", filename: "high_school_3_data.dart" },
    LevelDescriptor { id: "university_toeic", filename: "university_toeic_data.dart" },
    LevelDescriptor { id: "practical_english", filename: "practical_english_data.dart" },
];

impl LevelDescriptor {
    /// Pattern for this level's literal. Lazy in the middle, so the first
    /// `totalExamples`/`completedExamples` pair after the id closes it.
    pub fn pattern(&self) -> String {
        format!(
            r"(?s)Level\(\s*id: '{}'.*?totalExamples: \d+,\s*completedExamples: \d+,\s*\)",
            regex::escape(self.id)
        )
    }

    pub fn regex(&self) -> Regex {
        Regex::new(&self.pattern()).unwrap()
    }

    pub fn accessor_name(&self) -> String {
        accessor_name(self.id)
    }
}

/// `junior_high_1` -> `getJuniorHigh1Level`
pub fn accessor_name(id: &str) -> String {
    let camel: String = id.split('_').map(capitalize).collect();
    format!("get{}Level", camel)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
