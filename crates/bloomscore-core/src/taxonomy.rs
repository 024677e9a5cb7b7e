//! The Bloom's Taxonomy level catalog.
//!
//! Six cognitive levels in fixed pedagogical order, each with a weight and
//! static display metadata (English and Bengali). The catalog is read-only
//! configuration; every lookup is a total function over the closed enum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The six cognitive levels of Bloom's Taxonomy, ordered from lowest to
/// highest cognitive complexity. The derived `Ord` follows declaration
/// order, which matches the weight order 1 through 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CognitiveLevel {
    Remember,
    Understand,
    Apply,
    Analyze,
    Evaluate,
    Create,
}

/// Static metadata attached to one cognitive level.
#[derive(Debug, Clone, Serialize)]
pub struct LevelMetadata {
    /// English display title.
    pub title_en: &'static str,
    /// Bengali display title.
    pub title_bn: &'static str,
    /// English description of the level.
    pub description_en: &'static str,
    /// Bengali description of the level.
    pub description_bn: &'static str,
    /// Color token used by chart/table consumers.
    pub color: &'static str,
    /// Aggregation weight, 1 (Remember) through 6 (Create).
    pub weight: u32,
    /// Characteristic verbs for questions at this level.
    pub verbs: &'static [&'static str],
    /// Question-type labels for this level.
    pub question_types: &'static [&'static str],
}

static REMEMBER: LevelMetadata = LevelMetadata {
    title_en: "Remember",
    title_bn: "মনে রাখা",
    description_en: "Recall facts, terms, and basic concepts",
    description_bn: "তথ্য, পরিভাষা ও মৌলিক ধারণা স্মরণ করা",
    color: "#ef4444",
    weight: 1,
    verbs: &["define", "list", "recall", "name", "identify"],
    question_types: &["definition", "fill-in-the-blank", "matching"],
};

static UNDERSTAND: LevelMetadata = LevelMetadata {
    title_en: "Understand",
    title_bn: "বোঝা",
    description_en: "Explain ideas and concepts in one's own words",
    description_bn: "নিজের ভাষায় ধারণা ও বিষয়বস্তু ব্যাখ্যা করা",
    color: "#f97316",
    weight: 2,
    verbs: &["explain", "summarize", "describe", "classify", "compare"],
    question_types: &["explanation", "summary", "true-false"],
};

static APPLY: LevelMetadata = LevelMetadata {
    title_en: "Apply",
    title_bn: "প্রয়োগ",
    description_en: "Use learned material in new, concrete situations",
    description_bn: "শেখা বিষয় নতুন পরিস্থিতিতে ব্যবহার করা",
    color: "#eab308",
    weight: 3,
    verbs: &["solve", "demonstrate", "use", "implement", "execute"],
    question_types: &["problem-solving", "practical", "calculation"],
};

static ANALYZE: LevelMetadata = LevelMetadata {
    title_en: "Analyze",
    title_bn: "বিশ্লেষণ",
    description_en: "Break material into parts and examine relationships",
    description_bn: "বিষয়বস্তু ভেঙে অংশগুলোর সম্পর্ক পরীক্ষা করা",
    color: "#22c55e",
    weight: 4,
    verbs: &["differentiate", "organize", "attribute", "deconstruct", "examine"],
    question_types: &["case-study", "comparison", "diagram"],
};

static EVALUATE: LevelMetadata = LevelMetadata {
    title_en: "Evaluate",
    title_bn: "মূল্যায়ন",
    description_en: "Justify a decision or judge the value of material",
    description_bn: "সিদ্ধান্তের যৌক্তিকতা বিচার ও মান নির্ধারণ করা",
    color: "#3b82f6",
    weight: 5,
    verbs: &["judge", "critique", "defend", "justify", "appraise"],
    question_types: &["critique", "debate", "review"],
};

static CREATE: LevelMetadata = LevelMetadata {
    title_en: "Create",
    title_bn: "সৃষ্টি",
    description_en: "Produce new or original work from learned elements",
    description_bn: "শেখা উপাদান থেকে নতুন ও মৌলিক কিছু তৈরি করা",
    color: "#a855f7",
    weight: 6,
    verbs: &["design", "construct", "develop", "formulate", "compose"],
    question_types: &["project", "design", "open-ended"],
};

impl CognitiveLevel {
    /// All six levels in pedagogical order (Remember first, Create last).
    pub const ALL: [CognitiveLevel; 6] = [
        CognitiveLevel::Remember,
        CognitiveLevel::Understand,
        CognitiveLevel::Apply,
        CognitiveLevel::Analyze,
        CognitiveLevel::Evaluate,
        CognitiveLevel::Create,
    ];

    /// Static metadata for this level.
    pub fn metadata(self) -> &'static LevelMetadata {
        match self {
            CognitiveLevel::Remember => &REMEMBER,
            CognitiveLevel::Understand => &UNDERSTAND,
            CognitiveLevel::Apply => &APPLY,
            CognitiveLevel::Analyze => &ANALYZE,
            CognitiveLevel::Evaluate => &EVALUATE,
            CognitiveLevel::Create => &CREATE,
        }
    }

    /// Aggregation weight, 1 through 6.
    pub fn weight(self) -> u32 {
        self.metadata().weight
    }
}

impl fmt::Display for CognitiveLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CognitiveLevel::Remember => write!(f, "remember"),
            CognitiveLevel::Understand => write!(f, "understand"),
            CognitiveLevel::Apply => write!(f, "apply"),
            CognitiveLevel::Analyze => write!(f, "analyze"),
            CognitiveLevel::Evaluate => write!(f, "evaluate"),
            CognitiveLevel::Create => write!(f, "create"),
        }
    }
}

impl FromStr for CognitiveLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "remember" => Ok(CognitiveLevel::Remember),
            "understand" => Ok(CognitiveLevel::Understand),
            "apply" => Ok(CognitiveLevel::Apply),
            "analyze" | "analyse" => Ok(CognitiveLevel::Analyze),
            "evaluate" => Ok(CognitiveLevel::Evaluate),
            "create" => Ok(CognitiveLevel::Create),
            other => Err(format!("unknown cognitive level: {other}")),
        }
    }
}
