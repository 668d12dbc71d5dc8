use crate::naming;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// SpecRecord
// ---------------------------------------------------------------------------

/// One document to generate. Every field is free text; nothing here is
/// validated at generation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecRecord {
    #[serde(deserialize_with = "id_from_scalar")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tables: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

/// Ids are written as `"223"` in most catalogs, but a bare `223` is accepted.
fn id_from_scalar<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Number(u64),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(s) => s,
        Scalar::Number(n) => n.to_string(),
    })
}

fn default_priority() -> String {
    "MEDIUM".to_string()
}

static HOURS_RE: OnceLock<Regex> = OnceLock::new();

fn hours_re() -> &'static Regex {
    HOURS_RE.get_or_init(|| Regex::new(r"^\s*(\d+)").unwrap())
}

impl SpecRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: None,
            priority: default_priority(),
            time: String::new(),
            description: String::new(),
            features: Vec::new(),
            tables: Vec::new(),
            components: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn slug(&self) -> String {
        naming::slugify(&self.title)
    }

    /// `SPEC-<id>-<slug>.md`
    pub fn file_name(&self) -> String {
        format!("SPEC-{}-{}.md", self.id, self.slug())
    }

    pub fn is_dashboard(&self) -> bool {
        self.title.to_lowercase().contains("dashboard")
    }

    /// Leading whole number of the `time` estimate (`"6 hours"` → 6).
    pub fn hours(&self) -> Option<u32> {
        hours_re()
            .captures(&self.time)
            .and_then(|c| c[1].parse().ok())
    }

    /// Numeric id of the following spec, when the id is numeric.
    pub fn next_id(&self) -> Option<u64> {
        self.id.trim().parse::<u64>().ok().map(|n| n + 1)
    }
}
