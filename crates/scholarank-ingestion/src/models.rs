//! Data models for paper ingestion.
//!
//! Records arrive as loosely-shaped JSON (Semantic Scholar responses or
//! hand-harvested corpora). They are coerced into `PaperRecord` once, here,
//! so scoring never has to second-guess a field's type.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A paper as seen by the ranker. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation_count: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<Author>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
}

impl PaperRecord {
    /// Coerce an arbitrary JSON value into a record.
    ///
    /// Non-numeric years and citation counts become `None`, strings are
    /// trimmed and dropped when empty, `authors` accepts plain strings or
    /// `{ "name": ... }` objects. `doi` falls back to `externalIds.DOI`.
    pub fn from_json(v: &Value) -> Self {
        let authors = v["authors"]
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|a| match a {
                        Value::Object(_) => loose_string(&a["name"]),
                        other => loose_string(other),
                    })
                    .map(|name| Author { name })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            paper_id: loose_string(&v["paperId"]),
            title: loose_string(&v["title"]),
            abstract_text: loose_string(&v["abstract"]),
            venue: loose_string(&v["venue"]),
            year: loose_int(&v["year"]),
            citation_count: loose_int(&v["citationCount"]),
            authors,
            url: loose_string(&v["url"]),
            doi: loose_string(&v["doi"]).or_else(|| loose_string(&v["externalIds"]["DOI"])),
        }
    }

    /// Title, abstract and venue joined by newlines: the text keywords are matched against.
    pub fn scoring_text(&self) -> String {
        [&self.title, &self.abstract_text, &self.venue]
            .iter()
            .map(|field| field.as_deref().unwrap_or(""))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Best link for a human: the URL, else the DOI.
    pub fn link(&self) -> Option<&str> {
        self.url.as_deref().or(self.doi.as_deref())
    }

    pub fn author_names(&self) -> impl Iterator<Item = &str> {
        self.authors.iter().map(|a| a.name.as_str())
    }
}

impl<'de> Deserialize<'de> for PaperRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(PaperRecord::from_json(&value))
    }
}

// ── Coercion ───────────────────────────────────────────────────────────────

fn loose_string(v: &Value) -> Option<String> {
    let s = match v {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    if s.is_empty() { None } else { Some(s) }
}

fn loose_int(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        // bools are not counts
        _ => None,
    }
}
