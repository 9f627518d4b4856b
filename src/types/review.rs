use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize, Serializer};

use crate::literal::Literal;

/// A review row as read from the raw CSV, everything still string-encoded.
///
/// `tags` and `ratings` are nullable in the source data; the csv crate maps
/// empty cells to [None].
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawReview {
    pub id: String,
    pub date: String,
    pub tags: Option<String>,
    pub ratings: Option<String>,
    pub title: String,
    pub content: String,
    pub language: String,
}

/// A review after schema normalization: typed date, structured composites.
#[derive(Debug, Clone)]
pub struct Review {
    pub id: String,
    pub date: DateTime<FixedOffset>,
    pub tags: Literal,
    pub ratings: Literal,
    pub title: String,
    pub content: String,
    pub language: String,
}

/// A review after composite-field splitting.
///
/// `tag_ids` and `sentiments` are index-aligned: `sentiments[i]` is the
/// sentiment attached to `tag_ids[i]`.
#[derive(Debug, Clone)]
pub struct FlatReview {
    pub id: String,
    pub date: DateTime<FixedOffset>,
    pub tag_ids: Vec<String>,
    pub sentiments: Vec<String>,
    pub normalized_rating: f64,
    pub raw_rating: f64,
    pub title: String,
    pub content: String,
    pub language: String,
}

/// Semantic attributes of a tag id, resolved through the mapping table.
///
/// The mapping document encodes each entry as a 2-element array
/// `[location_type, city]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "[String; 2]")]
pub struct TagAttributes {
    pub location_type: String,
    pub city: String,
}

impl From<[String; 2]> for TagAttributes {
    fn from(pair: [String; 2]) -> Self {
        let [location_type, city] = pair;
        Self {
            location_type,
            city,
        }
    }
}

/// City attribution of a row.
///
/// Starts out as the raw per-tag candidate sequence ([Ambiguous]) and is
/// collapsed to [Single] by the reconciliation engine when possible.
/// A row left [Ambiguous] after reconciliation is a valid terminal state,
/// not an error.
///
/// [Ambiguous]: CityAttribution::Ambiguous
/// [Single]: CityAttribution::Single
#[derive(Debug, Clone, PartialEq)]
pub enum CityAttribution {
    Single(String),
    Ambiguous(Vec<String>),
}

impl CityAttribution {
    /// Candidate view, regardless of resolution state.
    pub fn candidates(&self) -> &[String] {
        match self {
            CityAttribution::Single(city) => std::slice::from_ref(city),
            CityAttribution::Ambiguous(cities) => cities,
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, CityAttribution::Ambiguous(_))
    }

    /// Cell representation: the bare city, or the candidate list rendered
    /// in literal syntax (round-trips through [crate::literal::parse_literal]).
    pub fn to_field(&self) -> String {
        match self {
            CityAttribution::Single(city) => city.clone(),
            CityAttribution::Ambiguous(cities) => fmt_string_list(cities),
        }
    }
}

impl Serialize for CityAttribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_field())
    }
}

/// A review after tag resolution.
///
/// `transformed_tags`, `location_types` and the city candidates stay
/// index-aligned with `sentiments`: index `i` everywhere refers to the same
/// original tag.
#[derive(Debug, Clone)]
pub struct ResolvedReview {
    pub id: String,
    pub date: DateTime<FixedOffset>,
    pub transformed_tags: Vec<TagAttributes>,
    pub sentiments: Vec<String>,
    pub normalized_rating: f64,
    pub raw_rating: f64,
    pub title: String,
    pub content: String,
    pub language: String,
    pub location_types: Vec<String>,
    pub city: CityAttribution,
}

/// The exact column set emitted by the core, consumed by text preprocessing.
#[derive(Debug, Clone, Serialize)]
pub struct OutputRow {
    pub id: String,
    pub content: String,
    pub date: DateTime<FixedOffset>,
    pub language: String,
    pub title: String,
    pub normalized_rating: f64,
    pub raw_rating: f64,
    #[serde(serialize_with = "string_list")]
    pub sentiment: Vec<String>,
    pub city: CityAttribution,
    #[serde(rename = "type", serialize_with = "string_list")]
    pub location_types: Vec<String>,
}

impl From<ResolvedReview> for OutputRow {
    fn from(row: ResolvedReview) -> Self {
        Self {
            id: row.id,
            content: row.content,
            date: row.date,
            language: row.language,
            title: row.title,
            normalized_rating: row.normalized_rating,
            raw_rating: row.raw_rating,
            sentiment: row.sentiments,
            city: row.city,
            location_types: row.location_types,
        }
    }
}

/// Render a list of strings in literal syntax, e.g. `['Cafe', 'Museum']`.
pub fn fmt_string_list(items: &[String]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .map(|item| format!("'{}'", item.replace('\\', "\\\\").replace('\'', "\\'")))
        .collect();
    format!("[{}]", quoted.join(", "))
}

fn string_list<S: Serializer>(items: &[String], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&fmt_string_list(items))
}
