//! Episode feed data model.
//!
//! Mirrors the JSON contract of `data/episodes.json`: an array of episode
//! records with camelCase fields. Only `id` and `title` are effectively
//! required; everything else defaults to empty so a sparse record still
//! renders.

use serde::{Deserialize, Deserializer, Serialize};

/// A single episode record from the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Lookup key and URL path segment. Strings and numbers are both
    /// accepted on the wire and normalized to a string.
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub audio: String,
    #[serde(default)]
    pub short_description: String,
    /// Plain-text long description, used when no HTML variant is present.
    #[serde(default)]
    pub long_description: Option<String>,
    /// Raw HTML long description. Untrusted; must pass through the
    /// sanitizer before display.
    #[serde(default)]
    pub long_description_html: Option<String>,
    /// ISO-ish date string (`YYYY-MM-DD`, optionally with a time suffix).
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub guests: Vec<String>,
    #[serde(default)]
    pub references: Vec<Reference>,
}

/// A numbered reference shown under the episode body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub url: Option<String>,
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    })
}

/// Sort episodes newest first by their ISO date string.
///
/// If no record carries a date the feed order is kept as-is. Records
/// without a date sort last. The sort is stable, so ties keep feed order.
pub fn sort_newest_first(mut episodes: Vec<Episode>) -> Vec<Episode> {
    if episodes.iter().all(|ep| ep.date.is_none()) {
        return episodes;
    }
    episodes.sort_by(|a, b| {
        let a = a.date.as_deref().unwrap_or("");
        let b = b.date.as_deref().unwrap_or("");
        b.cmp(a)
    });
    episodes
}

/// Look up an episode by its stringified id.
pub fn find_by_id<'a>(episodes: &'a [Episode], id: &str) -> Option<&'a Episode> {
    episodes.iter().find(|ep| ep.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(id: &str, date: Option<&str>) -> Episode {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Episode {id}"),
            "date": date,
        }))
        .unwrap()
    }

    #[test]
    fn parses_a_full_record() {
        let ep: Episode = serde_json::from_str(
            r#"{
                "id": "ep-001",
                "title": "Signals from the Deep",
                "image": "img/ep-001.jpg",
                "audio": "audio/ep-001.mp3",
                "shortDescription": "A short one.",
                "longDescriptionHtml": "<p>Hello</p>",
                "date": "2024-03-09",
                "tags": ["ocean"],
                "guests": ["Dr. Reef"],
                "references": [{"label": "Paper", "url": "https://example.com"}]
            }"#,
        )
        .unwrap();
        assert_eq!(ep.id, "ep-001");
        assert_eq!(ep.short_description, "A short one.");
        assert_eq!(ep.long_description_html.as_deref(), Some("<p>Hello</p>"));
        assert_eq!(ep.references[0].url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn numeric_ids_are_normalized_to_strings() {
        let ep: Episode = serde_json::from_str(r#"{"id": 7, "title": "t"}"#).unwrap();
        assert_eq!(ep.id, "7");
    }

    #[test]
    fn sparse_records_default_cleanly() {
        let ep: Episode = serde_json::from_str(r#"{"id": "x", "title": "t"}"#).unwrap();
        assert!(ep.date.is_none());
        assert!(ep.tags.is_empty());
        assert!(ep.long_description.is_none());
    }

    #[test]
    fn sorts_newest_first_when_dates_exist() {
        let sorted = sort_newest_first(vec![
            episode("a", Some("2024-01-01")),
            episode("b", Some("2024-06-15")),
            episode("c", None),
        ]);
        let ids: Vec<_> = sorted.iter().map(|ep| ep.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn keeps_feed_order_when_no_dates() {
        let sorted = sort_newest_first(vec![episode("a", None), episode("b", None)]);
        let ids: Vec<_> = sorted.iter().map(|ep| ep.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn finds_episodes_by_id() {
        let feed = vec![episode("a", None), episode("b", None)];
        assert_eq!(find_by_id(&feed, "b").map(|ep| ep.id.as_str()), Some("b"));
        assert!(find_by_id(&feed, "zzz").is_none());
    }
}
