// Video record domain model (one row of the trends dataset)
use crate::domain::number::format_number;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text used for a label or title that is absent from the row
pub const MISSING_TEXT: &str = "undefined";

/// One input row describing a video.
///
/// Fields are not validated. A missing or non-numeric measure becomes `NaN`.
/// Text fields keep non-string values as text: numbers print as `1` or `2.5`,
/// `null` as `"null"`, other JSON as its source text, and an absent field as
/// [`MISSING_TEXT`]. Distinct raw values therefore stay distinct categories.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VideoRecord {
    #[serde(rename = "Content_Type", default = "missing_text", deserialize_with = "lenient_string")]
    pub content_type: String,
    #[serde(rename = "Video_Length_Min", default = "nan", deserialize_with = "lenient_f64")]
    pub video_length_min: f64,
    #[serde(rename = "Virality_Score", default = "nan", deserialize_with = "lenient_f64")]
    pub virality_score: f64,
    #[serde(rename = "Title", default = "missing_text", deserialize_with = "lenient_string")]
    pub title: String,
}

impl VideoRecord {
    pub fn new(content_type: &str, video_length_min: f64, virality_score: f64, title: &str) -> Self {
        Self {
            content_type: content_type.to_string(),
            video_length_min,
            virality_score,
            title: title.to_string(),
        }
    }
}

fn nan() -> f64 {
    f64::NAN
}

fn missing_text() -> String {
    MISSING_TEXT.to_string()
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64().unwrap_or(f64::NAN))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => text,
        Value::Number(number) => match number.as_f64() {
            Some(n) => format_number(n),
            None => number.to_string(),
        },
        Value::Null => "null".to_string(),
        other => other.to_string(),
    })
}

/// Parse a JSON document holding an array of records.
pub fn parse_records(bytes: &[u8]) -> serde_json::Result<Vec<VideoRecord>> {
    serde_json::from_slice(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_records() {
        let json = r#"[
            {"Content_Type": "Gaming", "Video_Length_Min": 12, "Virality_Score": 500.6, "Title": "A", "Views": 10}
        ]"#;
        let records = parse_records(json.as_bytes()).unwrap();

        assert_eq!(records, vec![VideoRecord::new("Gaming", 12.0, 500.6, "A")]);
    }

    #[test]
    fn test_malformed_fields_become_nan() {
        let json = r#"[{"Content_Type": "Vlog/Lifestyle", "Virality_Score": "high"}]"#;
        let records = parse_records(json.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].content_type, "Vlog/Lifestyle");
        assert!(records[0].video_length_min.is_nan());
        assert!(records[0].virality_score.is_nan());
        assert_eq!(records[0].title, MISSING_TEXT);
    }

    #[test]
    fn test_non_string_text_fields_keep_their_value() {
        let json = r#"[
            {"Content_Type": 1, "Video_Length_Min": 3, "Virality_Score": 10, "Title": 1984},
            {"Content_Type": 2, "Video_Length_Min": 4, "Virality_Score": 20, "Title": 2.5},
            {"Video_Length_Min": 5, "Virality_Score": 30, "Title": null},
            {"Content_Type": true, "Video_Length_Min": 6, "Virality_Score": 40, "Title": ["a", 1]}
        ]"#;
        let records = parse_records(json.as_bytes()).unwrap();

        let labels: Vec<&str> = records.iter().map(|r| r.content_type.as_str()).collect();
        assert_eq!(labels, vec!["1", "2", MISSING_TEXT, "true"]);

        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["1984", "2.5", "null", r#"["a",1]"#]);
    }

    #[test]
    fn test_non_array_document_is_rejected() {
        assert!(parse_records(br#"{"Content_Type": "Gaming"}"#).is_err());
        assert!(parse_records(b"not json").is_err());
    }
}
