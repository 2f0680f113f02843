//! Path segment encoding and JSON decoding shared by the service clients.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Characters left as-is in a path segment (RFC 3986 unreserved).
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode one path segment.
///
/// Identifiers such as `85.17.0.0_17` pass through unchanged, while `/`,
/// `?`, `#` and friends are escaped so they cannot leave the segment.
#[must_use]
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Decode a JSON document, treating object members set to `null` as absent.
///
/// Models are `#[serde(default)]`, so a `null` member falls back to the
/// field's default instead of failing the whole document.
///
/// # Errors
///
/// Returns the `serde_json` error if `text` is not valid JSON or does not
/// match `T`.
pub fn decode_json<T>(text: &str) -> serde_json::Result<T>
where
    T: DeserializeOwned,
{
    let mut value: Value = serde_json::from_str(text)?;
    drop_nulls(&mut value);
    serde_json::from_value(value)
}

fn drop_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, member| !member.is_null());
            map.values_mut().for_each(drop_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(drop_nulls),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Metadata;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase", default)]
    struct Report {
        id: String,
        deadline: String,
        reported_at: Option<String>,
        #[serde(rename = "_metadata")]
        metadata: Metadata,
    }

    #[test]
    fn encode_segment_keeps_identifiers() {
        assert_eq!(encode_segment("85.17.0.0_17"), "85.17.0.0_17");
        assert_eq!(encode_segment("000005"), "000005");
        assert_eq!(encode_segment("REMOTE_MANAGEMENT"), "REMOTE_MANAGEMENT");
    }

    #[test]
    fn encode_segment_escapes_delimiters() {
        assert_eq!(encode_segment("admin/ops"), "admin%2Fops");
        assert_eq!(encode_segment("a?b#c"), "a%3Fb%23c");
        assert_eq!(encode_segment("user name"), "user%20name");
        assert_eq!(encode_segment("jan@example.com"), "jan%40example.com");
    }

    #[test]
    fn decode_json_treats_null_members_as_default() {
        let report: Report = decode_json(
            r#"{"id": "000005", "deadline": null, "reportedAt": null, "_metadata": {"totalCount": null, "limit": 10}}"#,
        )
        .unwrap();

        assert_eq!(report.id, "000005");
        assert!(report.deadline.is_empty());
        assert!(report.reported_at.is_none());
        assert_eq!(report.metadata.limit, 10);
        assert_eq!(report.metadata.total_count, 0);
    }

    #[test]
    fn decode_json_handles_nulls_inside_arrays() {
        let reports: Vec<Report> =
            decode_json(r#"[{"id": "1", "deadline": null}, {"id": "2"}]"#).unwrap();
        assert_eq!(reports.len(), 2);
        assert!(reports[0].deadline.is_empty());
    }

    #[test]
    fn decode_json_top_level_null() {
        let value: Option<Report> = decode_json("null").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn decode_json_rejects_malformed_input() {
        assert!(decode_json::<Report>("{not json").is_err());
        assert!(decode_json::<Report>(r#"{"id": 5}"#).is_err());
    }
}
