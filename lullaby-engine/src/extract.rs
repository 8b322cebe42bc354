//! Artifact extraction
//!
//! The provider's completed-job body nests the artifact URL differently
//! depending on the model that served the job. The known shapes are tried
//! in a fixed priority order; the order is a data structure, not a
//! conditional chain, so it can be tested on its own.

use serde_json::Value;

/// Accessors in priority order. Providers may populate more than one shape
/// at once and callers depend on a stable choice, so this ordering must not
/// change: top-level fields first, then the `output` object, then
/// `output.audio`.
const URL_ACCESSORS: &[fn(&Value) -> Option<&Value>] = &[
    |body| body.get("audio_url"),
    |body| body.get("url"),
    |body| body.get("output")?.get("audio_url"),
    |body| body.get("output")?.get("url"),
    |body| body.get("output")?.get("audio")?.get("url"),
];

/// Returns the first present, non-empty artifact URL in the body
pub fn extract_artifact_url(body: &Value) -> Option<&str> {
    URL_ACCESSORS
        .iter()
        .filter_map(|accessor| accessor(body))
        .filter_map(Value::as_str)
        .find(|url| !url.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_top_level_url_wins_over_nested() {
        // Both shapes populated with different values: priority must pick
        // the top-level one.
        let body = json!({
            "url": "https://cdn/top.mp3",
            "output": { "audio": { "url": "https://cdn/nested.mp3" } }
        });
        assert_eq!(extract_artifact_url(&body), Some("https://cdn/top.mp3"));
    }

    #[test]
    fn test_output_url() {
        let body = json!({ "output": { "url": "https://x/a.mp3" } });
        assert_eq!(extract_artifact_url(&body), Some("https://x/a.mp3"));
    }

    #[test]
    fn test_output_audio_url_field() {
        let body = json!({ "output": { "audio_url": "https://cdn/a.mp3" } });
        assert_eq!(extract_artifact_url(&body), Some("https://cdn/a.mp3"));
    }

    #[test]
    fn test_deeply_nested_audio_url() {
        let body = json!({ "output": { "audio": { "url": "https://cdn/x.mp3" } } });
        assert_eq!(extract_artifact_url(&body), Some("https://cdn/x.mp3"));
    }

    #[test]
    fn test_output_audio_url_beats_output_url() {
        let body = json!({
            "output": {
                "audio_url": "https://cdn/flat.mp3",
                "url": "https://cdn/other.mp3"
            }
        });
        assert_eq!(extract_artifact_url(&body), Some("https://cdn/flat.mp3"));
    }

    #[test]
    fn test_no_url_anywhere() {
        let body = json!({ "output": { "status": "done" } });
        assert_eq!(extract_artifact_url(&body), None);
    }

    #[test]
    fn test_empty_string_is_skipped() {
        let body = json!({
            "url": "",
            "output": { "url": "https://cdn/fallback.mp3" }
        });
        assert_eq!(
            extract_artifact_url(&body),
            Some("https://cdn/fallback.mp3")
        );
    }

    #[test]
    fn test_non_string_url_is_skipped() {
        let body = json!({ "url": 42, "output": { "url": "https://cdn/a.mp3" } });
        assert_eq!(extract_artifact_url(&body), Some("https://cdn/a.mp3"));
    }
}
