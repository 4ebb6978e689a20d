pub mod fixture;

pub use fixture::{Fixture, FixtureId, FixtureView, MatchStatus};

/// Decodes a whole feed document.
///
/// Decoding is all-or-nothing: one malformed entry fails the document.
pub fn decode_feed(document: &str) -> Result<Vec<Fixture>, serde_json::Error> {
    serde_json::from_str(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"[
        {"date": "2025-08-17", "time": "16:30", "opponent": "Manchester United",
         "competition": "Premier League", "status": "C", "score": "0-1",
         "is_home": false, "scheme_url": "miguvideo://miguvideo?action=a"},
        {"date": "2025-08-23", "time": "17:30", "opponent": "Leeds United",
         "status": "U", "is_home": true}
    ]"#;

    #[test]
    fn test_decode_applies_defaults() {
        let fixtures = decode_feed(FEED).unwrap();
        assert_eq!(fixtures.len(), 2);

        let second = &fixtures[1];
        assert_eq!(second.competition, "Premier League");
        assert_eq!(second.score, "");
        assert_eq!(second.scheme_url, "");
        assert_eq!(second.status, MatchStatus::Unplayed);
    }

    #[test]
    fn test_decode_treats_null_optionals_as_absent() {
        let feed = r#"[{"date": "2025-09-16", "time": "17:45", "opponent": "Athletic Club",
            "competition": null, "status": "U", "score": null, "is_home": false,
            "scheme_url": null}]"#;
        let fixtures = decode_feed(feed).unwrap();
        assert_eq!(fixtures[0].competition, "Premier League");
        assert_eq!(fixtures[0].score, "");
        assert_eq!(fixtures[0].scheme_url, "");
    }

    #[test]
    fn test_missing_score_only_is_accepted() {
        let feed = r#"[{"date": "2025-08-17", "time": "16:30", "opponent": "Manchester United",
            "status": "C", "is_home": false}]"#;
        let fixtures = decode_feed(feed).unwrap();
        assert_eq!(fixtures[0].score, "");
    }

    #[test]
    fn test_missing_is_home_fails_whole_document() {
        let feed = r#"[
            {"date": "2025-08-17", "time": "16:30", "opponent": "Manchester United",
             "status": "C", "is_home": false},
            {"date": "2025-08-23", "time": "17:30", "opponent": "Leeds United", "status": "U"}
        ]"#;
        assert!(decode_feed(feed).is_err());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let feed = r#"[{"date": "2025-08-17", "time": "16:30", "opponent": "Manchester United",
            "status": "C", "is_home": false, "migu_pid": "123", "migu_live_url": ""}]"#;
        assert_eq!(decode_feed(feed).unwrap().len(), 1);
    }

    #[test]
    fn test_reencode_preserves_source_fields() {
        let fixtures = decode_feed(FEED).unwrap();
        let encoded = serde_json::to_value(&fixtures).unwrap();
        let original: serde_json::Value = serde_json::from_str(FEED).unwrap();

        assert_eq!(encoded[0], original[0]);
        for key in ["date", "time", "opponent", "status", "is_home"] {
            assert_eq!(encoded[1][key], original[1][key], "field {key} changed");
        }
    }
}
