use ghkeys::{format_json, format_text, FetchError, FetchResult};
use proptest::prelude::*;

fn fetch_result() -> impl Strategy<Value = FetchResult> {
    let user = "[a-z][a-z0-9-]{0,12}";
    let key_line = "ssh-(rsa|ed25519) [A-Za-z0-9+/]{4,24}";
    prop_oneof![
        (user, prop::collection::vec(key_line, 1..4))
            .prop_map(|(user, lines)| FetchResult::keys(user, lines.join("\n"))),
        (user, prop_oneof![
            Just(FetchError::UserNotFound),
            Just(FetchError::NoKeys),
            Just(FetchError::Timeout),
            (400u16..600).prop_map(FetchError::Status),
        ])
            .prop_map(|(user, error)| FetchResult::failed(user, error)),
    ]
}

proptest! {
    #[test]
    fn text_formatting_is_idempotent(
        results in prop::collection::vec(fetch_result(), 0..8),
        inline in any::<bool>(),
    ) {
        prop_assert_eq!(format_text(&results, inline), format_text(&results, inline));
        prop_assert_eq!(format_json(&results).unwrap(), format_json(&results).unwrap());
    }

    #[test]
    fn payload_ends_with_single_newline(
        results in prop::collection::vec(fetch_result(), 0..8),
        inline in any::<bool>(),
    ) {
        let text = format_text(&results, inline);
        prop_assert!(text.payload.ends_with('\n'));
        prop_assert!(!text.payload.ends_with("\n\n"));
        if text.is_empty() {
            prop_assert_eq!(text.payload.as_str(), "\n");
        } else {
            prop_assert_eq!(text.payload.trim_start(), text.payload.as_str());
        }
    }

    #[test]
    fn errors_become_diagnostics_only(
        results in prop::collection::vec(fetch_result(), 0..8),
    ) {
        let text = format_text(&results, false);
        let failed: Vec<String> = results
            .iter()
            .filter_map(|result| result.error().map(|error| format!("{}: {}", result.user, error)))
            .collect();

        prop_assert_eq!(text.had_errors, !failed.is_empty());
        prop_assert_eq!(&text.diagnostics, &failed);

        let headers: Vec<String> = results
            .iter()
            .filter(|result| result.is_success())
            .map(|result| format!("# {}", result.user))
            .collect();
        let emitted: Vec<String> = text
            .payload
            .lines()
            .filter(|line| line.starts_with("# "))
            .map(str::to_string)
            .collect();
        prop_assert_eq!(emitted, headers);
    }

    #[test]
    fn inline_lines_end_with_their_user(
        results in prop::collection::vec(fetch_result(), 1..8),
    ) {
        let text = format_text(&results, true);
        let expected: Vec<String> = results
            .iter()
            .flat_map(|result| {
                result
                    .key_lines()
                    .into_iter()
                    .map(move |line| format!("{} {}", line, result.user))
            })
            .collect();
        let emitted: Vec<String> = text
            .payload
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        prop_assert_eq!(emitted, expected);
    }

    #[test]
    fn json_has_one_entry_per_user(
        results in prop::collection::vec(fetch_result(), 0..8),
    ) {
        let value: Vec<serde_json::Value> =
            serde_json::from_str(&format_json(&results).unwrap()).unwrap();
        prop_assert_eq!(value.len(), results.len());
        for (entry, result) in value.iter().zip(&results) {
            prop_assert_eq!(entry["user"].as_str(), Some(result.user.as_str()));
            prop_assert_eq!(entry["keys"].as_array().map(Vec::len), Some(result.key_lines().len()));
            prop_assert_eq!(entry["error"].is_null(), result.is_success());
        }
    }
}
