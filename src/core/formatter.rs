use crate::domain::result::FetchResult;

/// Text rendering of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedText {
    /// Trimmed payload ending in exactly one newline
    pub payload: String,
    /// `{user}: {error}` lines for users left out of the payload
    pub diagnostics: Vec<String>,
    pub had_errors: bool,
}

impl FormattedText {
    /// True when no user contributed any key.
    pub fn is_empty(&self) -> bool {
        self.payload.trim().is_empty()
    }
}

/// Render successful results as authorized_keys text.
///
/// Without `inline`, each user's block is preceded by a `# {user}` header and
/// blocks are separated by a blank line. With `inline`, the header is dropped
/// and the username is appended to every non-blank key line instead.
pub fn format_text(results: &[FetchResult], inline: bool) -> FormattedText {
    let mut combined = Vec::new();
    let mut diagnostics = Vec::new();

    for result in results {
        if let Some(error) = result.error() {
            diagnostics.push(format!("{}: {}", result.user, error));
            continue;
        }
        let keys = match result.key_block() {
            Some(keys) if !keys.is_empty() => keys,
            _ => continue,
        };

        if inline {
            combined.extend(
                keys.lines()
                    .filter(|line| !line.trim().is_empty())
                    .map(|line| format!("{} {}", line, result.user)),
            );
        } else {
            combined.push(format!("# {}\n{}\n", result.user, keys));
        }
    }

    let mut payload = combined.join("\n").trim().to_string();
    payload.push('\n');

    FormattedText {
        payload,
        had_errors: !diagnostics.is_empty(),
        diagnostics,
    }
}

/// Render every result, failures included, as a pretty-printed JSON array.
pub fn format_json(results: &[FetchResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}
