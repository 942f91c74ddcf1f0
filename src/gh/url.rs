//! PR URL extraction.

/// Extracts a PR URL from `gh` output.
///
/// Looks for `https://github.com/<owner>/<repo>/pull/<number>`, preferring a
/// URL on its own line and the last one printed.
pub fn extract_pr_url(output: &str) -> Option<String> {
    for line in output.lines().rev() {
        let line = line.trim();
        if line.starts_with("https://github.com/") && line.contains("/pull/") {
            return Some(line.to_string());
        }
    }

    // Also check for PR URLs that might be embedded in text
    for word in output.split_whitespace().rev() {
        if word.starts_with("https://github.com/") && word.contains("/pull/") {
            let url = word.trim_end_matches(|c: char| !c.is_alphanumeric());
            return Some(url.to_string());
        }
    }

    None
}
