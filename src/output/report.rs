//! Machine-readable run report for CI consumers.

use crate::error::Result;
use crate::runner::RunOutcome;

/// Serialize the outcome as one line of JSON.
pub fn format_json_report(outcome: &RunOutcome) -> Result<String> {
    Ok(serde_json::to_string(outcome)?)
}

pub fn print_json_report(outcome: &RunOutcome) -> Result<()> {
    println!("{}", format_json_report(outcome)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::StatusEntry;

    #[test]
    fn test_no_changes_report() {
        let json = format_json_report(&RunOutcome::NoChanges).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "no_changes");
    }

    #[test]
    fn test_pull_request_report_fields() {
        let outcome = RunOutcome::PullRequestOpened {
            branch: "predefined_de/autopr_1700000000".to_string(),
            base: "rel/staging".to_string(),
            title: "Auto PR: Differences detected".to_string(),
            changed_files: vec![StatusEntry {
                code: " M".to_string(),
                path: "catalog/list.json".to_string(),
            }],
            marker_created: false,
            url: Some("https://github.com/acme/catalog/pull/42".to_string()),
            dry_run: false,
        };
        let json = format_json_report(&outcome).unwrap();
        assert!(!json.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "pull_request_opened");
        assert_eq!(value["base"], "rel/staging");
        assert_eq!(value["changed_files"][0]["path"], "catalog/list.json");
        assert_eq!(value["url"], "https://github.com/acme/catalog/pull/42");
        assert_eq!(value["dry_run"], false);
    }
}
