//! Issue key extraction
//!
//! Finds `PROJECT-123` style keys in commit and pull request text.

use regex::Regex;
use std::collections::HashSet;

use crate::args::InvocationArgs;

/// Matcher for the issue keys of a single project
///
/// The project key is matched literally and case-sensitively: with project
/// `TEST`, `test-1` is not an issue key.
#[derive(Debug, Clone)]
pub struct IssueMatcher {
    pattern: Regex,
}

impl IssueMatcher {
    /// Builds a matcher for `project`
    ///
    /// # Errors
    /// Returns the regex error if the escaped pattern cannot be compiled,
    /// which only happens for absurdly long project keys.
    pub fn new(project: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!("{}-[0-9]+", regex::escape(project)))?;
        Ok(Self { pattern })
    }

    /// Returns the unique issue keys in `text`, in order of first appearance
    ///
    /// With `single` set only the first match is kept.
    pub fn find(&self, text: &str, single: bool) -> Vec<String> {
        let limit = if single { 1 } else { usize::MAX };
        let mut seen = HashSet::new();

        self.pattern
            .find_iter(text)
            .take(limit)
            .map(|m| m.as_str())
            .filter(|key| seen.insert(*key))
            .map(str::to_string)
            .collect()
    }
}

/// Builds the text searched for issue keys
///
/// Commit message, pull request title, source branch and target branch, one
/// per line and in that order.
pub fn search_text(args: &InvocationArgs) -> String {
    [
        args.commit.message.as_str(),
        args.pull_request.title.as_str(),
        args.commit.source.as_str(),
        args.commit.target.as_str(),
    ]
    .join("\n")
}

/// Extracts the issue keys referenced by a pipeline run
///
/// An empty project key never matches anything.
pub fn extract_issues(args: &InvocationArgs) -> Result<Vec<String>, regex::Error> {
    if args.project.is_empty() {
        return Ok(Vec::new());
    }

    let matcher = IssueMatcher::new(&args.project)?;
    Ok(matcher.find(&search_text(args), args.single_issue))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with_message(message: &str) -> InvocationArgs {
        let mut args = InvocationArgs {
            project: "TEST".to_string(),
            ..Default::default()
        };
        args.commit.message = message.to_string();
        args
    }

    #[test]
    fn test_extract_issue_positions() {
        let cases = [
            ("TEST-1 this is a test", "TEST-1"),
            ("suffix [TEST-123]", "TEST-123"),
            ("[TEST-123] prefix", "TEST-123"),
            ("TEST-123 prefix", "TEST-123"),
            ("feature/TEST-123", "TEST-123"),
        ];

        for (text, expected) in cases {
            let issues = extract_issues(&args_with_message(text)).unwrap();
            assert_eq!(issues, vec![expected.to_string()], "text: {text}");
        }
    }

    #[test]
    fn test_extract_no_issue() {
        let issues = extract_issues(&args_with_message("no issue")).unwrap();
        assert!(issues.is_empty());
    }

    #[test]
    fn test_extract_deduplicates_in_order() {
        let issues = extract_issues(&args_with_message("TEST-1 TEST-2 TEST-1")).unwrap();
        assert_eq!(issues, vec!["TEST-1", "TEST-2"]);
    }

    #[test]
    fn test_extract_single_issue() {
        let mut args = args_with_message("TEST-1 TEST-2 TEST-1");
        args.single_issue = true;

        let issues = extract_issues(&args).unwrap();
        assert_eq!(issues, vec!["TEST-1"]);
    }

    #[test]
    fn test_extract_is_case_sensitive() {
        let issues = extract_issues(&args_with_message("test-1")).unwrap();
        assert!(issues.is_empty());
    }

    #[test]
    fn test_extract_scans_all_fields_in_order() {
        let mut args = args_with_message("fix TEST-3");
        args.pull_request.title = "TEST-4: title".to_string();
        args.commit.source = "feature/TEST-5".to_string();
        args.commit.target = "release/TEST-3".to_string();

        let issues = extract_issues(&args).unwrap();
        assert_eq!(issues, vec!["TEST-3", "TEST-4", "TEST-5"]);
    }

    #[test]
    fn test_extract_branch_before_message_duplicate_counts_once() {
        let mut args = args_with_message("");
        args.commit.source = "feature/TEST-9".to_string();
        args.pull_request.title = "TEST-9 and TEST-10".to_string();

        let issues = extract_issues(&args).unwrap();
        assert_eq!(issues, vec!["TEST-9", "TEST-10"]);
    }

    #[test]
    fn test_project_key_is_matched_literally() {
        let mut args = args_with_message("A+B-1 AAB-2");
        args.project = "A+B".to_string();

        let issues = extract_issues(&args).unwrap();
        assert_eq!(issues, vec!["A+B-1"]);
    }

    #[test]
    fn test_empty_project_matches_nothing() {
        let mut args = args_with_message("TEST-1");
        args.project = String::new();

        assert!(extract_issues(&args).unwrap().is_empty());
    }

    #[test]
    fn test_search_text_has_one_field_per_line() {
        let mut args = args_with_message("message");
        args.pull_request.title = "title".to_string();
        args.commit.source = "source".to_string();
        args.commit.target = "target".to_string();

        assert_eq!(search_text(&args), "message\ntitle\nsource\ntarget");
    }
}
