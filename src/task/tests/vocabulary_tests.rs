//! Tests for the closed status, priority and issue-type vocabularies.

use crate::task::domain::{IssueType, ParseVocabularyError, Priority, Status};
use rstest::rstest;

#[rstest]
#[case(Status::Todo, "todo")]
#[case(Status::InProgress, "in_progress")]
#[case(Status::Done, "done")]
fn status_parses_its_canonical_form(#[case] status: Status, #[case] text: &str) {
    assert_eq!(status.as_str(), text);
    assert_eq!(Status::try_from(text), Ok(status));
    assert_eq!(status.to_string(), text);
}

#[rstest]
#[case(Priority::Low, "low")]
#[case(Priority::Medium, "medium")]
#[case(Priority::High, "high")]
fn priority_parses_its_canonical_form(#[case] priority: Priority, #[case] text: &str) {
    assert_eq!(priority.as_str(), text);
    assert_eq!(Priority::try_from(text), Ok(priority));
}

#[rstest]
#[case("Done")]
#[case(" done")]
#[case("finished")]
#[case("")]
fn status_membership_is_exact(#[case] text: &str) {
    assert_eq!(
        Status::try_from(text),
        Err(ParseVocabularyError {
            kind: "status",
            value: text.to_owned(),
        })
    );
}

#[rstest]
fn defaults_are_todo_and_medium() {
    assert_eq!(Status::default(), Status::Todo);
    assert_eq!(Priority::default(), Priority::Medium);
}

#[rstest]
fn issue_types_parse() {
    for issue_type in [
        IssueType::Task,
        IssueType::Subtask,
        IssueType::Bug,
        IssueType::Story,
        IssueType::Epic,
    ] {
        assert_eq!(IssueType::try_from(issue_type.as_str()), Ok(issue_type));
    }
    assert!(IssueType::try_from("feature").is_err());
}

#[rstest]
fn vocabularies_serialise_in_snake_case() -> eyre::Result<()> {
    eyre::ensure!(serde_json::to_value(Status::InProgress)? == "in_progress");
    eyre::ensure!(serde_json::to_value(Priority::High)? == "high");
    eyre::ensure!(serde_json::to_value(IssueType::Subtask)? == "subtask");
    Ok(())
}
