//! Error message contracts (ERR-001)
//!
//! Hosts surface these messages to users verbatim, so their wording is
//! part of the interface.

use filegen::GenerateError;
use insta::assert_snapshot;

fn path(path: &str) -> String {
    path.to_string()
}

/// CONTRACT ERR-001: Every error names the offending path
#[test]
fn contract_error_messages() {
    assert_snapshot!(
        GenerateError::PathNotRelative { path: path("/a") }.to_string(),
        @r#"The specified file path "/a" must be relative."#
    );
    assert_snapshot!(
        GenerateError::PathNotNormalized { path: path("./a") }.to_string(),
        @r#"The specified file path "./a" must be normalized."#
    );
    assert_snapshot!(
        GenerateError::IncompatibleForChange { path: path("a") }.to_string(),
        @r#"Unable to change the incompatible content of file "a"."#
    );
    assert_snapshot!(
        GenerateError::MalformedForSerialization { path: path("a") }.to_string(),
        @r#"Unable to serialize the malformed content of file "a"."#
    );
}
