//! Marker-based text insertion.
//!
//! The marker is self-perpetuating: every splice replaces the single live
//! marker with the new statement followed by a fresh copy of the marker, so
//! the next splice always has an insertion point.
//!
//! ```text
//!     public function register()
//!     {
//!         $this->app->bind(A::class, B::class);   <- earlier splice
//!         $this->app->bind(C::class, D::class);   <- this splice
//!         //:end-bindings:                         <- fresh marker
//!     }
//! ```

use crate::domain::error::DomainError;

/// Insert `statement` before the single occurrence of `marker` in `text`.
///
/// The re-inserted marker goes on its own line with the same leading
/// whitespace the marker had, so repeated splices stay aligned. The line
/// break matches the one used around the marker (`\n` or `\r\n`).
///
/// # Errors
///
/// - `MarkerNotFound` when the marker occurs zero times or more than once.
///   Nothing is guessed: an ambiguous file is rejected as a whole.
/// - `MarkerInStatement` when the result would not hold exactly one marker,
///   which happens when the statement itself contains it.
pub fn splice(text: &str, marker: &str, statement: &str) -> Result<String, DomainError> {
    if statement.contains(marker) {
        return Err(DomainError::MarkerInStatement {
            marker: marker.to_string(),
        });
    }

    let positions: Vec<usize> = text.match_indices(marker).map(|(i, _)| i).collect();

    let &[at] = positions.as_slice() else {
        return Err(DomainError::MarkerNotFound {
            marker: marker.to_string(),
            occurrences: positions.len(),
        });
    };

    let indent = line_indent(text, at);
    let newline = line_ending(text, at, marker.len());

    let mut out = String::with_capacity(text.len() + statement.len() + indent.len() + 2);
    out.push_str(&text[..at]);
    out.push_str(statement);
    out.push_str(newline);
    out.push_str(indent);
    out.push_str(marker);
    out.push_str(&text[at + marker.len()..]);

    if marker_count(&out, marker) != 1 {
        return Err(DomainError::MarkerInStatement {
            marker: marker.to_string(),
        });
    }
    Ok(out)
}

/// Count the live markers in `text`.
pub fn marker_count(text: &str, marker: &str) -> usize {
    text.matches(marker).count()
}

/// `\r\n` when the marker's own line or the line before it ends that way.
fn line_ending(text: &str, at: usize, marker_len: usize) -> &'static str {
    let line_start = text[..at].rfind('\n').map_or(0, |i| i + 1);
    let after = &text[at + marker_len..];
    let next_break = after.find('\n').map(|i| &after[..=i]);
    let crlf_before = text[..line_start].ends_with("\r\n");
    if crlf_before || next_break.is_some_and(|l| l.ends_with("\r\n")) {
        "\r\n"
    } else {
        "\n"
    }
}

/// Whitespace between the start of the line and `at`, or nothing when the
/// marker shares its line with other text.
fn line_indent(text: &str, at: usize) -> &str {
    let line_start = text[..at].rfind('\n').map_or(0, |i| i + 1);
    let prefix = &text[line_start..at];
    if prefix.chars().all(|c| c == ' ' || c == '\t') {
        prefix
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARK: &str = "// MARK";

    #[test]
    fn inserts_before_marker_and_keeps_it() {
        let out = splice("a\n// MARK\nb\n", MARK, "bind(X);").unwrap();
        assert_eq!(out, "a\nbind(X);\n// MARK\nb\n");
    }

    #[test]
    fn preserves_marker_indentation() {
        let text = "{\n        // MARK\n}\n";
        let out = splice(text, MARK, "bind(X);").unwrap();
        assert_eq!(out, "{\n        bind(X);\n        // MARK\n}\n");
    }

    #[test]
    fn repeated_splices_append_in_order() {
        let mut text = String::from("start\n    // MARK\nend\n");
        for stmt in ["one;", "two;", "three;"] {
            text = splice(&text, MARK, stmt).unwrap();
        }
        assert_eq!(marker_count(&text, MARK), 1);
        assert_eq!(
            text,
            "start\n    one;\n    two;\n    three;\n    // MARK\nend\n"
        );
    }

    #[test]
    fn missing_marker_is_rejected() {
        let err = splice("no marker here", MARK, "x;").unwrap_err();
        assert_eq!(
            err,
            DomainError::MarkerNotFound {
                marker: MARK.into(),
                occurrences: 0
            }
        );
    }

    #[test]
    fn duplicate_marker_is_rejected() {
        let err = splice("// MARK\n// MARK\n", MARK, "x;").unwrap_err();
        assert!(matches!(
            err,
            DomainError::MarkerNotFound { occurrences: 2, .. }
        ));
    }

    #[test]
    fn marker_sharing_a_line_gets_no_indent() {
        let out = splice("foo(); // MARK", MARK, "x;").unwrap();
        assert_eq!(out, "foo(); x;\n// MARK");
    }

    #[test]
    fn marker_at_end_without_newline() {
        let out = splice("// MARK", MARK, "x;").unwrap();
        assert_eq!(out, "x;\n// MARK");
    }

    #[test]
    fn statement_containing_marker_is_rejected() {
        let text = "    ::class\n";
        let err = splice(text, "::class", "bind(A::class, B::class);").unwrap_err();
        assert_eq!(
            err,
            DomainError::MarkerInStatement {
                marker: "::class".into()
            }
        );
    }

    #[test]
    fn crlf_host_keeps_crlf() {
        let text = "{\r\n    // MARK\r\n}\r\n";
        let out = splice(text, MARK, "bind(X);").unwrap();
        assert_eq!(out, "{\r\n    bind(X);\r\n    // MARK\r\n}\r\n");
    }
}
