use thiserror::Error;

/// Indentation placed before the end marker after an injected payload.
const TRAILING_INDENT: &str = "    ";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InjectError {
    #[error("marker `{marker}` not found in document")]
    MissingMarker { marker: String },
    #[error("end marker `{end}` only appears before start marker `{start}`")]
    MarkerOutOfOrder { start: String, end: String },
    #[error("markers must not be empty")]
    EmptyMarker,
}

/// Replaces everything between `start` and `end` with `payload`.
///
/// Both markers are kept. The result is the document up to and including
/// `start`, a newline, the payload verbatim, a newline, four spaces, then
/// the document from `end` onward. `end` is searched from the insertion
/// point, so an earlier occurrence of it is never used.
pub fn inject(
    document: &str,
    payload: &str,
    start: &str,
    end: &str,
) -> Result<String, InjectError> {
    if start.is_empty() || end.is_empty() {
        return Err(InjectError::EmptyMarker);
    }

    let start_idx = document.find(start).ok_or_else(|| InjectError::MissingMarker {
        marker: start.to_string(),
    })?;
    let insert_at = start_idx + start.len();

    let end_idx = match document[insert_at..].find(end) {
        Some(offset) => insert_at + offset,
        None if document[..insert_at].contains(end) => {
            return Err(InjectError::MarkerOutOfOrder {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        None => {
            return Err(InjectError::MissingMarker {
                marker: end.to_string(),
            });
        }
    };

    let mut out = String::with_capacity(
        insert_at + payload.len() + TRAILING_INDENT.len() + 2 + (document.len() - end_idx),
    );
    out.push_str(&document[..insert_at]);
    out.push('\n');
    out.push_str(payload);
    out.push('\n');
    out.push_str(TRAILING_INDENT);
    out.push_str(&document[end_idx..]);
    Ok(out)
}
