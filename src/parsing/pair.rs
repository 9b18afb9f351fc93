use std::io::Read;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

use crate::core::types::SequenceRole;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid pair file format: {0}")]
    InvalidFormat(String),

    #[error("No {0} sequence found in input")]
    MissingSequence(SequenceRole),
}

/// Raw reference and candidate text, exactly as read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencePair {
    pub reference: String,
    pub candidate: String,
}

/// Read a pair file, or stdin when `path` is `-`
///
/// # Errors
///
/// Returns `ParseError::Io` if the input cannot be read, or other parse
/// errors if the content is invalid.
pub fn read_pair(path: &Path) -> Result<SequencePair, ParseError> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    parse_pair_text(&content)
}

/// Parse pair text: the reference on the first content line and the
/// candidate on the second.
///
/// Blank lines and lines starting with `#` are skipped. A line may carry a
/// `reference:` or `candidate:` label, in which case it fills that slot
/// regardless of order. Filler inside a line is kept as is.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a label is repeated, or
/// `ParseError::MissingSequence` if either slot stays empty.
pub fn parse_pair_text(text: &str) -> Result<SequencePair, ParseError> {
    let mut reference: Option<String> = None;
    let mut candidate: Option<String> = None;

    for (i, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        let (role, value) = match split_label(line) {
            Some((role, value)) => (Some(role), value),
            None => (None, line),
        };

        let slot = match role {
            Some(SequenceRole::Reference) => &mut reference,
            Some(SequenceRole::Candidate) => &mut candidate,
            None if reference.is_none() => &mut reference,
            None if candidate.is_none() => &mut candidate,
            None => {
                warn!("Ignoring extra line {line_num} in pair input");
                continue;
            }
        };

        if slot.is_some() {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} repeats the {} sequence",
                role.unwrap_or(SequenceRole::Candidate)
            )));
        }
        *slot = Some(value.to_string());
    }

    Ok(SequencePair {
        reference: reference.ok_or(ParseError::MissingSequence(SequenceRole::Reference))?,
        candidate: candidate.ok_or(ParseError::MissingSequence(SequenceRole::Candidate))?,
    })
}

fn split_label(line: &str) -> Option<(SequenceRole, &str)> {
    let (label, value) = line.split_once(':')?;
    let role = match label.trim().to_lowercase().as_str() {
        "reference" | "ref" => SequenceRole::Reference,
        "candidate" | "cand" => SequenceRole::Candidate,
        _ => return None,
    };
    Some((role, value))
}
