//! Generated-block markers inside the README

use policy_index_utils::error::MarkerError;

pub const START_MARKER: &str = "<!-- AUTO-GENERATED-LIST:START -->";
pub const END_MARKER: &str = "<!-- AUTO-GENERATED-LIST:END -->";

/// Replace the marker block in `content` with `START\n<body>\nEND`.
///
/// Everything from the start marker through the first end marker after it is
/// replaced; text outside that range is kept byte-for-byte. The start marker
/// must occur exactly once and be followed by an end marker.
pub fn replace_generated_block(content: &str, body: &str) -> Result<String, MarkerError> {
    let start_count = content.matches(START_MARKER).count();
    if start_count > 1 {
        return Err(MarkerError::DuplicateStart { count: start_count });
    }

    let start_pos = content.find(START_MARKER).ok_or(MarkerError::MissingStart)?;
    let after_start = start_pos + START_MARKER.len();

    let end_pos = match content[after_start..].find(END_MARKER) {
        Some(offset) => after_start + offset,
        None if content[..start_pos].contains(END_MARKER) => {
            return Err(MarkerError::EndBeforeStart);
        }
        None => return Err(MarkerError::MissingEnd),
    };

    let mut out = String::with_capacity(content.len() + body.len());
    out.push_str(&content[..after_start]);
    out.push('\n');
    out.push_str(body);
    out.push('\n');
    out.push_str(&content[end_pos..]);

    Ok(out)
}
