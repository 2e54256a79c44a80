//! Path-label assembly for difference records.
//!
//! A path is an ordered `/`-joined sequence of segments identifying where
//! in a graph a comparison happened: root label, subobject name, nested
//! struct type names, and finally the field label (display name preferred,
//! quoted when it contains a space; array elements carry a `[i]` suffix).
//!
//! Paths are display-only strings. They are built once per recursion step
//! and never parsed back.

/// Append a field label to `path`.
///
/// The label is the display name when it is non-empty and differs from the
/// internal name (wrapped in double quotes if it contains a space),
/// otherwise the internal name.
pub fn append_label(path: &str, name: &str, display_name: Option<&str>) -> String {
    let label = match display_name {
        Some(display) if !display.is_empty() && display != name => {
            if display.contains(' ') {
                format!("\"{display}\"")
            } else {
                display.to_string()
            }
        }
        _ => name.to_string(),
    };
    format!("{path}/{label}")
}

/// Append a plain segment (a struct type name or a subobject name).
pub fn append_segment(path: &str, segment: &str) -> String {
    format!("{path}/{segment}")
}

/// Append an array-element segment: the field's internal name plus `[i]`.
pub fn append_index(path: &str, name: &str, index: usize) -> String {
    format!("{path}/{name}[{index}]")
}

/// Derive a root label from a graph identifier: the substring after the
/// last `/`, or the whole identifier when it contains none.
pub fn root_label(identifier: &str) -> &str {
    match identifier.rsplit_once('/') {
        Some((_, tail)) => tail,
        None => identifier,
    }
}
