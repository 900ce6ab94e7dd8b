//! Selection list formatting
//!
//! Downstream clients take a compact, 1-based listing of file indices;
//! consecutive runs collapse into ranges: `{1,2,3,7,8,10}` becomes
//! `"1-3,7-8,10"`.

use std::fmt::Write;

/// Collapse sorted ascending 1-based indices into range notation
///
/// Duplicates fold into their run. An empty slice yields an empty string.
pub fn collapse_ranges(ordinals: &[usize]) -> String {
    let mut out = String::new();
    let mut iter = ordinals.iter().copied();

    let Some(first) = iter.next() else {
        return out;
    };

    let mut start = first;
    let mut end = first;
    for value in iter {
        if value <= end + 1 {
            end = end.max(value);
            continue;
        }
        push_range(&mut out, start, end);
        start = value;
        end = value;
    }
    push_range(&mut out, start, end);

    out
}

fn push_range(out: &mut String, start: usize, end: usize) {
    if !out.is_empty() {
        out.push(',');
    }
    if start == end {
        let _ = write!(out, "{}", start);
    } else {
        let _ = write!(out, "{}-{}", start, end);
    }
}
