//! Nesting limits shared by the encoder and the decoder.
//!
//! Decoding a node recurses once per JSON level, and a `Node` frame is large,
//! so deep documents would exhaust the thread stack long before serde_json's
//! own limit of 128 trips. Both directions check against the same bound,
//! counted the same way: every JSON object and array is one level, the root
//! object being level 1.

use serde_json::Value;

use crate::types::Node;

/// Deepest JSON nesting accepted on decode and produced on encode.
pub const MAX_NESTING_DEPTH: usize = 40;

/// Scans raw JSON text without parsing it. Returns the 1-based line and
/// column of the bracket that first goes past `limit`, if any.
pub(crate) fn find_excess_nesting(json: &str, limit: usize) -> Option<(usize, usize)> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    let mut line = 1;
    let mut column = 0;

    for b in json.bytes() {
        if b == b'\n' {
            line += 1;
            column = 0;
        } else {
            column += 1;
        }

        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                if depth > limit {
                    return Some((line, column));
                }
            }
            // Unbalanced closers are left for the parser to report.
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    None
}

pub(crate) fn value_depth(value: &Value) -> usize {
    let mut max = 0;
    let mut stack = vec![(value, 0usize)];
    while let Some((value, parent)) = stack.pop() {
        match value {
            Value::Array(items) => {
                let depth = parent + 1;
                max = max.max(depth);
                stack.extend(items.iter().map(|v| (v, depth)));
            }
            Value::Object(map) => {
                let depth = parent + 1;
                max = max.max(depth);
                stack.extend(map.values().map(|v| (v, depth)));
            }
            _ => {}
        }
    }
    max
}

/// JSON nesting depth `node` will have once encoded.
pub(crate) fn node_depth(node: &Node) -> usize {
    let mut max = 0;
    let mut stack = vec![(node, 1usize)];
    while let Some((node, d)) = stack.pop() {
        max = max.max(d);
        if node.modifier.is_some() || node.text_style.is_some() {
            max = max.max(d + 1);
        }
        for slot in [&node.top_bar, &node.content, &node.floating_action_button] {
            if let Some(child) = slot {
                stack.push((&**child, d + 1));
            }
        }
        if let Some(children) = &node.children {
            max = max.max(d + 1);
            stack.extend(children.iter().map(|c| (c, d + 2)));
        }
        if let Some(columns) = &node.columns {
            max = max.max(d + 1);
            for column in columns {
                let styled = column.text_style.is_some() || column.header_style.is_some();
                max = max.max(if styled { d + 3 } else { d + 2 });
            }
        }
        if let Some(rows) = &node.table_data {
            max = max.max(d + 1);
            for row in rows {
                max = max.max(d + 2);
                for cell in row {
                    let styled = cell.text_style.is_some() || cell.modifier.is_some();
                    max = max.max(if styled { d + 4 } else { d + 3 });
                }
            }
        }
    }
    max
}
