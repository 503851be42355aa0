//! Dot-path flattening of merged configuration trees.
//!
//! Collapsing indexes every reachable sub-value under its dot-joined path
//! (object keys and stringified array indices as segments) in the same
//! mapping that holds the literal keys, at every nesting level. Generated
//! entries only ever fill gaps: a literal key whose text equals a generated
//! path always keeps its own value.

use crate::value::{Map, Value};

/// Inserts a flattened `path -> value` entry for every sub-value reachable
/// from `map`, skipping paths that are already present.
///
/// Works bottom-up: each child subtree is collapsed first, so an interior
/// object's own mapping also carries the flattened paths of everything below
/// it, and the entries lifted into the parent are built from the already
/// flattened child.
pub(crate) fn collapse(map: &mut Map) {
    // Snapshot the literal keys so freshly generated entries are not
    // themselves expanded again.
    let keys: Vec<String> = map.keys().cloned().collect();
    for key in keys {
        if let Some(child) = map.get_mut(&key) {
            collapse_value(child);
        }
        let generated: Vec<(String, Value)> = map.get(&key).map_or_else(Vec::new, |child| {
            path_entries(child)
                .into_iter()
                .map(|(path, value)| (format!("{key}.{path}"), value))
                .collect()
        });
        for (path, value) in generated {
            map.entry(path).or_insert(value);
        }
    }
}

fn collapse_value(value: &mut Value) {
    match value {
        Value::Object(map) => collapse(map),
        Value::Array(items) => {
            for item in items {
                collapse_value(item);
            }
        }
        _ => {}
    }
}

/// Dot-path entries directly derivable from an already-collapsed value.
///
/// A collapsed object's mapping already contains its deep paths, so its
/// entries are lifted as they are. Array elements contribute their index and,
/// recursively, their own entries behind that index.
fn path_entries(value: &Value) -> Vec<(String, Value)> {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, child)| (key.clone(), child.clone()))
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .flat_map(|(index, item)| {
                let mut entries = vec![(index.to_string(), item.clone())];
                entries.extend(
                    path_entries(item)
                        .into_iter()
                        .map(|(path, child)| (format!("{index}.{path}"), child)),
                );
                entries
            })
            .collect(),
        _ => Vec::new(),
    }
}
