//! Default-merge and overlay mechanics over parsed trees.
//!
//! Two biases live here. [`apply_defaults`] fills gaps in a loaded tree from
//! a defaults tree without ever overriding what is already present; it backs
//! both defaults application at load time and
//! [`Configuration::merge`](crate::Configuration::merge). [`overlay`] is the
//! opposite bias, where the incoming layer wins; it expresses the typed
//! decode path's "only fields present in the source are overwritten"
//! behaviour over a pre-populated target.

use crate::value::{Map, Value};

/// Fills `target` with values from `defaults` without overriding anything
/// already present.
///
/// For every key in `defaults`:
///
/// - absent from `target`: the default's whole subtree is moved in;
/// - present in both as objects: the children merge recursively;
/// - present in `target` as anything else, or a type mismatch between the
///   two sides: `target` keeps its value untouched. Scalars and arrays are
///   never overridden, and arrays are never merged element-wise.
///
/// Depth-first and key-order-independent; total over well-formed trees.
pub(crate) fn apply_defaults(target: &mut Map, defaults: Map) {
    for (key, default) in defaults {
        match target.get_mut(&key) {
            None => {
                target.insert(key, default);
            }
            Some(existing) => {
                if let (Value::Object(children), Value::Object(default_children)) =
                    (existing, default)
                {
                    apply_defaults(children, default_children);
                }
            }
        }
    }
}

/// Overlays `layer` onto `target`, updating `target` in place.
///
/// Objects merge recursively with `layer` winning on leaf collisions; arrays
/// and scalars replace `target` wholesale. Merging an object into a
/// non-object target replaces the target with an empty object first.
pub(crate) fn overlay(target: &mut serde_json::Value, layer: serde_json::Value) {
    let serde_json::Value::Object(members) = layer else {
        *target = layer;
        return;
    };
    if !target.is_object() {
        *target = serde_json::Value::Object(serde_json::Map::new());
    }
    let Some(fields) = target.as_object_mut() else {
        return;
    };
    for (key, member) in members {
        match fields.get_mut(&key) {
            Some(existing) => overlay(existing, member),
            None => {
                fields.insert(key, member);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn root(raw: serde_json::Value) -> Map {
        match Value::from(raw) {
            Value::Object(map) => map,
            other => panic!("fixture must be an object, got {other:?}"),
        }
    }

    #[test]
    fn absent_keys_are_filled_from_defaults() {
        let mut target = root(json!({"present": 1}));
        apply_defaults(&mut target, root(json!({"added": {"deep": true}})));
        assert_eq!(target["present"].integer(), 1);
        assert!(target["added"].object()["deep"].boolean());
    }

    #[test]
    fn present_scalars_and_arrays_are_never_overridden() {
        let mut target = root(json!({"scalar": "kept", "array": ["one"]}));
        apply_defaults(
            &mut target,
            root(json!({"scalar": "ignored", "array": ["two", "three"]})),
        );
        assert_eq!(target["scalar"].string(), "kept");
        assert_eq!(target["array"].array().len(), 1);
        assert_eq!(target["array"].array()[0].string(), "one");
    }

    #[test]
    fn object_collisions_merge_recursively() {
        let mut target = root(json!({"nested": {"kept": "loaded", "deeper": {"a": 1}}}));
        apply_defaults(
            &mut target,
            root(json!({"nested": {"kept": "ignored", "added": 2, "deeper": {"b": 3}}})),
        );
        let nested = target["nested"].object();
        assert_eq!(nested["kept"].string(), "loaded");
        assert_eq!(nested["added"].integer(), 2);
        assert_eq!(nested["deeper"].object()["a"].integer(), 1);
        assert_eq!(nested["deeper"].object()["b"].integer(), 3);
    }

    #[test]
    fn type_mismatches_leave_the_target_untouched() {
        let mut target = root(json!({"object": {"a": 1}, "scalar": 5}));
        apply_defaults(
            &mut target,
            root(json!({"object": "not an object", "scalar": {"a": 1}})),
        );
        assert_eq!(target["object"].object()["a"].integer(), 1);
        assert_eq!(target["scalar"].integer(), 5);
    }

    #[test]
    fn overlay_lets_the_layer_win() {
        let mut target = json!({"a": 1, "b": {"x": 1}, "arr": [1, 2]});
        overlay(&mut target, json!({"b": {"y": 2}, "c": 3, "arr": [9]}));
        assert_eq!(target, json!({"a": 1, "b": {"x": 1, "y": 2}, "c": 3, "arr": [9]}));
    }

    #[test]
    fn overlay_replaces_non_object_targets_with_objects() {
        let mut target = json!(41);
        overlay(&mut target, json!({"a": 1}));
        assert_eq!(target, json!({"a": 1}));
    }
}
