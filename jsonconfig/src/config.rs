//! The dual-view configuration mapping and its query surface.
//!
//! A [`Configuration`] holds one top-level object as a mapping from string
//! keys to [`Value`]s. When built collapsed, the mapping combines the literal
//! top-level keys with a generated flattened entry for every reachable
//! sub-value, so a deeply nested scalar answers both to structural walking
//! and to a single dot-path lookup.

use std::collections::btree_map;
use std::ops::Index;

use crate::collapse::collapse;
use crate::merge::apply_defaults;
use crate::value::{Map, NULL, Value};

/// A loaded, defaulted configuration.
///
/// Read-mostly after construction: the only mutating operation is
/// [`merge`](Self::merge). Safe to read concurrently once no longer mutated;
/// concurrent mutation must be serialised by the caller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Configuration {
    entries: Map,
    collapsed: bool,
}

impl Configuration {
    /// Builds a configuration from a merged top-level object, optionally
    /// indexing every reachable sub-value under its dot-joined path.
    pub(crate) fn from_root(mut root: Map, collapsed: bool) -> Self {
        if collapsed {
            collapse(&mut root);
        }
        Self {
            entries: root,
            collapsed,
        }
    }

    /// Resolves `path` strictly through structural nesting.
    ///
    /// The path is split on `.` and walked segment by segment through the
    /// nested tree: objects resolve segments as keys, arrays parse them as
    /// indices. A missing segment, an unparsable index, or a scalar met
    /// before the path is exhausted yields the zero [`Value`], whose
    /// accessors all return their zero defaults.
    ///
    /// Unlike indexing, this never observes literal dotted keys below the
    /// top level, so it can disambiguate a colliding flattened entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonconfig::load_string;
    ///
    /// let config = load_string(r#"{"server": {"ports": [8080, 8081]}}"#, "")?;
    /// assert_eq!(config.get("server.ports.1").integer(), 8081);
    /// assert!(config.get("server.missing").is_null());
    /// # Ok::<_, jsonconfig::ConfigError>(())
    /// ```
    #[must_use]
    pub fn get(&self, path: &str) -> &Value {
        let mut segments = path.split('.');
        let Some(first) = segments.next() else {
            return &NULL;
        };
        let Some(mut current) = self.entries.get(first) else {
            return &NULL;
        };
        for segment in segments {
            let child = match current {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| items.get(index)),
                _ => None,
            };
            let Some(child) = child else {
                return &NULL;
            };
            current = child;
        }
        current
    }

    /// Merges `other` into `self` in place, treating `other` as defaults.
    ///
    /// Keys unique to `other` are added; keys present in both as objects
    /// merge recursively; scalar and array collisions keep `self`'s value
    /// (arrays are never merged element-wise). A collapsed configuration is
    /// re-collapsed afterwards so freshly added subtrees gain their
    /// flattened paths.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonconfig::load_string;
    ///
    /// let mut config = load_string(r#"{"x": 1, "arr": ["one"]}"#, "")?;
    /// let other = load_string(r#"{"x": 2, "arr": ["two", "three"], "y": 2}"#, "")?;
    /// config.merge(other);
    /// assert_eq!(config["x"].integer(), 1);
    /// assert_eq!(config["arr"].array().len(), 1);
    /// assert_eq!(config["y"].integer(), 2);
    /// # Ok::<_, jsonconfig::ConfigError>(())
    /// ```
    pub fn merge(&mut self, other: Self) {
        tracing::trace!(added_keys = other.entries.len(), "merging configuration");
        apply_defaults(&mut self.entries, other.entries);
        if self.collapsed {
            collapse(&mut self.entries);
        }
    }

    /// Number of entries in the top-level mapping, generated paths included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the mapping holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` when `key` exists as a literal or generated entry.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over all entries, literal and generated, in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Iterates over all keys, literal and generated, in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Index<&str> for Configuration {
    type Output = Value;

    /// Looks `key` up in the top-level mapping.
    ///
    /// Both literal keys and, on a collapsed configuration, generated
    /// dot-path entries resolve here; when a literal key collides with a
    /// path that flattening would generate, the literal key's value is
    /// returned. Absent keys yield the zero [`Value`] rather than panicking.
    fn index(&self, key: &str) -> &Value {
        self.entries.get(key).unwrap_or(&NULL)
    }
}

impl<'a> IntoIterator for &'a Configuration {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
