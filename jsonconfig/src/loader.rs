//! Load entry points tying stripping, decoding, defaulting and flattening
//! together.
//!
//! Every entry point strips `//` line comments, decodes the remainder with
//! the standard JSON decoder, and requires a top-level object. The abstract
//! loaders classify the result into a [`Value`](crate::Value) tree, apply a
//! defaults document, and (unless the no-collapse variant is used) flatten
//! the tree into dot-path entries. The typed loaders decode straight into a
//! caller-supplied structure instead.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::Configuration;
use crate::error::ConfigError;
use crate::merge::{apply_defaults, overlay};
use crate::strip::CommentStripper;
use crate::value::{Map, Value};

/// Loads a configuration file, applying `defaults` and flattening the
/// result.
///
/// `defaults` is a partial example of the configuration expressed as a JSON
/// object string (it may itself contain `//` comments); pass `""` to skip
/// defaulting. Keys present in the file always win over defaults; only
/// object/object collisions merge recursively.
///
/// # Errors
///
/// Returns [`ConfigError::Source`] when the file cannot be opened and
/// [`ConfigError::Parse`] when either document is not a valid JSON object
/// after comment stripping. No partially built configuration escapes on
/// error.
pub fn load_abstract(
    path: impl AsRef<Path>,
    defaults: &str,
) -> Result<Configuration, ConfigError> {
    let root = read_file_root(path.as_ref())?;
    build(root, defaults, true)
}

/// Loads a configuration file like [`load_abstract`] but skips flattening.
///
/// The result holds only the literal top-level keys, which avoids any
/// ambiguity between literal dotted keys and generated paths; structural
/// queries through [`Configuration::get`] remain available.
///
/// # Errors
///
/// As for [`load_abstract`].
pub fn load_abstract_no_collapse(
    path: impl AsRef<Path>,
    defaults: &str,
) -> Result<Configuration, ConfigError> {
    let root = read_file_root(path.as_ref())?;
    build(root, defaults, false)
}

/// Loads a configuration from an in-memory string, applying `defaults` and
/// flattening the result.
///
/// Same pipeline as [`load_abstract`], differing only in the byte source.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] when either document is not a valid JSON
/// object after comment stripping.
///
/// # Examples
///
/// ```rust
/// use jsonconfig::load_string;
///
/// let config = load_string(
///     r#"
///     {
///       // tuning for the local environment
///       "s": "string value"
///     }
///     "#,
///     r#"{"d": 4, "s": "only a default"}"#,
/// )?;
/// assert_eq!(config["d"].integer(), 4);
/// assert_eq!(config["s"].string(), "string value");
/// # Ok::<_, jsonconfig::ConfigError>(())
/// ```
pub fn load_string(source: &str, defaults: &str) -> Result<Configuration, ConfigError> {
    let root = decode_root(source.as_bytes())?;
    build(root, defaults, true)
}

/// Loads a configuration from an in-memory string like [`load_string`] but
/// skips flattening.
///
/// # Errors
///
/// As for [`load_string`].
pub fn load_string_no_collapse(
    source: &str,
    defaults: &str,
) -> Result<Configuration, ConfigError> {
    let root = decode_root(source.as_bytes())?;
    build(root, defaults, false)
}

/// Decodes a configuration file straight into `target`, bypassing the value
/// abstraction.
///
/// Only fields present in the source are overwritten, so defaults are
/// expressed by pre-populating `target` before the call.
///
/// # Errors
///
/// Returns [`ConfigError::Source`] when the file cannot be opened,
/// [`ConfigError::Parse`] when the comment-stripped text is not valid JSON,
/// and [`ConfigError::Decode`] when the decoded shape is incompatible with
/// `T`. `target` is left in its pre-call state on error.
pub fn load_into<T>(path: impl AsRef<Path>, target: &mut T) -> Result<(), ConfigError>
where
    T: Serialize + DeserializeOwned,
{
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "decoding configuration file into target");
    decode_into(open(path)?, target)
}

/// Decodes an in-memory configuration string straight into `target`,
/// bypassing the value abstraction.
///
/// # Errors
///
/// As for [`load_into`], minus the file-opening failure mode.
///
/// # Examples
///
/// ```rust
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Server {
///     host: String,
///     port: u16,
/// }
///
/// let mut server = Server { host: "localhost".to_owned(), port: 80 };
/// jsonconfig::load_str_into(r#"{"port": 8080} // host keeps its default"#, &mut server)?;
/// assert_eq!(server.host, "localhost");
/// assert_eq!(server.port, 8080);
/// # Ok::<_, jsonconfig::ConfigError>(())
/// ```
pub fn load_str_into<T>(source: &str, target: &mut T) -> Result<(), ConfigError>
where
    T: Serialize + DeserializeOwned,
{
    decode_into(source.as_bytes(), target)
}

fn open(path: &Path) -> Result<BufReader<File>, ConfigError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| ConfigError::Source {
            path: path.to_path_buf(),
            source,
        })
}

fn read_file_root(path: &Path) -> Result<Map, ConfigError> {
    tracing::debug!(path = %path.display(), "loading configuration file");
    decode_root(open(path)?)
}

/// Strips comments from `source` and decodes it as a top-level JSON object,
/// classifying every member into the value abstraction.
fn decode_root<R: Read>(source: R) -> Result<Map, ConfigError> {
    let raw: serde_json::Map<String, serde_json::Value> =
        serde_json::from_reader(CommentStripper::new(source)).map_err(ConfigError::Parse)?;
    Ok(raw
        .into_iter()
        .map(|(key, member)| (key, Value::from(member)))
        .collect())
}

fn build(mut root: Map, defaults: &str, collapsed: bool) -> Result<Configuration, ConfigError> {
    if !defaults.is_empty() {
        let default_root = decode_root(defaults.as_bytes())?;
        apply_defaults(&mut root, default_root);
    }
    Ok(Configuration::from_root(root, collapsed))
}

fn decode_into<R, T>(source: R, target: &mut T) -> Result<(), ConfigError>
where
    R: Read,
    T: Serialize + DeserializeOwned,
{
    let parsed: serde_json::Value =
        serde_json::from_reader(CommentStripper::new(source)).map_err(ConfigError::Parse)?;
    let mut staged = serde_json::to_value(&*target).map_err(ConfigError::Decode)?;
    overlay(&mut staged, parsed);
    *target = serde_json::from_value(staged).map_err(ConfigError::Decode)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_defaults_skip_the_defaults_parse() {
        let config = load_string(r#"{"a": 1}"#, "").expect("valid source");
        assert_eq!(config["a"].integer(), 1);
    }

    #[test]
    fn malformed_defaults_fail_the_load() {
        let err = load_string(r#"{"a": 1}"#, "{not json").expect_err("defaults are malformed");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn non_object_roots_are_parse_errors() {
        let err = load_string("[1, 2, 3]", "").expect_err("root must be an object");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
