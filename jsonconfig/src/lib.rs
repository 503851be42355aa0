//! Comment-tolerant JSON configuration loading.
//!
//! `jsonconfig` loads JSON configuration text that may contain `//` line
//! comments, fills gaps from a defaults document, and exposes the result
//! both as a nested [`Value`] tree and as a flattened dot-path mapping for
//! single-lookup access to deeply nested values.
//!
//! Comments are removed by a streaming byte filter before parsing, so string
//! literals containing `//` are never corrupted and ordinary JSON semantics
//! are otherwise untouched. Only single-line `//` comments are supported;
//! this is not a general lenient JSON dialect.
//!
//! # Examples
//!
//! ```rust
//! use jsonconfig::load_string;
//!
//! let config = load_string(
//!     r#"
//!     {
//!       // comments are stripped before parsing
//!       "server": {
//!         "port": 8080
//!       }
//!     }
//!     "#,
//!     r#"{"server": {"host": "localhost"}}"#,
//! )?;
//!
//! // Flattened lookup and structural walking see the same tree.
//! assert_eq!(config["server.port"].integer(), 8080);
//! assert_eq!(config.get("server.host").string(), "localhost");
//! assert_eq!(config["server"].object()["port"].number(), 8080.0);
//! # Ok::<_, jsonconfig::ConfigError>(())
//! ```
//!
//! Typed loading decodes straight into a caller-supplied structure; defaults
//! are expressed by pre-populating its fields, since only fields present in
//! the source are overwritten. See [`load_into`] and [`load_str_into`].

mod collapse;
mod config;
mod error;
mod loader;
mod merge;
mod strip;
mod value;

pub use config::Configuration;
pub use error::ConfigError;
pub use loader::{
    load_abstract, load_abstract_no_collapse, load_into, load_str_into, load_string,
    load_string_no_collapse,
};
pub use strip::CommentStripper;
pub use value::{Map, Value};
