//! json-value - a mutable, dynamically-typed JSON document model.
//!
//! A document is a tree of [`Value`] nodes. Nodes can be built directly,
//! decoded from text, reshaped in place and deep-copied with [`Clone`].
//! A [`Path`] addresses a node by object keys and array indices; [`walk`]
//! visits every node in pre-order and [`find`] looks one up by path.
//!
//! Number literals are stored as exact decimal text ([`Number`]), so decoding
//! and re-encoding a document never loses precision.
//!
//! # Example
//!
//! ```
//! use json_value::{find, Path, Value};
//!
//! let mut doc = Value::from_json_str(r#"{"items": [{"price": 10.50}]}"#).unwrap();
//! doc.object_get_elm_mut("items")
//!     .array_add_elm([Value::object([("price", Value::number(3))])]);
//!
//! let price = find(&doc, &Path::from(["items", "0", "price"])).unwrap();
//! assert_eq!(price.number_get().as_str(), "10.50");
//! assert_eq!(doc.to_string(), r#"{"items":[{"price":10.50},{"price":3}]}"#);
//! ```
//!
//! Accessors are only valid for the matching [`Type`]; calling one on the
//! wrong shape is a programming error and panics. Every such accessor has a
//! `try_` counterpart returning [`Error`].

pub mod error;
mod json;
pub mod number;
pub mod path;
pub mod types;
pub mod value;
pub mod walk;

pub use error::{Error, Result};
pub use number::Number;
pub use path::{Key, Path};
pub use types::Type;
pub use value::{Props, Value};
pub use walk::{find, walk};
