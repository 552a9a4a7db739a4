//! # Objects
//!
//! Base SDK objects, the [`Id`] reference wrapper with its wire-level
//! [`Pointer`] form, and flattening into plain display structures.
//!
//! ```
//! use parse_react_sdk::object::{DefaultFlattener, Flatten, ParseObject};
//!
//! let mut post = ParseObject::with_object_id("Post", "p1");
//! post.set("title", "hello");
//! let plain = DefaultFlattener.flatten(&post).unwrap();
//! assert_eq!(plain.to_json()["title"], "hello");
//! ```

mod flatten;
mod id;
mod model;

#[doc(inline)]
pub use flatten::{AsReference, DefaultFlattener, Flatten, PlainAttributes, PlainObject, PlainValue};

#[doc(inline)]
pub use id::{Id, Pointer};

#[doc(inline)]
pub use model::{AttributeValue, Attributes, ParseObject};
