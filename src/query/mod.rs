//! # Queries
//!
//! Query builder with the four comparison builders, the observation markers
//! read by subscription managers and the pointer rewriting applied to
//! comparison values once patches are installed.

mod observe;
mod pointer;
#[allow(clippy::module_inception)]
mod query;
mod value;

#[doc(inline)]
pub use observe::{EnrollFn, ObserveCountFn, ObserveOneFn};

pub(crate) use observe::{enroll_with, observe_count, observe_one};

#[doc(inline)]
pub use pointer::rewrite_pointer_value;

pub(crate) use pointer::rewrite_pointers;

#[doc(inline)]
pub use query::{ComparisonFn, ComparisonOp, ObservationMode, Query};

#[doc(inline)]
pub use value::QueryValue;
