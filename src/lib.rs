//! # parse-react-sdk
//!
//! Convenience layer over a Parse client SDK: flattening objects for display,
//! observable queries, pointer-aware comparison builders and a current-user
//! cache refresh after authentication calls.
//!
//! Everything hangs off [`sdk::ParseSdk`]. Build one with the collaborators it
//! delegates to, then call [`sdk::ParseSdk::apply_patches`] once during setup.

pub mod object;
pub mod query;
pub mod sdk;
pub mod subscription;
pub mod user;
pub mod util;

#[cfg(test)]
pub mod test_support;
