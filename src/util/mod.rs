pub mod errors;

pub use errors::{
    internal_error, invalid_argument, invalid_session, network_error, object_not_found,
    unsupported, ParseError, ParseErrorCode, ParseResult,
};
