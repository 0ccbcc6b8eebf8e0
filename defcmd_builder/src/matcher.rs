mod core;
mod model;
mod registry;

pub(crate) use self::core::{MatchError, TokenMatcher};
pub(crate) use model::CloseError;
pub(crate) use registry::Registry;
