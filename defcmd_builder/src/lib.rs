//! Builder module for `defcmd`.
//! See [documentation root](https://docs.rs/defcmd/latest/defcmd/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod definition;
mod matcher;
mod model;
mod parser;
pub mod prelude;
mod suggest;
mod tokenizer;

pub use api::*;
pub use model::*;
pub use parser::CmdLineError;
pub use prelude::{CommandListener, PropertySink};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
