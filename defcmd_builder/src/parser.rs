mod base;
mod interface;

pub use base::CmdLineError;
pub(crate) use interface::*;
