mod compiler;
mod token;

pub(crate) use compiler::*;
pub(crate) use token::*;
