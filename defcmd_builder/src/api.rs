mod core;
mod property;

pub use self::core::*;
pub use property::*;
