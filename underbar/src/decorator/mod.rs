mod delay;
mod memoize;
mod once;

pub use delay::delay;
pub use memoize::{memoize, Memoize};
pub use once::{once, Once};
