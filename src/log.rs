//! `debug!` and `warn!` for the drawing code.
//!
//! With the `tracing` feature these are the `tracing` macros. Without it both
//! names point at one macro that discards its arguments, so field expressions
//! are never evaluated.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __cutout_discard {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::__cutout_discard as debug;
#[cfg(not(feature = "tracing"))]
pub use crate::__cutout_discard as warn;
