//! Crate-internal logging shims.
//!
//! With the `defmt` feature the macros forward to `defmt`; otherwise they
//! expand to nothing while still type-checking their arguments.

#[cfg(feature = "defmt")]
pub(crate) use defmt::{debug as log_debug, trace as log_trace, warn as log_warn};

#[cfg(not(feature = "defmt"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        let _ = ($($arg)*,);
    }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        let _ = ($($arg)*,);
    }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        let _ = ($($arg)*,);
    }};
}

#[cfg(not(feature = "defmt"))]
pub(crate) use {log_debug, log_trace, log_warn};
