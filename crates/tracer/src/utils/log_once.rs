//! `warn_once!` and `error_once!`: log a message the first time a call site is reached,
//! stay silent afterwards.
//!
//! Per-pixel code would otherwise flood the output with the same warning.
//! Both macros evaluate to `true` on the call that actually logged.

#[doc(hidden)]
pub use log as __log;

#[doc(hidden)]
#[macro_export]
macro_rules! __log_once {
    ($lvl:ident, $($arg:tt)+) => {{
        use std::sync::atomic::{AtomicBool, Ordering};
        static FIRED: AtomicBool = AtomicBool::new(false);

        let first = !FIRED.swap(true, Ordering::Relaxed);
        if first {
            $crate::utils::log_once::__log::log!(
                $crate::utils::log_once::__log::Level::$lvl,
                $($arg)+
            );
        }
        first
    }};
}

#[macro_export]
macro_rules! warn_once {
    ($($arg:tt)+) => ($crate::__log_once!(Warn, $($arg)+));
}

#[macro_export]
macro_rules! error_once {
    ($($arg:tt)+) => ($crate::__log_once!(Error, $($arg)+));
}

pub use error_once;
pub use warn_once;
