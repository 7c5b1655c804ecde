//! Logging macros that work both on target and on host.
//!
//! With the `defmt` feature enabled these forward to [`defmt`]. Without it
//! they compile to no-ops, and under `cfg(test)` they print to stderr, so the
//! library can be tested on the host without a defmt global logger. Only the
//! `{}`/`{:?}`-style syntax common to defmt and `core::fmt` may be used.

#[cfg(all(not(test), feature = "defmt"))]
mod defmt_log {
    #[macro_export]
    macro_rules! debug {
        ($($arg:expr),*) => { defmt::debug!($($arg,)*) };
    }

    #[macro_export]
    macro_rules! info {
        ($($arg:expr),*) => { defmt::info!($($arg,)*) };
    }

    #[macro_export]
    macro_rules! warn {
        ($($arg:expr),*) => { defmt::warn!($($arg,)*) };
    }
}

#[cfg(all(not(test), not(feature = "defmt")))]
mod no_log {
    #[macro_export]
    macro_rules! debug {
        ($($arg:expr),*) => {{ let _ = ($($arg),*); }};
    }

    #[macro_export]
    macro_rules! info {
        ($($arg:expr),*) => {{ let _ = ($($arg),*); }};
    }

    #[macro_export]
    macro_rules! warn {
        ($($arg:expr),*) => {{ let _ = ($($arg),*); }};
    }
}

#[cfg(test)]
mod test_log {
    #[macro_export]
    macro_rules! debug {
        ($($arg:expr),*) => {{ std::eprintln!("DEBUG: {}", format_args!($($arg,)*)) }};
    }

    #[macro_export]
    macro_rules! info {
        ($($arg:expr),*) => {{ std::eprintln!("INFO: {}", format_args!($($arg,)*)) }};
    }

    #[macro_export]
    macro_rules! warn {
        ($($arg:expr),*) => {{ std::eprintln!("WARN: {}", format_args!($($arg,)*)) }};
    }
}
