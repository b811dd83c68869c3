//! Clock configuration macros
//!
//! This module provides the `define_clock_config!` macro for easy creation
//! of custom clock configurations.

/// Macro to define a custom clock configuration
///
/// This macro creates a new struct that implements the `ClockConfig` trait.
/// Omitted fields fall back to the `DefaultConfig` values. Doc comments and
/// other outer attributes written before `name:` are placed on the struct.
///
/// # Example
///
/// ```rust
/// use hlclock::config::{define_clock_config, ClockConfig};
///
/// define_clock_config! {
///     /// Nodes inside one datacenter
///     name: DatacenterConfig,
///     max_forward_drift_millis: 1_000,
/// }
///
/// assert!(DatacenterConfig::drift_guarded());
/// assert!(DatacenterConfig::validate().is_ok());
/// ```
#[macro_export]
macro_rules! define_clock_config {
    (
        name: $name:ident
        $(, max_forward_drift_millis: $drift:expr)?
        $(, max_logical: $logical:expr)?
        $(,)?
    ) => {
        $crate::define_clock_config! {
            /// Custom clock configuration
            name: $name
            $(, max_forward_drift_millis: $drift)?
            $(, max_logical: $logical)?
        }
    };

    (
        $(#[$meta:meta])+
        name: $name:ident
        $(, max_forward_drift_millis: $drift:expr)?
        $(, max_logical: $logical:expr)?
        $(,)?
    ) => {
        $(#[$meta])+
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl $crate::config::ClockConfig for $name {
            const MAX_FORWARD_DRIFT_MILLIS: u64 =
                $crate::define_clock_config!(@default $($drift)?, u64::MAX);
            const MAX_LOGICAL: u64 = $crate::define_clock_config!(@default $($logical)?, u64::MAX);
        }
    };

    // Helper macro for default values
    (@default $value:expr, $default:expr) => { $value };
    (@default , $default:expr) => { $default };
}

// Re-export the macro for convenience
pub use define_clock_config;
