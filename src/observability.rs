//! This module provides observability and diagnostics capabilities for the
//! stream driver.
//!
//! The corridor logic makes a silent keep/drop decision on every sample.
//! This module provides structured logging hooks to make those decisions
//! transparent and debuggable. The `log_metric!` macro is the primary tool.
//!
//! It is a zero-cost abstraction: the `#[cfg(debug_assertions)]` attribute ensures
//! that the macro and all calls to it are completely compiled out of release builds,
//! imposing no performance penalty in production.

use num_traits::ToPrimitive;

/// Logs a structured key-value metric string to stdout, only in debug builds.
///
/// # Example
/// ```
/// use swingdoor_core::log_metric;
/// let side = "upper";
/// log_metric!("event"="breach", "side"=&side);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            // Collect each pair as a JSON string fragment
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            let output = format!("SWINGDOOR_METRIC: {{ {} }}", parts.join(", "));
            println!("{}", output);
        }
    };
}

/// Widens a sample coordinate to `f64` for log formatting, whatever float
/// type the stream runs on.
pub(crate) fn display_value<T: ToPrimitive>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
