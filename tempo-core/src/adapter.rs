//! Normalization of WeatherAPI.com responses into the internal model.
//!
//! Everything here is pure and synchronous. The wall clock is always passed
//! in by the caller.

pub mod aggregate;
pub mod clock;
pub mod condition;
pub mod country;
pub mod transform;

pub use aggregate::{MAX_DAILY_ENTRIES, daily_view, hourly_view};
pub use clock::{parse_clock_time, parse_clock_time_on};
pub use condition::{Category, classify};
pub use country::resolve_country_code;
pub use transform::{to_current_weather, to_forecast};
