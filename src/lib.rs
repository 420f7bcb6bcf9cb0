pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{RestaurantError, Result};
pub use models::{MenuItem, Restaurant};
