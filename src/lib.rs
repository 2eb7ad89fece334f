#![doc = include_str!("../README.md")]

#[cfg(feature = "mimalloc")]
use mimalloc::MiMalloc;
#[cfg_attr(feature = "mimalloc", global_allocator)]
#[cfg(feature = "mimalloc")]
static GLOBAL: MiMalloc = MiMalloc;

pub mod config;
pub mod dispatch;
pub mod distance;
#[doc(hidden)]
pub mod error;
pub mod fare;
pub mod io;
pub mod pipeline;
pub mod tariff;
pub mod trip;
pub mod util;

#[doc(inline)]
pub use error::Error;

pub use config::Config;
pub use dispatch::{Dispatcher, FareTable};
pub use fare::{Fare, FareCalculator};
pub use pipeline::{calculate_fares, Report};
pub use trip::Ping;
