pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::LocalStorage;
pub use core::fetch::{async_fetch, LoopbackFetcher};
pub use core::num::{add, inc};
pub use core::text::is_palindrome;
pub use domain::model::{Row, User};
pub use domain::ports::{Fetcher, Storage};
pub use utils::error::{Result, UtilError};
