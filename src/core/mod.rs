pub mod fetch;
pub mod num;
pub mod table;
pub mod text;

pub use crate::domain::model::{Row, User};
pub use crate::domain::ports::{Fetcher, Storage};
pub use crate::utils::error::Result;
