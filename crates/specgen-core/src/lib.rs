pub mod catalog;
pub mod error;
pub mod generate;
pub mod io;
pub mod naming;
pub mod paths;
pub mod record;
pub mod render;
pub mod template;
pub mod types;

pub use error::{Result, SpecgenError};
