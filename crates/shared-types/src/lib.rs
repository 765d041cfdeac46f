pub mod config;
pub mod error;
pub mod product;
pub mod search;
pub mod synonyms;

pub use config::*;
pub use error::*;
pub use product::*;
pub use search::*;
pub use synonyms::*;
