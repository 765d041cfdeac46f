mod console;
pub use console::*;

mod recommendations;
pub use recommendations::*;

mod refinements;
pub use refinements::*;

mod search;
pub use search::*;

mod synonyms;
pub use synonyms::*;
