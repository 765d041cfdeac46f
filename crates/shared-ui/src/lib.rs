mod components;
pub use components::*;
