// Standalone components (plain markup, no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod page_header;
pub mod search_bar;
pub mod sheet;
pub mod skeleton;
pub mod star_rating;

// Primitive wrappers
pub mod checkbox;
pub mod label;
pub mod radio_group;
pub mod switch;
pub mod toast;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use checkbox::*;
pub use input::*;
pub use label::*;
pub use page_header::*;
pub use radio_group::*;
pub use search_bar::*;
pub use sheet::*;
pub use skeleton::*;
pub use star_rating::*;
pub use switch::*;
pub use toast::*;
