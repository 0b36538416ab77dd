pub mod frame;
pub mod render;
pub mod span;
pub mod style;
pub mod theme;
pub mod view;

pub use render::render;
pub use view::{Matcher, Role, ViewNode, ViewTree};
