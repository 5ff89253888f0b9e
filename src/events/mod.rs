pub mod hover;
pub mod navigation;
pub mod pointer;
pub mod ticker;

pub use hover::wire_skill_hover;
pub use navigation::wire_hero_buttons;
pub use pointer::wire_pointer_glow;
pub use ticker::start_ticker;
