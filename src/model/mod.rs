pub mod content;
pub mod state;
pub mod ticker;

pub use content::*;
pub use state::*;
pub use ticker::*;
