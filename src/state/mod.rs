pub mod direction;
pub mod layout;
pub mod matching;
pub mod selection;

pub use layout::Layout;
pub use matching::{MatchOutcome, evaluate};
pub use selection::Drag;
