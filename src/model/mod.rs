pub mod input;
pub mod records;
pub mod score;
pub mod types;

pub use input::*;
pub use records::*;
pub use score::*;
pub use types::*;
