pub mod html;
pub mod summary;
pub mod utils;

pub use html::*;
pub use summary::*;
