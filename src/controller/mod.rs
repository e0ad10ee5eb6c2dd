pub mod aggregate;
pub mod events;
pub mod rater;
pub mod round;
pub mod settlement;
pub mod validation;

pub use aggregate::*;
pub use events::*;
pub use rater::*;
pub use round::*;
pub use settlement::*;
pub use validation::*;
