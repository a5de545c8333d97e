pub mod events;
pub mod rounds;
pub mod teams;
pub mod winners;

pub use events::{EventCategory, PublishedPartition};
pub use winners::WinnerPosition;
