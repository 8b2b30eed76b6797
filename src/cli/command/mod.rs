pub mod fetch;
pub mod preview;

pub use fetch::fetch;
pub use preview::preview;
