// HTTP routes
pub mod docs;
pub mod health;
pub mod jobs;

pub use docs::*;
pub use health::*;
pub use jobs::*;
