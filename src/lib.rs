pub mod config;
pub mod error;
pub mod fetch;
pub mod member;
pub mod pipeline;
pub mod present;
pub mod process;

pub use config::Config;
pub use error::{FeedError, Result};
pub use member::{JoinDateSource, MemberRecord};
pub use pipeline::RosterPipeline;
