pub mod blocks;
pub mod client;
pub mod compose;
pub mod error;
pub mod sink;

pub use blocks::{Block, SlackMessage, Text};
pub use client::SlackClient;
pub use compose::compose;
pub use error::SlackError;
pub use sink::{MemorySink, MessageSink};
