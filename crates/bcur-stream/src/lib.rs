#![warn(clippy::pedantic)]

pub mod async_stream;
pub mod error;
pub mod limits;
pub mod stream;

pub use async_stream::AsyncStreamCursor;
pub use error::StreamError;
pub use limits::{DEFAULT_MAX_READ_LEN, ReadLimits};
pub use stream::StreamCursor;
