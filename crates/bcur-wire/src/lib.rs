#![warn(clippy::pedantic)]

pub mod cursor;
pub mod error;
pub mod int;
pub mod slice;
pub mod span;
pub mod timestamp;

pub use cursor::ByteCursor;
pub use error::WireError;
pub use int::BitWidth;
pub use span::Span;
pub use timestamp::UnixTime32;
