pub mod client;
pub mod decode;

pub use client::{QaClient, StreamError};
pub use decode::StreamDecoder;
