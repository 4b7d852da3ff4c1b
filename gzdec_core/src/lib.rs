pub mod block;
pub mod codec;
pub mod config;
pub mod error;
pub mod session;

pub use block::decode_block;
pub use codec::{Step, StreamDecoder};
pub use config::{DecoderConfig, Method, DEFAULT_BLOCK_SIZE};
pub use error::{DecodeError, InitError};
pub use session::Session;
