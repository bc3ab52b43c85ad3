pub mod board_codec;

pub use board_codec::{BoardCodec, BoardEnvelope};
