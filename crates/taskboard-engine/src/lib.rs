pub mod engine;

pub use engine::{BoardEngine, BOARD_KEY};
