pub mod buffer;
pub mod card;

pub use buffer::{PaintBuffer, PaintOp};
