pub mod events;

pub use events::{EventResult, WindowEvent};
