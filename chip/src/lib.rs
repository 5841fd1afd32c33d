//! A headless chip8 interpreter core.
//!
//! The [`ChipSet`](chip8::ChipSet) holds the machine state and executes single instructions,
//! the [`Runner`] drives it frame by frame and hands the display and the tone to the host.
pub mod chip8;
pub mod definitions;
pub mod devices;
pub mod display;
pub mod opcode;
pub mod resources;
pub mod timer;

mod error;
mod runner;

// reexporting for convinience
pub use error::*;
pub use runner::*;
