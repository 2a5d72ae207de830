//! Computer opponent.
//!
//! - `ComputerMemory`: rank -> positions the computer has seen face up
//! - `ComputerAgent`: memory first, random otherwise

mod computer;
mod memory;

pub use computer::{AgentChoice, ComputerAgent, PickSource};
pub use memory::{ComputerMemory, Remembered};
