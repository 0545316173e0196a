//! Command implementations for xtask

mod generate;
mod play;
mod replay;
mod verify;

pub use generate::Generate;
pub use play::Play;
pub use replay::Replay;
pub use verify::Verify;
