pub mod commands;
pub mod ui;

pub use commands::assemble::AssembleOptions;
pub use ui::Output;
