// src/format/mod.rs
//
// Response Formatting

pub mod mana;
pub mod response;
pub mod type_line;


pub use mana::ManaTextFormatter;
pub use response::{ResponseFormatter, ResponseMode};
pub use type_line::TypeLineFormatter;
