pub mod level;
pub mod parse;
