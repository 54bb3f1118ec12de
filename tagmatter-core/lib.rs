pub mod chars;
pub mod natural;
pub mod position;
