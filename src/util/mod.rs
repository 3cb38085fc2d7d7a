pub mod natural;
pub mod text;
