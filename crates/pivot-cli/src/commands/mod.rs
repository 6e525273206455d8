pub mod check;
pub mod find;
