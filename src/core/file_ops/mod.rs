pub mod attributes;
pub mod scanner;
