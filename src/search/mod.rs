pub mod engine;
pub mod results;
