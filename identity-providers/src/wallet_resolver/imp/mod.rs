pub mod resolver;
pub mod strategies;
