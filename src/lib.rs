pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod graph;
pub mod logging;
pub mod publish;
pub mod simplify;
pub mod threads;

#[cfg(test)]
mod tests;
