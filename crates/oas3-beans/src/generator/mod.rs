pub mod errors;
pub mod java;
pub mod metrics;
pub mod orchestrator;
pub mod render;
pub mod schema;

#[cfg(test)]
mod tests;
