pub mod model;
pub mod translator;

#[cfg(test)]
mod tests;
