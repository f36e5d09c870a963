pub(crate) mod case;

#[cfg(test)]
mod tests;
