pub mod serialize;
#[cfg(test)]
pub mod tests;
