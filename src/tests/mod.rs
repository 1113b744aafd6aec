// src/tests/mod.rs

#[cfg(test)]
mod tests;
