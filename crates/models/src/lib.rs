pub mod errors;
pub mod db;
pub mod vehicle;

#[cfg(test)]
mod tests;
