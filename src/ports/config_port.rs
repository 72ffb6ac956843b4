//! Configuration access port trait.
//!
//! Numeric getters return `Ok(None)` for a missing key and `Err` with the
//! parser's message when the value is present but not a number.

pub trait ConfigPort {
    fn get_int(&self, section: &str, key: &str) -> Result<Option<i64>, String>;
    fn get_double(&self, section: &str, key: &str) -> Result<Option<f64>, String>;
}
