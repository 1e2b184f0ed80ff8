use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("value {value} has no home slot in a base-{base} domain of length {len}")]
    OutOfDomain { value: i64, base: i64, len: usize },
    #[error("buffer of length {len} is shorter than the required {min}")]
    LengthTooShort { len: usize, min: usize },
}
