#[derive(thiserror::Error, Debug)]
pub enum LottoError {
    #[error("No validators specified")]
    NoValidators,
    #[error("Amount must be a positive integer")]
    NonPositiveAmount,
    #[error("Sample larger than population or is negative (amount: {amount})")]
    SampleOutOfRange { amount: i64 },
    #[error("Input closed before the round was finished")]
    InputClosed,
    #[error("Console io error (error: {0})")]
    Io(#[from] std::io::Error),
}
