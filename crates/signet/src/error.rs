/// Core library error type.
///
/// Minting is pure computation apart from the clock read; HMAC key import
/// accepts any key length and cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum SignetError {
    /// The system clock reads before the Unix epoch.
    #[error("system clock is before the Unix epoch")]
    Clock,
}
