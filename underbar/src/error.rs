use thiserror::Error;

/// Errors raised by the operations that can fail.
///
/// Most operations degrade silently on unusual input. Only method
/// invocation fails, and only when the method can't be called as asked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The receiver has no method with this name.
    #[error("method `{method}` is not available on {receiver}")]
    MethodNotFound {
        method: String,
        receiver: &'static str,
    },
    /// The method exists but the arguments don't fit it.
    #[error("method `{method}` expects {expected} argument(s), got {got}")]
    InvalidArguments {
        method: String,
        expected: usize,
        got: usize,
    },
    /// The receiver doesn't support methods at all.
    #[error("cannot invoke a method on {receiver}")]
    NotInvocable { receiver: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
