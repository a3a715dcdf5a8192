#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors produced by `aulos-consumer`.
///
/// `Demux` and `Transport` carry collaborator failures: a demux failure is
/// always fragment-scoped (logged, fragment skipped), a transport failure is
/// stream-scoped but deliberately non-terminal (the transport either retries
/// or signals completion afterward).
#[derive(Debug, Error)]
pub enum ConsumerError {
    #[error("fragment demux failed: {0}")]
    Demux(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("consumer task join failed: {0}")]
    TaskJoin(String),

    #[error(transparent)]
    Core(#[from] aulos_core::CoreError),

    #[error("audio packaging failed: {0}")]
    Audio(#[from] aulos_audio::AudioError),
}

pub type ConsumerResult<T> = Result<T, ConsumerError>;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::demux(ConsumerError::Demux("bad element".into()), "fragment demux failed: bad element")]
    #[case::transport(ConsumerError::Transport("read reset".into()), "transport error: read reset")]
    #[case::join(ConsumerError::TaskJoin("panicked".into()), "consumer task join failed: panicked")]
    #[test]
    fn error_display(#[case] error: ConsumerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConsumerError>();
    }
}
