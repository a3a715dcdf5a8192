use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("pcm byte length {0} is not a whole number of samples")]
    UnalignedSamples(usize),
    #[error("unsupported sample width: {0} bits")]
    UnsupportedSampleWidth(u16),
    #[error("wav encoding failed: {0}")]
    Encode(#[from] hound::Error),
}

pub type AudioResult<T> = Result<T, AudioError>;
