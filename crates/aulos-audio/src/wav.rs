#![forbid(unsafe_code)]

use std::io::Cursor;

use bytes::Bytes;
use hound::{SampleFormat, WavSpec, WavWriter};

use crate::{AudioError, AudioResult};

/// Declared shape of a raw PCM buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcmSpec {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
}

impl PcmSpec {
    /// Mono 8 kHz 16-bit, the fixed format of contact-center stream audio.
    pub const TELEPHONY: PcmSpec = PcmSpec {
        channels: 1,
        sample_rate: 8_000,
        bits_per_sample: 16,
    };
}

impl Default for PcmSpec {
    fn default() -> Self {
        Self::TELEPHONY
    }
}

/// Wrap raw little-endian PCM bytes in a WAV container.
///
/// Empty input produces a minimal valid file with zero sample frames. Only
/// 16-bit samples are supported; the byte length must be sample-aligned.
pub fn package_wav(spec: PcmSpec, pcm: &[u8]) -> AudioResult<Bytes> {
    if spec.bits_per_sample != 16 {
        return Err(AudioError::UnsupportedSampleWidth(spec.bits_per_sample));
    }
    if pcm.len() % 2 != 0 {
        return Err(AudioError::UnalignedSamples(pcm.len()));
    }

    let wav_spec = WavSpec {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        sample_format: SampleFormat::Int,
    };

    let mut buf = Vec::with_capacity(pcm.len() + 44);
    let mut writer = WavWriter::new(Cursor::new(&mut buf), wav_spec)?;
    {
        let mut samples = writer.get_i16_writer((pcm.len() / 2) as u32);
        for chunk in pcm.chunks_exact(2) {
            samples.write_sample(i16::from_le_bytes([chunk[0], chunk[1]]));
        }
        samples.flush()?;
    }
    writer.finalize()?;

    Ok(Bytes::from(buf))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn read_back(bytes: &[u8]) -> (WavSpec, Vec<i16>) {
        let mut reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
        let spec = reader.spec();
        let samples = reader.samples::<i16>().map(Result::unwrap).collect();
        (spec, samples)
    }

    #[test]
    fn packages_telephony_pcm() {
        let pcm: Vec<u8> = [100i16, -200, 300, -400]
            .iter()
            .flat_map(|s| s.to_le_bytes())
            .collect();
        let wav = package_wav(PcmSpec::TELEPHONY, &pcm).unwrap();

        let (spec, samples) = read_back(&wav);
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 8_000);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(samples, vec![100, -200, 300, -400]);
    }

    #[test]
    fn empty_input_yields_zero_frame_container() {
        let wav = package_wav(PcmSpec::TELEPHONY, &[]).unwrap();
        let (spec, samples) = read_back(&wav);
        assert_eq!(spec.sample_rate, 8_000);
        assert!(samples.is_empty());
    }

    #[test]
    fn odd_byte_count_is_rejected() {
        let result = package_wav(PcmSpec::TELEPHONY, &[0u8, 1, 2]);
        assert!(matches!(result, Err(AudioError::UnalignedSamples(3))));
    }

    #[rstest]
    #[case::eight_bit(8)]
    #[case::twenty_four_bit(24)]
    #[test]
    fn non_sixteen_bit_widths_are_rejected(#[case] bits: u16) {
        let spec = PcmSpec {
            bits_per_sample: bits,
            ..PcmSpec::TELEPHONY
        };
        assert!(matches!(
            package_wav(spec, &[]),
            Err(AudioError::UnsupportedSampleWidth(_))
        ));
    }
}
