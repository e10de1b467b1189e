//! Property-based tests for ansiprint format primitives

use ansiprint_format::constants::{CARRIAGE_RETURN, LINE_FEED};
use ansiprint_format::transcode::{expanded_len, translate_into};
use ansiprint_format::{LineEndingTranscoder, PrintConfig, SeparatorPolicy};
use proptest::prelude::*;

proptest! {
    #[test]
    fn every_line_feed_followed_by_carriage_return(
        chunk in prop::collection::vec(prop::sample::select(vec![b'a', b'\n', b'\r', b' ']), 0..256)
    ) {
        let mut transcoder = LineEndingTranscoder::new(512);
        let out = transcoder.transcode(&chunk).to_vec();

        let mut iter = out.iter();
        while let Some(&byte) = iter.next() {
            if byte == LINE_FEED {
                prop_assert_eq!(iter.next().copied(), Some(CARRIAGE_RETURN));
            }
        }
    }

    #[test]
    fn removing_inserted_carriage_returns_restores_input(
        chunk in prop::collection::vec(any::<u8>(), 0..512)
    ) {
        let mut out = Vec::new();
        translate_into(&chunk, &mut out);
        prop_assert_eq!(out.len(), expanded_len(&chunk));

        let mut restored = Vec::with_capacity(chunk.len());
        let mut skip_next = false;
        for &byte in &out {
            if skip_next {
                skip_next = false;
                continue;
            }
            restored.push(byte);
            skip_next = byte == LINE_FEED;
        }
        prop_assert_eq!(restored, chunk);
    }

    #[test]
    fn half_capacity_chunks_never_overflow(
        capacity in 2usize..1024,
        fill in any::<u8>(),
    ) {
        let mut transcoder = LineEndingTranscoder::new(capacity);
        let worst = vec![LINE_FEED; transcoder.max_input()];
        prop_assert!(transcoder.transcode(&worst).len() <= capacity);
        let other = vec![fill; transcoder.max_input()];
        prop_assert!(transcoder.transcode(&other).len() <= capacity);
    }

    #[test]
    fn translating_read_size_fits_capacity(capacity in 2usize..100_000) {
        let config = PrintConfig::new(capacity).unwrap().with_translate_line_endings(true);
        prop_assert!(config.validate().is_ok());
        prop_assert!(config.read_size() > 0);
        prop_assert!(config.read_size() * 2 <= config.buffer_size());
    }

    #[test]
    fn only_last_file_lacks_separator(index in 0usize..64, total in 1usize..64) {
        prop_assume!(index < total);
        let policy = SeparatorPolicy::from_config(&PrintConfig::default());
        prop_assert_eq!(policy.after_file(index, total).is_none(), index + 1 == total);
    }
}
