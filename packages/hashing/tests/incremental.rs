//! Split-point independence and lifecycle behaviour of the streaming hasher

use cryypt_sha256::{sha256, ErrorKind, Lifecycle, StreamingHasher};
use proptest::prelude::*;

fn hash_in_pieces(data: &[u8], cuts: &[usize]) -> cryypt_sha256::Digest {
    let mut hasher = StreamingHasher::new();
    let mut start = 0;
    for &cut in cuts {
        hasher.update(&data[start..cut]).expect("accepts input");
        start = cut;
    }
    hasher.update(&data[start..]).expect("accepts input");
    hasher.finalize().expect("finalize")
}

proptest! {
    #[test]
    fn split_points_do_not_change_digest(
        data in proptest::collection::vec(any::<u8>(), 0..600),
        raw_cuts in proptest::collection::vec(any::<usize>(), 0..12),
    ) {
        let mut cuts: Vec<usize> = raw_cuts
            .into_iter()
            .map(|c| c % (data.len() + 1))
            .collect();
        cuts.sort_unstable();
        prop_assert_eq!(hash_in_pieces(&data, &cuts), sha256(&data));
    }
}

#[test]
fn test_byte_at_a_time() {
    let data: Vec<u8> = (0..=200u8).collect();
    let mut hasher = StreamingHasher::new();
    for byte in &data {
        hasher.update(std::slice::from_ref(byte)).expect("accepts input");
    }
    assert_eq!(hasher.finalize().expect("finalize"), sha256(&data));
}

#[test]
fn test_double_finalize_fails() {
    let mut hasher = StreamingHasher::new();
    hasher.update(b"payload").expect("accepts input");
    hasher.finalize().expect("first finalize");

    let err = hasher.finalize().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert_eq!(hasher.lifecycle(), Lifecycle::Finalized);
}

#[test]
fn test_reset_behaves_like_new() {
    let mut reused = StreamingHasher::new();
    reused.update(b"something else entirely").expect("accepts input");
    reused.finalize().expect("finalize");
    reused.reset();

    let mut fresh = StreamingHasher::new();
    for hasher in [&mut reused, &mut fresh] {
        hasher.update(b"automation request").expect("accepts input");
    }
    assert_eq!(
        reused.finalize().expect("finalize"),
        fresh.finalize().expect("finalize")
    );
}

#[test]
fn test_reset_mid_stream_discards_input() {
    let mut hasher = StreamingHasher::new();
    hasher.update(&[1u8; 100]).expect("accepts input");
    hasher.reset();
    assert_eq!(hasher.lifecycle(), Lifecycle::Ready);
    assert_eq!(hasher.finalize().expect("finalize"), sha256(b""));
}

#[test]
fn test_independent_hashers_across_threads() {
    let inputs: Vec<Vec<u8>> = (0..8u8).map(|i| vec![i; 1000 + i as usize]).collect();
    let expected: Vec<_> = inputs.iter().map(|d| sha256(d)).collect();

    let handles: Vec<_> = inputs
        .into_iter()
        .map(|data| {
            std::thread::spawn(move || {
                let mut hasher = StreamingHasher::new();
                for chunk in data.chunks(77) {
                    hasher.update(chunk).expect("accepts input");
                }
                hasher.finalize().expect("finalize")
            })
        })
        .collect();

    for (handle, want) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().expect("thread completes"), want);
    }
}

#[test]
fn test_every_three_way_split_matches_reference() {
    use sha2::Digest as _;

    let data: Vec<u8> = (0..130u32).map(|i| (i * 7 + 3) as u8).collect();
    let mut expected = [0u8; 32];
    expected.copy_from_slice(&sha2::Sha256::digest(&data));

    for first in 0..=data.len() {
        for second in first..=data.len() {
            assert_eq!(
                hash_in_pieces(&data, &[first, second]),
                expected,
                "split at {first}/{second}"
            );
        }
    }
}

#[test]
fn test_reuse_after_finalize_from_ready() {
    let mut hasher = StreamingHasher::new();
    assert_eq!(hasher.finalize().expect("finalize from ready"), sha256(b""));
    hasher.reset();
    hasher.update(b"abc").expect("accepts input after reset");
    assert_eq!(hasher.finalize().expect("finalize"), sha256(b"abc"));
}
