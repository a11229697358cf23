//! Known-answer and reference-differential tests

use cryypt_sha256::{sha256, StreamingHasher};
use hex_literal::hex;
use sha2::Digest as _;

fn reference(data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&sha2::Sha256::digest(data));
    out
}

fn message(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}

#[test]
fn test_empty_input() {
    let expected = hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");
    assert_eq!(sha256(b""), expected);

    let mut hasher = StreamingHasher::new();
    assert_eq!(hasher.finalize().expect("fresh hasher finalizes"), expected);
}

#[test]
fn test_abc() {
    let expected = hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
    assert_eq!(sha256(b"abc"), expected);
}

#[test]
fn test_two_block_nist_message() {
    let expected = hex!("248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1");
    assert_eq!(
        sha256(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
        expected
    );
}

#[test]
fn test_million_a() {
    let expected = hex!("cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0");
    let mut hasher = StreamingHasher::new();
    let chunk = [b'a'; 1000];
    for _ in 0..1000 {
        hasher.update(&chunk).expect("absorbing hasher accepts input");
    }
    assert_eq!(hasher.finalize().expect("finalize"), expected);
}

#[test]
fn test_padding_boundaries_match_reference() {
    for len in [0, 1, 55, 56, 57, 63, 64, 65, 119, 120, 121, 127, 128, 129] {
        let data = message(len);
        assert_eq!(
            sha256(&data),
            reference(&data),
            "digest mismatch for {len}-byte message"
        );
    }
}

#[test]
fn test_every_length_up_to_three_blocks() {
    let data = message(200);
    for len in 0..=data.len() {
        assert_eq!(sha256(&data[..len]), reference(&data[..len]), "len {len}");
    }
}

#[test]
fn test_bit_counter_tracks_input() {
    let mut hasher = StreamingHasher::new();
    hasher.update(&message(121)).expect("accepts input");
    assert_eq!(hasher.bits_absorbed(), 121 * 8);
    assert_eq!(hasher.buffered_len(), 121 - 64);
}
