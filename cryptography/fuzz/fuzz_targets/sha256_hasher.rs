#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use radix_cryptography::{double_hash, hash, Hasher, Sha256 as OurSha256};
use sha2::{Digest as RefSha2Digest, Sha256 as RefSha256};

#[derive(Debug, Arbitrary)]
pub struct FuzzInput {
    pub chunks: Vec<Vec<u8>>,
    pub data: Vec<u8>,
    pub case_selector: u8,
}

// Basic hashing comparison with chunks
fn fuzz_basic_hashing(chunks: &[Vec<u8>]) {
    let mut our_hasher = OurSha256::new();
    let mut ref_hasher = RefSha256::new();

    for chunk in chunks {
        our_hasher.update(chunk);
        ref_hasher.update(chunk);
    }

    let our_result = our_hasher.finalize();
    let ref_result = ref_hasher.finalize();
    assert_eq!(our_result.as_ref(), ref_result.as_slice());
}

// Reset discards pending input
fn fuzz_reset_functionality(chunks: &[Vec<u8>]) {
    let mut our_hasher = OurSha256::new();
    for chunk in chunks {
        our_hasher.update(chunk);
    }
    our_hasher.reset();

    let our_result = our_hasher.finalize();
    let ref_result = RefSha256::digest([]);
    assert_eq!(our_result.as_ref(), ref_result.as_slice());
}

// Chunked vs all-at-once hashing
fn fuzz_chunked_vs_whole(chunks: &[Vec<u8>]) {
    let mut our_hasher = OurSha256::new();
    let mut all_data = Vec::new();

    for chunk in chunks {
        all_data.extend_from_slice(chunk);
        our_hasher.update(chunk);
    }

    let our_final = our_hasher.finalize();
    assert_eq!(our_final, hash(&all_data));
    let ref_final = RefSha256::digest(&all_data);
    assert_eq!(our_final.as_ref(), ref_final.as_slice());
}

// Differential fuzzing of the checksum hash
fn fuzz_double_hash(data: &[u8]) {
    let ours = double_hash::<OurSha256>(data);
    let reference = RefSha256::digest(RefSha256::digest(data));
    assert_eq!(ours.as_ref(), reference.as_slice());
}

// Formatting
fn fuzz_format(data: &[u8]) {
    let digest = hash(data);
    let debug_str = format!("{digest:?}");
    let display_str = format!("{digest}");
    assert_eq!(debug_str, display_str);
    assert_eq!(debug_str.len(), 64); // 32 bytes * 2 hex chars each
}

fn fuzz(input: FuzzInput) {
    match input.case_selector % 5 {
        0 => fuzz_basic_hashing(&input.chunks),
        1 => fuzz_reset_functionality(&input.chunks),
        2 => fuzz_chunked_vs_whole(&input.chunks),
        3 => fuzz_double_hash(&input.data),
        4 => fuzz_format(&input.data),
        _ => unreachable!(),
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
