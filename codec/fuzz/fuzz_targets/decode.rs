#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use radix_codec::{Alphabet, Codec, Strategy};
use std::sync::Arc;

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    symbols: String,
    text: String,
}

fn fuzz(input: FuzzInput) {
    // Arbitrary alphabets are usually invalid; only valid ones are interesting.
    let Ok(alphabet) = Alphabet::new(&input.symbols) else {
        return;
    };
    let alphabet = Arc::new(alphabet);
    let bigint = Codec::new(alphabet.clone(), Strategy::BigInt);
    let direct = Codec::new(alphabet, Strategy::Direct);

    // Both strategies must agree on every input, including invalid ones.
    let decoded = bigint.decode(&input.text);
    assert_eq!(decoded, direct.decode(&input.text));

    // Valid text round trips exactly.
    if let Ok(bytes) = decoded {
        assert_eq!(bigint.encode(&bytes), input.text);
        assert_eq!(direct.encode(&bytes), input.text);
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
