#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use radix_codec::{alphabets, Alphabet, Codec, Strategy};
use std::sync::Arc;

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    alphabet: u8,
    payload: Vec<u8>,
}

fn fuzz(input: FuzzInput) {
    let index = input.alphabet as usize % alphabets::PREDEFINED.len();
    let (_, symbols) = alphabets::PREDEFINED[index];
    let alphabet = Arc::new(Alphabet::new(symbols).unwrap());
    let bigint = Codec::new(alphabet.clone(), Strategy::BigInt);
    let direct = Codec::new(alphabet, Strategy::Direct);

    let encoded = bigint.encode(&input.payload);
    assert_eq!(encoded, direct.encode(&input.payload));
    assert_eq!(bigint.decode(&encoded).unwrap(), input.payload);
    assert_eq!(direct.decode(&encoded).unwrap(), input.payload);

    let checked = direct.encode_with_check(&input.payload);
    assert_eq!(bigint.decode_with_check(&checked).unwrap(), input.payload);
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
