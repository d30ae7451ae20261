use super::{DecodeError, decode, encode};

#[test]
fn encodes_reference_vectors_without_padding() {
	assert_eq!(encode(b""), "");
	assert_eq!(encode(b"f"), "Zg");
	assert_eq!(encode(b"fo"), "Zm8");
	assert_eq!(encode(b"foo"), "Zm9v");
	assert_eq!(encode(b"foob"), "Zm9vYg");
	assert_eq!(encode(b"fooba"), "Zm9vYmE");
	assert_eq!(encode(b"foobar"), "Zm9vYmFy");
}

#[test]
fn encodes_high_bit_bytes_with_plus_and_slash() {
	assert_eq!(encode(&[0xfb, 0xff]), "+/8");
	assert_eq!(encode(&[0xff, 0xff, 0xff]), "////");
}

#[test]
fn decode_inverts_encode_for_every_tail_length() {
	let data: Vec<u8> = (0_u8..=255).collect();
	for len in 0..data.len() {
		let encoded = encode(&data[..len]);
		assert_ne!(encoded.len() % 4, 1, "encoding never leaves a single trailing symbol");
		let decoded = decode(&encoded).expect("encoded text decodes");
		assert_eq!(decoded, &data[..len], "len={len}");
	}
}

#[test]
fn rejects_single_trailing_symbol() {
	assert_eq!(decode("Z"), Err(DecodeError::TrailingSymbol { len: 1 }));
	assert_eq!(decode("Zm9vY"), Err(DecodeError::TrailingSymbol { len: 5 }));
}

#[test]
fn empty_text_decodes_to_empty_bytes() {
	assert_eq!(decode(""), Ok(Vec::new()));
}

#[test]
fn symbols_outside_alphabet_decode_through_sentinel() {
	assert_eq!(decode("!!!!"), Ok(vec![0xff, 0xff, 0xff]));
	assert_eq!(decode("Zm=v").map(|bytes| bytes.len()), Ok(3));
}
