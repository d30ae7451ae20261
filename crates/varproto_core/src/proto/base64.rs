use thiserror::Error;

const ENCODE_TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Table value for symbols outside the alphabet.
const INVALID: u8 = 0xff;

const DECODE_TABLE: [u8; 256] = build_decode_table();

/// Output symbols produced by a trailing group of 0, 1, or 2 bytes.
const ENCODE_REMAINDER: [usize; 3] = [0, 2, 3];

/// Output bytes produced by a trailing group of 0, 1, 2, or 3 symbols.
const DECODE_REMAINDER: [usize; 4] = [0, 0, 1, 2];

/// Codec text rejected by [`decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
	/// Text length leaves one symbol after the last full group.
	#[error("base64 text length {len} leaves a single trailing symbol")]
	TrailingSymbol {
		/// Input length in bytes.
		len: usize,
	},
}

const fn build_decode_table() -> [u8; 256] {
	let mut table = [INVALID; 256];
	let mut idx = 0;
	while idx < ENCODE_TABLE.len() {
		table[ENCODE_TABLE[idx] as usize] = idx as u8;
		idx += 1;
	}
	table
}

/// Encode bytes with the standard alphabet, without padding.
///
/// A trailing group of one byte yields two symbols and a trailing group of two
/// bytes yields three.
pub fn encode(input: &[u8]) -> String {
	let remainder = input.len() % 3;
	let mut out = String::with_capacity(4 * (input.len() / 3) + ENCODE_REMAINDER[remainder]);

	let mut chunks = input.chunks_exact(3);
	for chunk in &mut chunks {
		encode_group(chunk, &mut out);
	}
	let tail = chunks.remainder();
	if !tail.is_empty() {
		encode_group(tail, &mut out);
	}
	out
}

/// Decode unpadded standard-alphabet text.
///
/// Only the length is validated. Symbols outside the alphabet map to an
/// all-ones sentinel and are folded into the output bits like any other symbol.
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
	let bytes = input.as_bytes();
	let remainder = bytes.len() % 4;
	if remainder == 1 {
		return Err(DecodeError::TrailingSymbol { len: bytes.len() });
	}

	let mut out = Vec::with_capacity(3 * (bytes.len() / 4) + DECODE_REMAINDER[remainder]);

	let mut chunks = bytes.chunks_exact(4);
	for chunk in &mut chunks {
		decode_group(chunk, &mut out);
	}
	let tail = chunks.remainder();
	if !tail.is_empty() {
		decode_group(tail, &mut out);
	}
	Ok(out)
}

fn encode_group(group: &[u8], out: &mut String) {
	let symbol = |idx: u8| char::from(ENCODE_TABLE[usize::from(idx & 0x3f)]);

	out.push(symbol(group[0] >> 2));
	match *group {
		[a, b, c] => {
			out.push(symbol((a << 4) | (b >> 4)));
			out.push(symbol((b << 2) | (c >> 6)));
			out.push(symbol(c));
		}
		[a, b] => {
			out.push(symbol((a << 4) | (b >> 4)));
			out.push(symbol(b << 2));
		}
		[a] => out.push(symbol(a << 4)),
		_ => {}
	}
}

fn decode_group(group: &[u8], out: &mut Vec<u8>) {
	let value = |idx: usize| DECODE_TABLE[usize::from(group[idx])];

	out.push((value(0) << 2) | (value(1) >> 4));
	if group.len() > 2 {
		out.push(((value(1) << 4) & 0xf0) | (value(2) >> 2));
		if group.len() > 3 {
			out.push(((value(2) << 6) & 0xc0) | value(3));
		}
	}
}

#[cfg(test)]
mod tests;
