//! LEB128 kernels for 32-bit integers.
//!
//! Decoders accept any slice and read a single value from its front. They
//! never look past the byte that ends the value.

use crate::encoding::error::CodecError;
use crate::utils::limits::{
    CONTINUATION_BIT, GROUP_BITS, MAX_VARINT32_LEN, PAYLOAD_MASK, SIGN_BIT,
};

/// Encode u32 into varint (unsigned LEB128)
pub fn encode_u32(mut value: u32, out: &mut Vec<u8>) {
    while value >= u32::from(CONTINUATION_BIT) {
        out.push((value as u8) | CONTINUATION_BIT);
        value >>= GROUP_BITS;
    }
    out.push(value as u8);
}

/// Encode i32 into varint (signed LEB128)
pub fn encode_i32(mut value: i32, out: &mut Vec<u8>) {
    loop {
        let byte = (value as u8) & PAYLOAD_MASK;
        value >>= GROUP_BITS;

        // Stop once the remaining bits only repeat bit 6 of this group.
        let sign_set = byte & SIGN_BIT != 0;
        if (value == 0 && !sign_set) || (value == -1 && sign_set) {
            out.push(byte);
            return;
        }
        out.push(byte | CONTINUATION_BIT);
    }
}

/// Number of bytes `encode_u32` emits for `value`
pub fn encoded_len_u32(value: u32) -> usize {
    let significant = u32::BITS - value.leading_zeros();
    significant.div_ceil(GROUP_BITS).max(1) as usize
}

/// Number of bytes `encode_i32` emits for `value`
pub fn encoded_len_i32(value: i32) -> usize {
    // One extra bit for the sign that the last group must carry.
    let redundant = if value < 0 {
        value.leading_ones()
    } else {
        value.leading_zeros()
    };
    let significant = u32::BITS - redundant + 1;
    significant.div_ceil(GROUP_BITS) as usize
}

/// Decode an unsigned varint from the front of `buf`.
///
/// Returns the value and the number of bytes it occupied.
pub fn decode_u32(buf: &[u8]) -> Result<(u32, usize), CodecError> {
    let mut result = 0u32;
    let mut shift = 0u32;

    for (i, &byte) in buf.iter().take(MAX_VARINT32_LEN).enumerate() {
        let payload = u32::from(byte & PAYLOAD_MASK);

        if i == MAX_VARINT32_LEN - 1 {
            // Last permitted group: must terminate, and must not lose bits
            // when shifted into place.
            if byte & CONTINUATION_BIT != 0 || (payload << shift) >> shift != payload {
                return Err(CodecError::OutOfRange);
            }
        }

        result |= payload << shift;

        if byte & CONTINUATION_BIT == 0 {
            return Ok((result, i + 1));
        }

        shift += GROUP_BITS;
    }

    Err(CodecError::IncompleteNumber)
}

/// Decode a signed varint from the front of `buf`.
///
/// Returns the value and the number of bytes it occupied.
pub fn decode_i32(buf: &[u8]) -> Result<(i32, usize), CodecError> {
    let mut result = 0u32;
    let mut shift = 0u32;

    for (i, &byte) in buf.iter().take(MAX_VARINT32_LEN).enumerate() {
        let payload = byte & PAYLOAD_MASK;

        if i == MAX_VARINT32_LEN - 1 {
            // Payload bits landing on bit 31 and above must all agree with
            // the sign bit.
            let sign_window = u32::BITS - 1 - shift;
            let high = payload >> sign_window;
            if byte & CONTINUATION_BIT != 0 || (high != 0 && high != PAYLOAD_MASK >> sign_window) {
                return Err(CodecError::OutOfRange);
            }
        }

        result |= u32::from(payload) << shift;
        shift += GROUP_BITS;

        if byte & CONTINUATION_BIT == 0 {
            if shift < u32::BITS && payload & SIGN_BIT != 0 {
                result |= u32::MAX << shift;
            }
            return Ok((result as i32, i + 1));
        }
    }

    Err(CodecError::IncompleteNumber)
}
