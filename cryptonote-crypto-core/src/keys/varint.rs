//! Varint encoding of output indices.

use alloc::vec::Vec;

/// Encode a u64 as a Cryptonote varint
///
/// - Each byte holds 7 bits of data, least significant group first
/// - The high bit (0x80) indicates continuation
/// - For indices < 128, the result is a single byte
///
/// # Example
///
/// ```rust
/// use cryptonote_crypto_core::keys::encode_varint;
///
/// assert_eq!(encode_varint(0), vec![0]);
/// assert_eq!(encode_varint(127), vec![127]);
/// assert_eq!(encode_varint(128), vec![0x80, 0x01]);
/// ```
pub fn encode_varint(mut n: u64) -> Vec<u8> {
    let mut result = Vec::with_capacity(10);
    loop {
        let byte = (n & 0x7f) as u8;
        n >>= 7;
        if n == 0 {
            result.push(byte);
            break;
        }
        result.push(byte | 0x80);
    }
    result
}
