//! Token metadata URIs: `ipfs://{cid}/{token_id}.json`.
//!
//! Composed in a fixed stack buffer; the CID length is capped at init so
//! the buffer always fits.

use soroban_sdk::{Env, String};

pub const MAX_CID_LEN: u32 = 96;

const PREFIX: &[u8] = b"ipfs://";
const SUFFIX: &[u8] = b".json";
/// Decimal digits of `u32::MAX`.
const MAX_ID_DIGITS: usize = 10;
const URI_CAPACITY: usize =
    PREFIX.len() + MAX_CID_LEN as usize + 1 + MAX_ID_DIGITS + SUFFIX.len();

pub fn is_valid_cid(cid: &String) -> bool {
    cid.len() > 0 && cid.len() <= MAX_CID_LEN
}

pub fn token_uri(env: &Env, cid: &String, token_id: u32) -> String {
    let mut buf = [0u8; URI_CAPACITY];
    let mut len = PREFIX.len();
    buf[..len].copy_from_slice(PREFIX);

    let cid_len = cid.len() as usize;
    cid.copy_into_slice(&mut buf[len..len + cid_len]);
    len += cid_len;

    buf[len] = b'/';
    len += 1;
    len += write_decimal(&mut buf[len..], token_id);

    buf[len..len + SUFFIX.len()].copy_from_slice(SUFFIX);
    len += SUFFIX.len();

    String::from_bytes(env, &buf[..len])
}

/// Writes `value` in base 10 at the start of `out`, returns the digit count.
fn write_decimal(out: &mut [u8], mut value: u32) -> usize {
    let mut digits = [0u8; MAX_ID_DIGITS];
    let mut n = 0;
    loop {
        digits[n] = b'0' + (value % 10) as u8;
        n += 1;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    for (dst, src) in out.iter_mut().zip(digits[..n].iter().rev()) {
        *dst = *src;
    }
    n
}
