use stargen_core::hash_to_int;

use crate::body::BodyType;

const SUFFIX_LEN: usize = 4;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Deterministic identifier `{hex}[-{parent}]-{type}-{index}-{suffix}`.
///
/// The suffix is four base-36 characters of the base string's hash, so
/// identical inputs always give the identical id.
pub fn generate_id(hex: &str, body_type: BodyType, index: usize, parent_id: Option<&str>) -> String {
    let base = match parent_id {
        Some(parent) => format!("{hex}-{parent}-{body_type}-{index}"),
        None => format!("{hex}-{body_type}-{index}"),
    };
    let suffix = hash_suffix(hash_to_int(&base));
    format!("{base}-{suffix}")
}

fn hash_suffix(hash: i32) -> String {
    let mut value = hash.unsigned_abs();
    let mut digits = [b'0'; SUFFIX_LEN];
    for slot in digits.iter_mut().rev() {
        *slot = BASE36[(value % 36) as usize];
        value /= 36;
    }
    digits.iter().map(|&b| char::from(b)).collect()
}
