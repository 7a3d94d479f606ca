//! The two decimal-to-binary conversions under comparison.
//!
//! Both reduce the value by successive halving, emitting the least
//! significant bit at each step. They differ only in shape: one loops over a
//! fixed buffer, the other recurses once per bit and concatenates on the way
//! back up. A step is one bit extraction; the zero input is its own base case
//! and costs exactly one step.

use serde::{Deserialize, Serialize};

/// Longest binary representation of a `u64`.
const MAX_BITS: usize = u64::BITS as usize;

/// Binary digits of a value together with the work needed to produce them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryResult {
    /// Base-2 digits, most significant first, no leading zeros.
    pub binary: String,
    /// Bit extractions performed, including the terminal case.
    pub steps: u32,
}

impl BinaryResult {
    fn new(binary: String, steps: u32) -> Self {
        Self { binary, steps }
    }
}

/// Which conversion algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Loop writing bits into a fixed buffer from the right.
    Iterative,
    /// One call per bit, concatenating on return.
    Recursive,
}

impl Variant {
    /// Both variants, iterative first.
    pub const ALL: [Variant; 2] = [Variant::Iterative, Variant::Recursive];

    /// Convert `n` with this variant.
    #[inline]
    pub fn convert(self, n: u64) -> BinaryResult {
        match self {
            Variant::Iterative => to_binary_iterative(n),
            Variant::Recursive => to_binary_recursive(n),
        }
    }

    /// Lowercase name used in reports and logs.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Iterative => "iterative",
            Variant::Recursive => "recursive",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert `n` to binary with a halving loop.
pub fn to_binary_iterative(n: u64) -> BinaryResult {
    if n == 0 {
        return BinaryResult::new("0".to_string(), 1);
    }

    let mut buf = [b'0'; MAX_BITS];
    let mut pos = MAX_BITS;
    let mut steps = 0;
    let mut rest = n;
    while rest > 0 {
        pos -= 1;
        buf[pos] = b'0' + (rest & 1) as u8;
        rest >>= 1;
        steps += 1;
    }

    let binary = buf[pos..].iter().map(|&b| char::from(b)).collect();
    BinaryResult::new(binary, steps)
}

/// Convert `n` to binary by recursing on `n / 2`.
///
/// Depth equals the bit length of `n`, so at most 64 frames.
pub fn to_binary_recursive(n: u64) -> BinaryResult {
    let (binary, steps) = recurse(n);
    BinaryResult::new(binary, steps)
}

fn recurse(x: u64) -> (String, u32) {
    match x {
        0 => ("0".to_string(), 1),
        1 => ("1".to_string(), 1),
        _ => {
            let (mut prefix, steps) = recurse(x / 2);
            prefix.push(if x % 2 == 1 { '1' } else { '0' });
            (prefix, steps + 1)
        }
    }
}

/// Number of halvings needed to reduce `n` to zero. Zero has length zero.
#[inline]
pub fn bit_length(n: u64) -> u32 {
    u64::BITS - n.leading_zeros()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_its_own_base_case() {
        for variant in Variant::ALL {
            let result = variant.convert(0);
            assert_eq!(result.binary, "0", "{variant}");
            assert_eq!(result.steps, 1, "{variant}");
        }
    }

    #[test]
    fn test_ten() {
        assert_eq!(to_binary_iterative(10), BinaryResult::new("1010".into(), 4));
        assert_eq!(to_binary_recursive(10), BinaryResult::new("1010".into(), 4));
    }

    #[test]
    fn test_one_and_powers_of_two() {
        assert_eq!(to_binary_recursive(1).binary, "1");
        for shift in 0..64 {
            let n = 1u64 << shift;
            let it = to_binary_iterative(n);
            assert_eq!(it.binary.len(), shift + 1);
            assert!(it.binary.starts_with('1'));
            assert_eq!(it.binary.matches('1').count(), 1);
            assert_eq!(it, to_binary_recursive(n));
        }
    }

    #[test]
    fn test_u64_max() {
        let it = to_binary_iterative(u64::MAX);
        assert_eq!(it.binary, "1".repeat(64));
        assert_eq!(it.steps, 64);
        assert_eq!(it, to_binary_recursive(u64::MAX));
    }

    #[test]
    fn test_steps_match_bit_length() {
        for n in 1..5_000u64 {
            assert_eq!(to_binary_iterative(n).steps, bit_length(n), "n = {n}");
        }
        assert_eq!(bit_length(0), 0);
    }

    #[test]
    fn test_variant_names() {
        assert_eq!(Variant::Iterative.to_string(), "iterative");
        assert_eq!(
            serde_json::to_string(&Variant::Recursive).unwrap(),
            "\"recursive\""
        );
    }
}
