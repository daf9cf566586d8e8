//! Turning backend outcomes back into integers.
//!
//! Backends render bitstrings with the highest classical bit leftmost, so the
//! character for classical bit `k` of an `m`-bit register sits at index
//! `m - 1 - k`. The counting register stores its most significant bit in
//! classical bit 0, which means the decode is "reverse, then read as binary".

use qsonar_hal::{Counts, ExecutionResult};

use crate::error::{EngineError, EngineResult};

/// Extract the one bitstring a single-shot execution produced.
///
/// # Errors
///
/// [`EngineError::MalformedOutcome`] if the recorded shots disagree with the
/// counts, or the result holds no outcome, more than one distinct outcome, or
/// a bitstring of the wrong width.
pub fn single_outcome<'a>(
    result: &'a ExecutionResult,
    circuit: &str,
    width: usize,
) -> EngineResult<&'a str> {
    let malformed = |reason: String| EngineError::MalformedOutcome {
        circuit: circuit.to_string(),
        reason,
    };

    let observed = result.counts.total_shots();
    if observed != u64::from(result.shots) {
        return Err(malformed(format!(
            "{} shots reported but counts sum to {observed}",
            result.shots
        )));
    }

    let bitstring = result.counts.single_outcome().ok_or_else(|| {
        malformed(format!(
            "expected exactly one outcome, got {}",
            result.counts.len()
        ))
    })?;
    if bitstring.len() != width {
        return Err(malformed(format!(
            "expected {width} bits, got '{bitstring}'"
        )));
    }
    Ok(bitstring)
}

/// Fold bits into an unsigned integer, first bit most significant.
pub fn bits_to_uint(bits: &[bool]) -> u64 {
    bits.iter().fold(0, |acc, &bit| (acc << 1) | u64::from(bit))
}

/// Decode a register bitstring: reverse it, then read it as binary.
///
/// # Errors
///
/// [`EngineError::MalformedOutcome`] for characters other than `0` and `1`.
pub fn decode_register(bitstring: &str) -> EngineResult<u64> {
    let bits =
        Counts::bits_in_register_order(bitstring).ok_or_else(|| EngineError::MalformedOutcome {
            circuit: "register".into(),
            reason: format!("'{bitstring}' is not a binary string"),
        })?;
    Ok(bits_to_uint(&bits))
}
