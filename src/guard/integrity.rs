//! Before/after integrity measurement.
//!
//! The additive checksum is a 32-bit wrapping sum of every byte in a region,
//! in order. It is trivially forgeable, so each [`Measurement`] also carries
//! a SHA-256 fingerprint of the same bytes; a change in either one counts
//! as tampering.
//!
//! Safe Rust cannot portably name the machine code of a function range, so
//! the region measured around validation is the engine's decision table,
//! serialized to canonical JSON (see [`IntegrityRegion`]). [`checksum_range`]
//! remains available for callers that can name a raw `[start, end)` range.

use crate::KeywardError;
use sha2::{Digest, Sha256};
use std::fmt;

/// Additive 32-bit checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IntegrityChecksum(pub u32);

impl fmt::Display for IntegrityChecksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// Sum of every byte modulo 2^32.
pub fn checksum(bytes: &[u8]) -> IntegrityChecksum {
    IntegrityChecksum(
        bytes
            .iter()
            .fold(0u32, |acc, b| acc.wrapping_add(u32::from(*b))),
    )
}

/// Sum of every byte in the half-open address range `[start, end)`.
///
/// Bytes are read volatile so the compiler cannot reuse an earlier reading.
/// An empty or inverted range sums to zero.
///
/// # Safety
/// Every address in `[start, end)` must be readable for the whole call.
pub unsafe fn checksum_range(start: *const u8, end: *const u8) -> IntegrityChecksum {
    let len = (end as usize).saturating_sub(start as usize);
    let mut sum = 0u32;
    for offset in 0..len {
        // SAFETY: the caller guarantees the range is readable.
        let byte = unsafe { std::ptr::read_volatile(start.add(offset)) };
        sum = sum.wrapping_add(u32::from(byte));
    }
    IntegrityChecksum(sum)
}

/// Something whose bytes can be measured before and after validation.
pub trait IntegrityRegion {
    /// Current bytes of the region, in a stable order.
    fn snapshot(&self) -> Result<Vec<u8>, KeywardError>;
}

/// One reading of a region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    /// Additive checksum of the region.
    pub checksum: IntegrityChecksum,

    /// SHA-256 of the region.
    pub fingerprint: [u8; 32],

    /// Number of bytes measured.
    pub len: usize,
}

impl Measurement {
    /// Measure a byte slice.
    pub fn of(bytes: &[u8]) -> Self {
        Self {
            checksum: checksum(bytes),
            fingerprint: Sha256::digest(bytes).into(),
            len: bytes.len(),
        }
    }

    /// Hex-encoded fingerprint, for logs.
    pub fn fingerprint_hex(&self) -> String {
        hex::encode(self.fingerprint)
    }

    /// Compare against a later measurement of the same region.
    ///
    /// # Errors
    /// `IntegrityViolation` if the checksum, fingerprint or length changed.
    pub fn verify(&self, after: &Measurement) -> Result<(), KeywardError> {
        if self != after {
            tracing::debug!(
                before = %self.checksum,
                after = %after.checksum,
                "integrity measurement changed"
            );
            return Err(KeywardError::IntegrityViolation {
                before: self.checksum,
                after: after.checksum,
            });
        }
        Ok(())
    }
}

/// Snapshot and measure a region.
pub fn measure<R: IntegrityRegion + ?Sized>(region: &R) -> Result<Measurement, KeywardError> {
    let bytes = region.snapshot()?;
    let measurement = Measurement::of(&bytes);
    tracing::debug!(
        checksum = %measurement.checksum,
        fingerprint = %measurement.fingerprint_hex(),
        len = measurement.len,
        "region measured"
    );
    Ok(measurement)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<u8>);

    impl IntegrityRegion for Fixed {
        fn snapshot(&self) -> Result<Vec<u8>, KeywardError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_checksum_empty() {
        assert_eq!(checksum(&[]), IntegrityChecksum(0));
    }

    #[test]
    fn test_checksum_sums_bytes() {
        assert_eq!(checksum(&[1, 2, 3, 250]), IntegrityChecksum(256));
        assert_eq!(checksum(b"Valid key"), IntegrityChecksum(857));
    }

    #[test]
    fn test_checksum_wraps_at_2_pow_32() {
        // 16_843_010 * 255 = 2^32 + 254
        let bytes = vec![0xFFu8; 16_843_010];
        assert_eq!(checksum(&bytes), IntegrityChecksum(254));
    }

    #[test]
    fn test_checksum_is_order_independent_but_fingerprint_is_not() {
        let a = Measurement::of(&[1, 2, 3]);
        let b = Measurement::of(&[3, 2, 1]);
        assert_eq!(a.checksum, b.checksum);
        assert_ne!(a.fingerprint, b.fingerprint);
        assert!(matches!(
            a.verify(&b),
            Err(KeywardError::IntegrityViolation { .. })
        ));
    }

    #[test]
    fn test_checksum_range_matches_slice() {
        let bytes = b"the quick brown fox".to_vec();
        let range = bytes.as_ptr_range();
        let sum = unsafe { checksum_range(range.start, range.end) };
        assert_eq!(sum, checksum(&bytes));
    }

    #[test]
    fn test_checksum_range_empty_and_inverted() {
        let bytes = [7u8; 4];
        let range = bytes.as_ptr_range();
        assert_eq!(
            unsafe { checksum_range(range.start, range.start) },
            IntegrityChecksum(0)
        );
        assert_eq!(
            unsafe { checksum_range(range.end, range.start) },
            IntegrityChecksum(0)
        );
    }

    #[test]
    fn test_verify_same_region_passes() {
        let region = Fixed(b"decision table".to_vec());
        let before = measure(&region).unwrap();
        let after = measure(&region).unwrap();
        assert!(before.verify(&after).is_ok());
    }

    #[test]
    fn test_verify_detects_change() {
        let before = measure(&Fixed(vec![1, 2, 3])).unwrap();
        let after = measure(&Fixed(vec![1, 2, 4])).unwrap();
        let err = before.verify(&after).unwrap_err();
        assert!(matches!(
            err,
            KeywardError::IntegrityViolation { before, after }
                if before == IntegrityChecksum(6) && after == IntegrityChecksum(7)
        ));
    }

    #[test]
    fn test_display_is_hex() {
        assert_eq!(IntegrityChecksum(0xBEEF).to_string(), "0x0000beef");
    }

    #[test]
    fn test_fingerprint_hex() {
        let m = Measurement::of(b"");
        assert_eq!(
            m.fingerprint_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
