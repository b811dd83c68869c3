//! Fixed-width binary codec for timestamps
//!
//! Wire layout, 16 bytes:
//!
//! | Offset | Width | Field      | Byte order |
//! |--------|-------|------------|------------|
//! | 0      | 8     | `physical` | big-endian |
//! | 8      | 8     | `logical`  | big-endian |
//!
//! Big-endian fields make unsigned lexicographic comparison of encoded bytes
//! agree with [`compare`](crate::timestamp::compare), so encoded timestamps can
//! be used directly as sortable storage keys.

use crate::error::{ClockError, ClockResult};
use crate::timestamp::Timestamp;

/// Encoded width of a timestamp in bytes
pub const TIMESTAMP_LEN: usize = 16;

const PHYSICAL_LEN: usize = 8;

/// Encodes a timestamp into its 16-byte wire form
///
/// # Example
/// ```rust
/// use hlclock::codec::{decode, encode};
/// use hlclock::timestamp::Timestamp;
///
/// let bytes = encode(&Timestamp::new(1000, 2));
/// assert_eq!(decode(&bytes)?, Timestamp::new(1000, 2));
/// # Ok::<(), hlclock::error::ClockError>(())
/// ```
pub fn encode(ts: &Timestamp) -> [u8; TIMESTAMP_LEN] {
    let mut out = [0u8; TIMESTAMP_LEN];
    out[..PHYSICAL_LEN].copy_from_slice(&ts.physical.to_be_bytes());
    out[PHYSICAL_LEN..].copy_from_slice(&ts.logical.to_be_bytes());
    out
}

/// Writes the wire form into the first 16 bytes of `buf`
///
/// Bytes past the first 16 are left untouched, so a timestamp can prefix a
/// composite key.
pub fn encode_into(ts: &Timestamp, buf: &mut [u8]) -> ClockResult<()> {
    let actual = buf.len();
    let target = buf
        .get_mut(..TIMESTAMP_LEN)
        .ok_or(ClockError::BufferTooSmall {
            required: TIMESTAMP_LEN,
            actual,
        })?;
    target.copy_from_slice(&encode(ts));
    Ok(())
}

/// Decodes a timestamp from exactly 16 bytes
///
/// Any other length is rejected with [`ClockError::InvalidLength`]; input is
/// never truncated or padded.
pub fn decode(bytes: &[u8]) -> ClockResult<Timestamp> {
    let bytes: &[u8; TIMESTAMP_LEN] = bytes.try_into().map_err(|_| ClockError::InvalidLength {
        expected: TIMESTAMP_LEN,
        actual: bytes.len(),
    })?;
    Ok(Timestamp::from_bytes(bytes))
}

impl Timestamp {
    /// Returns the 16-byte wire form
    pub fn to_bytes(&self) -> [u8; TIMESTAMP_LEN] {
        encode(self)
    }

    /// Rebuilds a timestamp from its 16-byte wire form
    pub fn from_bytes(bytes: &[u8; TIMESTAMP_LEN]) -> Self {
        let (physical, logical) = bytes.split_at(PHYSICAL_LEN);
        let mut physical_be = [0u8; PHYSICAL_LEN];
        let mut logical_be = [0u8; PHYSICAL_LEN];
        physical_be.copy_from_slice(physical);
        logical_be.copy_from_slice(logical);
        Self::new(u64::from_be_bytes(physical_be), u64::from_be_bytes(logical_be))
    }
}

impl TryFrom<&[u8]> for Timestamp {
    type Error = ClockError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        decode(bytes)
    }
}

impl From<Timestamp> for [u8; TIMESTAMP_LEN] {
    fn from(ts: Timestamp) -> Self {
        encode(&ts)
    }
}
