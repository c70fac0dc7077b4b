// bytes.rs

/// Read one byte, `None` past the end of the payload.
#[inline]
pub fn read_u8(data: &[u8], idx: usize) -> Option<u8> {
    data.get(idx).copied()
}

/// Read a big-endian u16 from `data[idx]` (high) and `data[idx + 1]` (low).
/// Both bytes must be present.
#[inline]
pub fn read_u16_be(data: &[u8], idx: usize) -> Option<u16> {
    let hi = read_u8(data, idx)?;
    let lo = read_u8(data, idx.checked_add(1)?)?;
    Some(u16::from_be_bytes([hi, lo]))
}

// EOF
