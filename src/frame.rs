// frame.rs
//
// Frame layout (big-endian):
//   [0..2]   noise_avg
//   [2..4]   noise_min
//   [4..6]   noise_max
//   [6..8]   battery (mV)
//   [8..10]  pt100 (raw counts)
//   [10]     mode (bits 7..2) | gain (bits 1..0)
//   [11]     node_temp, not sent by firmware 0.36, 0.37, 0.38
//
// Covers prototype models 20P, 100P, 250P.
// Firmware 0.40, 0.43, 0.44 send all fields.

use crate::*;

pub const FRAME_LEN: usize = 12;
/// Frame length of firmware 0.36 - 0.38 (no node_temp byte).
pub const LEGACY_FRAME_LEN: usize = 11;

pub const NOISE_AVG_OFFSET: usize = 0;
pub const NOISE_MIN_OFFSET: usize = 2;
pub const NOISE_MAX_OFFSET: usize = 4;
pub const BATTERY_OFFSET: usize = 6;
pub const PT100_OFFSET: usize = 8;
pub const MODE_GAIN_OFFSET: usize = 10;
pub const NODE_TEMP_OFFSET: usize = 11;

pub const MODE_MASK: u8 = 0b1111_1100;
pub const GAIN_MASK: u8 = 0b0000_0011;

pub const NODE_TEMP_WARNING: &str =
    "node_temp not present: firmware versions 0.36, 0.37, 0.38 do not send data byte[11]";

/// Split byte 10 into (mode, gain). Every bit lands in exactly one of them.
#[inline]
pub fn split_mode_gain(b: u8) -> (u8, u8) {
    ((b & MODE_MASK) >> 2, b & GAIN_MASK)
}

/// Undecoded field values of one frame. `None` means the frame was too
/// short to carry the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawFields {
    pub noise_avg: Option<u16>,
    pub noise_min: Option<u16>,
    pub noise_max: Option<u16>,
    pub battery_mv: Option<u16>,
    pub pt100: Option<u16>,
    pub mode: Option<u8>,
    pub gain: Option<u8>,
    pub node_temp: Option<u8>,
}

/// Borrowed view over one uplink payload.
#[derive(Clone, Copy, Debug)]
pub struct RawFrame<'a> {
    data: &'a [u8],
}

impl<'a> RawFrame<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        if data.len() > FRAME_LEN {
            debug!("MSB: ignoring {} trailing bytes", data.len() - FRAME_LEN);
        }
        Self { data }
    }

    pub fn extract(&self) -> RawFields {
        let d = self.data;
        let mode_gain = read_u8(d, MODE_GAIN_OFFSET).map(split_mode_gain);

        RawFields {
            noise_avg: read_u16_be(d, NOISE_AVG_OFFSET),
            noise_min: read_u16_be(d, NOISE_MIN_OFFSET),
            noise_max: read_u16_be(d, NOISE_MAX_OFFSET),
            battery_mv: read_u16_be(d, BATTERY_OFFSET),
            pt100: read_u16_be(d, PT100_OFFSET),
            mode: mode_gain.map(|(mode, _)| mode),
            gain: mode_gain.map(|(_, gain)| gain),
            node_temp: read_u8(d, NODE_TEMP_OFFSET),
        }
    }
}

// EOF
