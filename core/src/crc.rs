//! CRC-CCITT (ISO/IEC 13239) computation.
//!
//! Bit-by-bit, MSB-first polynomial division. No lookup table: payloads are
//! short query-string values, so the inner 8-step loop is cheap enough.
//!
//! With the default parameters this is the variant commonly catalogued as
//! CRC-16/CCITT-FALSE (poly `0x1021`, init `0xFFFF`, no reflection, no final
//! XOR). Passing `initial_value: 0x0000` yields CRC-16/XMODEM.

/// Default generator polynomial (x^16 + x^12 + x^5 + 1, normal form).
pub const DEFAULT_POLYNOMIAL: u16 = 0x1021;

/// Default initial register value.
pub const DEFAULT_INITIAL_VALUE: u16 = 0xFFFF;

/// Mask applied to the register once all input has been shifted through.
const MASK: u32 = 0xFFFF;

/// Top bit of the 16-bit register.
const TOP_BIT: u32 = 0x8000;

/// Parameters of the CRC register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CrcParams {
    /// Generator polynomial, MSB-first, implicit x^16 term.
    pub polynomial: u16,
    /// Value the register holds before the first input unit.
    pub initial_value: u16,
}

impl CrcParams {
    /// Create parameters with an explicit polynomial and initial value.
    pub const fn new(polynomial: u16, initial_value: u16) -> Self {
        Self {
            polynomial,
            initial_value,
        }
    }
}

impl Default for CrcParams {
    fn default() -> Self {
        Self::new(DEFAULT_POLYNOMIAL, DEFAULT_INITIAL_VALUE)
    }
}

/// Shift one input unit through the register.
///
/// The register is 32 bits wide and is not masked here. Bits pushed above
/// bit 15 only move further up (and off the top), so they never reach the
/// low 16 bits that survive the final mask.
#[inline]
fn step(mut crc: u32, unit: u32, polynomial: u32) -> u32 {
    crc ^= unit << 8;
    for _ in 0..8 {
        if crc & TOP_BIT != 0 {
            crc = (crc << 1) ^ polynomial;
        } else {
            crc <<= 1;
        }
    }
    crc
}

/// Compute the checksum of a text payload.
///
/// Characters are walked as UTF-16 code units and each unit's code value is
/// XORed into the register unmasked. Only a unit's low byte can affect the
/// result, so ASCII text matches the byte-oriented CRC exactly.
pub fn compute(payload: &str, params: CrcParams) -> u16 {
    let polynomial = u32::from(params.polynomial);
    let crc = payload
        .encode_utf16()
        .fold(u32::from(params.initial_value), |crc, unit| {
            step(crc, u32::from(unit), polynomial)
        });
    (crc & MASK) as u16
}

/// Compute the checksum of raw bytes.
pub fn compute_bytes(data: &[u8], params: CrcParams) -> u16 {
    let polynomial = u32::from(params.polynomial);
    let crc = data
        .iter()
        .fold(u32::from(params.initial_value), |crc, &byte| {
            step(crc, u32::from(byte), polynomial)
        });
    (crc & MASK) as u16
}

/// Format a checksum as exactly four uppercase hex digits.
#[inline]
pub fn to_hex(crc: u16) -> String {
    format!("{crc:04X}")
}

/// Checksum of `payload` with the default parameters, as uppercase hex.
///
/// ```
/// assert_eq!(ccitt_core::calculate_crc("123456789"), "29B1");
/// assert_eq!(ccitt_core::calculate_crc(""), "FFFF");
/// ```
pub fn calculate_crc(payload: &str) -> String {
    calculate_crc_with(payload, CrcParams::default())
}

/// Checksum of `payload` with explicit parameters, as uppercase hex.
pub fn calculate_crc_with(payload: &str, params: CrcParams) -> String {
    to_hex(compute(payload, params))
}

/// Check a payload against a hex checksum (case-insensitive).
///
/// Returns `false` if `expected` is not a 1-4 digit hex number.
pub fn verify(payload: &str, expected: &str, params: CrcParams) -> bool {
    if expected.is_empty()
        || expected.len() > 4
        || !expected.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return false;
    }
    match u16::from_str_radix(expected, 16) {
        Ok(value) => compute(payload, params) == value,
        Err(_) => false,
    }
}
