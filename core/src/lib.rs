//! CCITT Core - CRC-CCITT (ISO/IEC 13239) checksum engine.
//!
//! This library provides the one piece of real logic behind the checksum
//! service: a bitwise, MSB-first CRC-16 over a text payload, formatted as
//! four uppercase hex digits.
//!
//! # Properties
//!
//! - Total: every input (including the empty string) has a checksum
//! - Pure: no I/O, no shared state, no allocation beyond the result string
//! - Deterministic: same payload and parameters, same output
//!
//! # Constraints
//!
//! This library intentionally does NOT:
//! - Access the network
//! - Perform file I/O
//! - Use lookup tables (payloads are short)
//! - Support CRC widths other than 16 bits
//!
//! # Example
//!
//! ```
//! use ccitt_core::{calculate_crc, calculate_crc_with, CrcParams};
//!
//! // Default polynomial 0x1021, initial value 0xFFFF
//! assert_eq!(calculate_crc("123456789"), "29B1");
//!
//! // Same polynomial with a zero register gives the XMODEM check value
//! let xmodem = CrcParams::new(0x1021, 0x0000);
//! assert_eq!(calculate_crc_with("123456789", xmodem), "31C3");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod crc;

// Re-export main API at crate root
pub use crc::{
    calculate_crc, calculate_crc_with, compute, compute_bytes, to_hex, verify, CrcParams,
    DEFAULT_INITIAL_VALUE, DEFAULT_POLYNOMIAL,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_reexports_match_module() {
        let params = CrcParams::default();
        assert_eq!(calculate_crc("ABC"), crc::calculate_crc_with("ABC", params));
        assert_eq!(to_hex(compute("ABC", params)), "F508");
    }

    #[test]
    fn idempotent_across_calls() {
        let payloads = ["", "A", "hello", "123456789"];
        let first: Vec<String> = payloads.iter().map(|p| calculate_crc(p)).collect();
        let second: Vec<String> = payloads.iter().map(|p| calculate_crc(p)).collect();
        assert_eq!(first, second);
    }
}
