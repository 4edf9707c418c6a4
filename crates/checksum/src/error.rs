//! CRC construction errors.

use core::fmt;

/// A CRC engine could not be built from the supplied parameters.
///
/// Only the checked constructors ([`Crc16::from_params`](crate::Crc16::from_params),
/// [`Crc32::from_params`](crate::Crc32::from_params) and their table-taking
/// forms) return this. The typed constructors take register-width integers
/// and cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CrcError {
  /// The parameter set describes a different register width than the engine.
  WidthMismatch {
    /// Width of the engine being built.
    expected: u8,
    /// Width found in the parameters.
    found: u8,
  },
  /// A parameter has bits set above the register width.
  ValueTooWide {
    /// Which parameter (`"polynomial"`, `"initial"` or `"xor_out"`).
    field: &'static str,
    /// The offending value.
    value: u64,
    /// Register width in bits.
    width: u8,
  },
}

impl fmt::Display for CrcError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::WidthMismatch { expected, found } => {
        write!(f, "crc width mismatch: engine is {expected}-bit, parameters are {found}-bit")
      }
      Self::ValueTooWide { field, value, width } => {
        write!(f, "crc {field} 0x{value:X} does not fit in {width} bits")
      }
    }
  }
}

impl core::error::Error for CrcError {}
