//! Case code computation.
//!
//! The case code is an 8-bit value where each bit indicates whether a corner
//! of the cell is inside the surface (sign bit of the density set).

/// Build the case code from 8 corner densities.
///
/// Each bit in the result corresponds to one corner:
/// - Bit 0: corner (0,0,0)
/// - Bit 1: corner (1,0,0)
/// - Bit 2: corner (0,1,0)
/// - Bit 3: corner (1,1,0)
/// - Bit 4: corner (0,0,1)
/// - Bit 5: corner (1,0,1)
/// - Bit 6: corner (0,1,1)
/// - Bit 7: corner (1,1,1)
///
/// A bit is set if the corresponding density is negative. Zero counts as
/// outside.
#[inline]
pub fn build(densities: &[i8; 8]) -> u8 {
  let mut case_code = 0u8;
  for (i, &density) in densities.iter().enumerate() {
    case_code |= ((density as u8) >> 7) << i;
  }
  case_code
}

/// True when all 8 corners share the sign of corner 7.
///
/// `d7 >> 7` is `0x00` or `0xFF`, so the xor is zero exactly for case codes
/// 0 and 255.
#[inline(always)]
pub fn is_uniform(case_code: u8, densities: &[i8; 8]) -> bool {
  (case_code ^ ((densities[7] >> 7) as u8)) == 0
}

#[cfg(test)]
#[path = "case_code_test.rs"]
mod case_code_test;
