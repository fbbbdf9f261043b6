//! # Barcode Encoder
//!
//! Pure Code 39 encoder producing a one-bit raster.
//!
//! ## Encoding
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "PRD1001"  ──wrap──►  "*PRD1001*"                                      │
//! │                                                                         │
//! │  every symbol → 9 elements from the Code 39 table, e.g.                 │
//! │                                                                         │
//! │    '*' = n w n n w n w n n                                              │
//! │          B S B S B S B S B      (bar / space alternate, bar first)      │
//! │                                                                         │
//! │    narrow = 1 unit, wide = 3 units, +1 unit of space after each symbol  │
//! │                                                                         │
//! │  '*' → 1 000 1 0 111 0 111 0 1 | 0                                      │
//! │                                                                         │
//! │  width  = Σ unit widths (16 per symbol)                                 │
//! │  height = 50, every row identical                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The encoder never touches the filesystem; `BarcodeRaster::to_pbm` yields
//! the plain PBM text and stox-store decides where it goes.

use serde::Serialize;

use crate::error::{CoreError, CoreResult};

/// Fixed raster height in pixels.
pub const BARCODE_HEIGHT: usize = 50;

/// Width of a narrow element in units.
pub const NARROW_UNITS: usize = 1;

/// Width of a wide element in units.
pub const WIDE_UNITS: usize = 3;

/// Start/stop sentinel wrapped around every encoded text.
pub const SENTINEL: char = '*';

const INTER_SYMBOL_GAP: usize = NARROW_UNITS;

const SENTINEL_PATTERN: &str = "nwnnwnwnn";

/// Returns the 9-element narrow/wide pattern for a Code 39 symbol.
pub fn code39_pattern(symbol: char) -> Option<&'static str> {
    let pattern = match symbol {
        '0' => "nnnwwnwnn",
        '1' => "wnnwnnnnw",
        '2' => "nnwwnnnnw",
        '3' => "wnwwnnnnn",
        '4' => "nnnwwnnnw",
        '5' => "wnnwwnnnn",
        '6' => "nnwwwnnnn",
        '7' => "nnnwnnwnw",
        '8' => "wnnwnnwnn",
        '9' => "nnwwnnwnn",
        'A' => "wnnnnwnnw",
        'B' => "nnwnnwnnw",
        'C' => "wnwnnwnnn",
        'D' => "nnnnwwnnw",
        'E' => "wnnnwwnnn",
        'F' => "nnwnwwnnn",
        'G' => "nnnnnwwnw",
        'H' => "wnnnnwwnn",
        'I' => "nnwnnwwnn",
        'J' => "nnnnwwwnn",
        'K' => "wnnnnnnww",
        'L' => "nnwnnnnww",
        'M' => "wnwnnnnwn",
        'N' => "nnnnwnnww",
        'O' => "wnnnwnnwn",
        'P' => "nnwnwnnwn",
        'Q' => "nnnnnnwww",
        'R' => "wnnnnnwwn",
        'S' => "nnwnnnwwn",
        'T' => "nnnnwnwwn",
        'U' => "wwnnnnnnw",
        'V' => "nwwnnnnnw",
        'W' => "wwwnnnnnn",
        'X' => "nwnnwnnnw",
        'Y' => "wwnnwnnnn",
        'Z' => "nwwnwnnnn",
        '-' => "nwnnnnwnw",
        '.' => "wwnnnnwnn",
        ' ' => "nwwnnnwnn",
        SENTINEL => SENTINEL_PATTERN,
        _ => return None,
    };
    Some(pattern)
}

fn element_units(element: u8) -> usize {
    if element == b'w' {
        WIDE_UNITS
    } else {
        NARROW_UNITS
    }
}

/// Resolves the pattern of every symbol in `*text*`, reporting the first
/// unsupported character by its position in `text`.
fn resolve_patterns(text: &str) -> CoreResult<Vec<&'static str>> {
    let mut patterns = Vec::with_capacity(text.chars().count() + 2);
    patterns.push(SENTINEL_PATTERN);
    for (position, symbol) in text.chars().enumerate() {
        let pattern =
            code39_pattern(symbol).ok_or(CoreError::UnsupportedSymbol { symbol, position })?;
        patterns.push(pattern);
    }
    patterns.push(SENTINEL_PATTERN);
    Ok(patterns)
}

/// Total raster width for `text`, including both sentinels and every
/// inter-symbol gap.
pub fn encoded_width(text: &str) -> CoreResult<usize> {
    let width = resolve_patterns(text)?
        .iter()
        .map(|pattern| pattern.bytes().map(element_units).sum::<usize>() + INTER_SYMBOL_GAP)
        .sum();
    Ok(width)
}

/// Encodes `text` into a Code 39 raster.
///
/// ## Errors
/// `UnsupportedSymbol` for any character outside `0-9 A-Z - . space *`.
///
/// ## Example
/// ```rust
/// use stox_core::barcode::{encode, BARCODE_HEIGHT};
///
/// let raster = encode("PRD1001").unwrap();
/// assert_eq!(raster.width(), 144);
/// assert_eq!(raster.height(), BARCODE_HEIGHT);
/// assert_eq!(raster, encode("PRD1001").unwrap());
/// ```
pub fn encode(text: &str) -> CoreResult<BarcodeRaster> {
    let patterns = resolve_patterns(text)?;

    let mut row = Vec::new();
    for pattern in patterns {
        for (index, element) in pattern.bytes().enumerate() {
            let is_bar = index % 2 == 0;
            row.extend(std::iter::repeat(is_bar).take(element_units(element)));
        }
        row.extend(std::iter::repeat(false).take(INTER_SYMBOL_GAP));
    }

    Ok(BarcodeRaster {
        text: text.to_string(),
        row,
        height: BARCODE_HEIGHT,
    })
}

// =============================================================================
// Raster
// =============================================================================

/// A rendered barcode: one row of pixels repeated `height` times.
///
/// `true` is a bar (black, `1` in PBM), `false` is a space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarcodeRaster {
    text: String,
    row: Vec<bool>,
    height: usize,
}

impl BarcodeRaster {
    /// The text that was encoded (without sentinels).
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn width(&self) -> usize {
        self.row.len()
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The single bar/space row every raster row repeats.
    pub fn row(&self) -> &[bool] {
        &self.row
    }

    /// Row-major iteration over all `height` rows.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        std::iter::repeat(self.row.as_slice()).take(self.height)
    }

    /// Renders the raster as plain (ASCII) PBM.
    ///
    /// ```text
    /// P1
    /// <width> <height>
    /// 1 0 0 0 1 0 1 1 1 …     ← height rows, pixels separated by one space
    /// ```
    pub fn to_pbm(&self) -> String {
        let mut out = format!("P1\n{} {}\n", self.width(), self.height);
        for row in self.rows() {
            let line = row
                .iter()
                .map(|&bar| if bar { "1" } else { "0" })
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-. *";

    #[test]
    fn test_every_pattern_has_three_wide_elements() {
        for symbol in ALPHABET.chars() {
            let pattern = code39_pattern(symbol).unwrap();
            assert_eq!(pattern.len(), 9, "pattern length for {symbol:?}");
            assert_eq!(
                pattern.bytes().filter(|&e| e == b'w').count(),
                3,
                "wide count for {symbol:?}"
            );
        }
        assert_eq!(code39_pattern(SENTINEL), Some(SENTINEL_PATTERN));
    }

    #[test]
    fn test_unknown_symbols_have_no_pattern() {
        assert_eq!(code39_pattern('a'), None);
        assert_eq!(code39_pattern('$'), None);
        assert_eq!(code39_pattern('é'), None);
    }

    #[test]
    fn test_sentinel_pixels() {
        // Empty text still encodes start and stop sentinels.
        let raster = encode("").unwrap();
        let expected: Vec<bool> = "1000101110111010"
            .chars()
            .map(|c| c == '1')
            .collect();

        assert_eq!(raster.width(), 32);
        assert_eq!(&raster.row()[..16], expected.as_slice());
        assert_eq!(&raster.row()[16..], expected.as_slice());
    }

    #[test]
    fn test_width_matches_table_sum() {
        let raster = encode("PRD1001").unwrap();
        // 9 symbols (7 + 2 sentinels) × (3 wide × 3 + 6 narrow × 1 + 1 gap)
        assert_eq!(raster.width(), 9 * 16);
        assert_eq!(encoded_width("PRD1001").unwrap(), raster.width());
        assert_eq!(encoded_width("A-B. C").unwrap(), 8 * 16);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let first = encode("PRD1001").unwrap();
        let second = encode("PRD1001").unwrap();

        assert_eq!(first.width(), second.width());
        assert_eq!(first.height(), second.height());
        assert!(first.rows().eq(second.rows()));
        assert_eq!(first.to_pbm().as_bytes(), second.to_pbm().as_bytes());
    }

    #[test]
    fn test_unsupported_symbol_reports_position() {
        assert_eq!(
            encode("PRDx1"),
            Err(CoreError::UnsupportedSymbol {
                symbol: 'x',
                position: 3
            })
        );
        assert!(encoded_width("prd1001").is_err());
    }

    #[test]
    fn test_rows_are_identical() {
        let raster = encode("42").unwrap();
        assert_eq!(raster.rows().count(), BARCODE_HEIGHT);
        assert!(raster.rows().all(|row| row == raster.row()));
        assert_eq!(raster.row().first(), Some(&true));
    }

    #[test]
    fn test_pbm_layout() {
        let raster = encode("PRD1001").unwrap();
        let pbm = raster.to_pbm();
        let lines: Vec<&str> = pbm.lines().collect();

        assert_eq!(lines.len(), BARCODE_HEIGHT + 2);
        assert_eq!(lines[0], "P1");
        assert_eq!(lines[1], "144 50");
        for line in &lines[2..] {
            assert_eq!(line.split(' ').count(), 144);
            assert!(line.split(' ').all(|px| px == "0" || px == "1"));
        }
        assert!(lines[2].starts_with("1 0 0 0 1 0 1 1 1 0"));
        assert!(pbm.ends_with("0\n"));
    }
}
