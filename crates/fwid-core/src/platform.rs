//! Platform code extraction from raw ECU firmware strings
//!
//! Firmware version strings returned for DID `0xF100` look like
//!
//! ```text
//! \xf1\x00CV1_ RDR -----      1.00 1.01 99110-CV000
//! \xf1\x00LX2 MFC  AT USA LHD 1.00 1.07 99211-S8100 220222
//! \xf1\x00DH LKAS 1.1 -150210
//! ```
//!
//! The string is split into tokens on whitespace (and NUL padding) after the
//! echoed `\xf1\x00` is removed. Three token rules are then applied:
//!
//! | Rule | Token | Example |
//! |------|-------|---------|
//! | platform | first token, trailing `_`/`-` removed: 2 uppercase letters + up to 2 alphanumerics | `CV1_` → `CV1` |
//! | part number | 5 digits, optional `-` or `/`, then letter + 3 uppercase/digits + digit | `99110-CV000`, `56310L0010`, `56310/M6300` |
//! | date | last token, leading dashes removed: exactly 6 digits (YYMMDD) | `-150210` → `150210` |
//!
//! Tokens made only of `-`/`_` placeholders are ignored. When a part number is
//! present the platform code becomes `<platform>-<suffix>`.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use tracing::debug;

/// DID `0xF100` echoed in front of the version string
pub const SUPPLIER_PREFIX: [u8; 2] = [0xf1, 0x00];

/// Joins platform token and part-number suffix in a composite code
pub const PART_NUMBER_MARKER: u8 = b'-';

/// Placeholder bytes used to pad platform tokens and fill empty fields
const PLACEHOLDERS: &[u8] = b"-_";

// =============================================================================
// Types
// =============================================================================

/// Manufacturing date, six ASCII digits in YYMMDD order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FirmwareDate([u8; 6]);

impl FirmwareDate {
    /// Parse a token of exactly six ASCII digits
    pub fn parse(token: &[u8]) -> Option<Self> {
        let digits: [u8; 6] = token.try_into().ok()?;
        digits
            .iter()
            .all(u8::is_ascii_digit)
            .then_some(Self(digits))
    }

    /// Raw digits
    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    /// Calendar date, if the digits form a valid 20YY-MM-DD
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let digit = |i: usize| char::from(self.0[i]).to_digit(10);
        let field = |i: usize| Some(digit(i)? * 10 + digit(i + 1)?);
        NaiveDate::from_ymd_opt(2000 + field(0)? as i32, field(2)?, field(4)?)
    }
}

impl fmt::Display for FirmwareDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // digits only, always valid ASCII
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl Serialize for FirmwareDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Platform code extracted from one firmware string
///
/// Equality covers both the code token and the date; a missing date is its
/// own value and never matches a present one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlatformCode {
    code: Vec<u8>,
    date: Option<FirmwareDate>,
}

impl PlatformCode {
    pub fn new(code: impl Into<Vec<u8>>, date: Option<FirmwareDate>) -> Self {
        Self {
            code: code.into(),
            date,
        }
    }

    /// Code with a date; `None` unless `date` is six ASCII digits
    pub fn dated(code: &[u8], date: &[u8]) -> Option<Self> {
        FirmwareDate::parse(date).map(|date| Self::new(code, Some(date)))
    }

    /// Code without a date
    pub fn undated(code: &[u8]) -> Self {
        Self::new(code, None)
    }

    /// Code token, possibly `<platform>-<part suffix>`
    pub fn code(&self) -> &[u8] {
        &self.code
    }

    pub fn date(&self) -> Option<&FirmwareDate> {
        self.date.as_ref()
    }

    /// Platform token without any part-number suffix
    pub fn platform(&self) -> &[u8] {
        match self.marker_position() {
            Some(pos) => &self.code[..pos],
            None => &self.code,
        }
    }

    /// Part-number suffix merged into the code, if any
    pub fn part_suffix(&self) -> Option<&[u8]> {
        self.marker_position().map(|pos| &self.code[pos + 1..])
    }

    /// Whether a part number was merged into the code
    pub fn has_part_number(&self) -> bool {
        self.marker_position().is_some()
    }

    fn marker_position(&self) -> Option<usize> {
        self.code.iter().position(|b| *b == PART_NUMBER_MARKER)
    }
}

impl fmt::Display for PlatformCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code.escape_ascii())?;
        if let Some(date) = &self.date {
            write!(f, " ({})", date)?;
        }
        Ok(())
    }
}

impl Serialize for PlatformCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Repr<'a> {
            code: String,
            date: Option<&'a FirmwareDate>,
        }

        Repr {
            code: self.code.escape_ascii().to_string(),
            date: self.date.as_ref(),
        }
        .serialize(serializer)
    }
}

// =============================================================================
// Tokenizer and token rules
// =============================================================================

fn is_separator(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == 0
}

fn is_placeholder_run(token: &[u8]) -> bool {
    token.iter().all(|b| PLACEHOLDERS.contains(b))
}

/// Split a firmware string into tokens
///
/// The supplier prefix is removed if present; runs of whitespace and NUL
/// padding separate tokens and never appear inside one.
pub fn tokenize(fw: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = fw.strip_prefix(&SUPPLIER_PREFIX).unwrap_or(fw);
    body.split(|b| is_separator(*b))
        .filter(|token| !token.is_empty())
}

/// Platform rule: `CV1_` → `CV1`, `AEhe` → `AEhe`
fn platform_token(token: &[u8]) -> Option<&[u8]> {
    let end = token.iter().rposition(|b| !PLACEHOLDERS.contains(b))? + 1;
    let token = &token[..end];

    let head = token.get(..2)?;
    let tail = &token[2..];
    let valid = head.iter().all(u8::is_ascii_uppercase)
        && tail.len() <= 2
        && tail.iter().all(u8::is_ascii_alphanumeric);
    valid.then_some(token)
}

/// Part-number rule; returns the platform-specific 5-character suffix
fn part_number_suffix(token: &[u8]) -> Option<&[u8]> {
    let generic = token.get(..5)?;
    if !generic.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let rest = &token[5..];
    let suffix = match rest.first() {
        Some(b'-' | b'/') => &rest[1..],
        _ => rest,
    };

    match suffix {
        [first, middle @ .., last] if middle.len() == 3 => {
            let valid = first.is_ascii_uppercase()
                && middle
                    .iter()
                    .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
                && last.is_ascii_digit();
            valid.then_some(suffix)
        }
        _ => None,
    }
}

/// Date rule: `-150210` → `150210`
fn date_token(token: &[u8]) -> Option<FirmwareDate> {
    let start = token.iter().position(|b| *b != b'-')?;
    FirmwareDate::parse(&token[start..])
}

// =============================================================================
// Parser
// =============================================================================

/// Extract the platform code from a single firmware string
///
/// Returns `None` when the first token is not a recognizable platform token.
pub fn parse_platform_code(fw: &[u8]) -> Option<PlatformCode> {
    let mut tokens = tokenize(fw).filter(|token| !is_placeholder_run(token));
    let platform = platform_token(tokens.next()?)?;
    let trailing: Vec<&[u8]> = tokens.collect();

    let code = match trailing.iter().find_map(|token| part_number_suffix(token)) {
        Some(suffix) => [platform, &[PART_NUMBER_MARKER][..], suffix].concat(),
        None => platform.to_vec(),
    };
    let date = trailing.last().and_then(|token| date_token(token));

    Some(PlatformCode { code, date })
}

/// Extract the set of platform codes implied by a batch of firmware strings
///
/// Strings without a platform token contribute nothing; input order does
/// not affect the result.
pub fn parse_platform_codes<I, B>(firmware: I) -> BTreeSet<PlatformCode>
where
    I: IntoIterator<Item = B>,
    B: AsRef<[u8]>,
{
    firmware
        .into_iter()
        .filter_map(|fw| {
            let fw = fw.as_ref();
            let code = parse_platform_code(fw);
            if code.is_none() {
                debug!(fw = %fw.escape_ascii(), "No platform code in firmware string");
            }
            code
        })
        .collect()
}
