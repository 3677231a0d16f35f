//! Codes command - parse firmware strings into platform codes

use anyhow::{Context, Result};
use fwid_core::parse_platform_code;

use crate::output::{CodeRow, OutputContext};

/// Decode a hex firmware argument, with or without a `0x` prefix
pub fn decode_hex_arg(arg: &str) -> Result<Vec<u8>> {
    let hex_str = arg.trim();
    let hex_str = hex_str
        .strip_prefix("0x")
        .or_else(|| hex_str.strip_prefix("0X"))
        .unwrap_or(hex_str);
    hex::decode(hex_str).with_context(|| format!("Invalid hex firmware string: {}", arg))
}

/// Parse one row per firmware string
pub fn code_rows(firmware: &[Vec<u8>]) -> Vec<CodeRow> {
    firmware
        .iter()
        .map(|fw| {
            let code = parse_platform_code(fw);
            let date = code.as_ref().and_then(|c| c.date());
            let ascii = |bytes: Option<&[u8]>| {
                bytes
                    .map(|b| b.escape_ascii().to_string())
                    .unwrap_or_else(|| "-".to_string())
            };
            CodeRow {
                firmware: fw.escape_ascii().to_string(),
                code: ascii(code.as_ref().map(|c| c.code())),
                platform: ascii(code.as_ref().map(|c| c.platform())),
                part: ascii(code.as_ref().and_then(|c| c.part_suffix())),
                date: date
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "-".to_string()),
                iso_date: date
                    .and_then(|d| d.to_naive_date())
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            }
        })
        .collect()
}

/// Show the platform code of each hex-encoded firmware string
pub fn codes(args: &[String], ctx: &OutputContext) -> Result<()> {
    let firmware = args
        .iter()
        .map(|arg| decode_hex_arg(arg))
        .collect::<Result<Vec<_>>>()?;

    let rows = code_rows(&firmware);
    let unparsed = rows.iter().filter(|row| row.code == "-").count();
    ctx.print(&rows);

    if unparsed > 0 {
        ctx.warn(&format!("{} firmware string(s) have no platform code", unparsed));
    }
    Ok(())
}
