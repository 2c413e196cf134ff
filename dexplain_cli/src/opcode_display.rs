use std::io::{Result, Write};
use dexplain_core::opcode_index::{LookupResult, Query};
use dexplain_core::opcode_record::OpcodeRecord;

const BANNER_WIDTH: usize = 60;

const COMMON_OPCODES: [&str; 5] = [
    "const/4",
    "const/16",
    "const-string",
    "move-object",
    "move-result",
];

const VERBOSE_NOTES: [&str; 4] = [
    "Vx values denote Dalvik registers",
    "Boolean values: 1 = true, 0 = false",
    "Long/double values use two registers (vx, vx+1)",
    "Examples are in big-endian format",
];

fn write_banner(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", "=".repeat(BANNER_WIDTH))
}

pub fn write_record(out: &mut impl Write, record: &OpcodeRecord) -> Result<()> {
    writeln!(out)?;
    write_banner(out)?;
    writeln!(out, "Opcode: {} (0x{})", record.mnemonic(), record.hex())?;

    if record.has_full_syntax() {
        writeln!(out, "Full syntax: {}", record.full_syntax())?;
    }
    write_banner(out)?;

    if record.explanation().is_empty() {
        writeln!(out, "\n Explanation: Not available")?;
    } else {
        writeln!(out, "\n Explanation:")?;
        writeln!(out, "  {}", record.explanation())?;
    }

    if record.example_lines().next().is_none() {
        writeln!(out, "\n Example: Not available")?;
    } else {
        writeln!(out, "\n Example:")?;
        for line in record.example_lines() {
            writeln!(out, "  {}", line)?;
        }
    }

    writeln!(out)
}

pub fn write_verbose_notes(out: &mut impl Write, url: &str) -> Result<()> {
    writeln!(out, "\n Additional Information:")?;
    writeln!(out, "  Source: {}", url)?;

    for note in VERBOSE_NOTES {
        writeln!(out, "  \u{2022} {}", note)?;
    }

    Ok(())
}

pub fn write_suggestions(out: &mut impl Write, name: &str, records: &[impl AsRef<OpcodeRecord>]) -> Result<()> {
    writeln!(out, "\nNo exact match for '{}'. Did you mean one of these?", name)?;

    for record in records {
        writeln!(out, "  - {}", record.as_ref().mnemonic())?;
    }

    writeln!(out, "\nPlease use the exact opcode name (e.g., 'const/16', not 'const/16 vx,lit16')")
}

pub fn write_not_found(out: &mut impl Write, name: &str) -> Result<()> {
    writeln!(out, "\n No opcode found matching '{}'", name)?;
    writeln!(out, "\n Try these common opcodes:")?;

    for opcode in COMMON_OPCODES {
        writeln!(out, "  \u{2022} {}", opcode)?;
    }

    writeln!(out, "\nOr use --hex to search by hex value")
}

/// Renders the outcome of `query`. Unresolved hex queries print nothing.
pub fn write_lookup_result(out: &mut impl Write, query: &Query, result: &LookupResult, verbose: bool, url: &str) -> Result<()> {
    match (result, query) {
        (LookupResult::Found(record), _) => {
            write_record(out, record)?;
            if verbose {
                write_verbose_notes(out, url)?;
            }
            Ok(())
        },

        (LookupResult::Suggestions(records), Query::ByName(name)) => {
            write_suggestions(out, name, records)?;
            write_not_found(out, name)
        },

        (LookupResult::NotFound, Query::ByName(name)) => write_not_found(out, name),

        (_, Query::ByHex(_)) => Ok(()),
    }
}
