/// One row of the opcode table, as scraped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub hex: String,
    pub full_syntax: String,
    pub explanation: String,
    pub example: String,
}

impl RawRow {
    pub fn new(hex: impl Into<String>, full_syntax: impl Into<String>, explanation: impl Into<String>, example: impl Into<String>) -> Self {
        RawRow {
            hex: hex.into(),
            full_syntax: full_syntax.into(),
            explanation: explanation.into(),
            example: example.into(),
        }
    }

    /// First whitespace-delimited token of the syntax column, e.g. `const/16` for `const/16 vx,lit16`.
    pub fn mnemonic(&self) -> Option<&str> {
        self.full_syntax.split_whitespace().next()
    }
}

/// Indexed documentation of a single Dalvik opcode.
///
/// The default value is the content-empty record the index stores under a hex
/// code whose row carried no usable mnemonic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpcodeRecord {
    hex: String,
    mnemonic: String,
    full_syntax: String,
    explanation: String,
    example: String,
}

impl OpcodeRecord {

    pub fn from_raw_row(row: &RawRow) -> Option<OpcodeRecord> {
        let mnemonic = row.mnemonic()?.to_string();

        Some(OpcodeRecord {
            hex: row.hex.clone(),
            mnemonic,
            full_syntax: row.full_syntax.clone(),
            explanation: row.explanation.clone(),
            example: row.example.clone(),
        })
    }

    pub fn hex(&self) -> &str {
        self.hex.as_str()
    }

    pub fn mnemonic(&self) -> &str {
        self.mnemonic.as_str()
    }

    pub fn full_syntax(&self) -> &str {
        self.full_syntax.as_str()
    }

    pub fn explanation(&self) -> &str {
        self.explanation.as_str()
    }

    pub fn example(&self) -> &str {
        self.example.as_str()
    }

    /// True when the syntax column carries operands beyond the bare mnemonic.
    pub fn has_full_syntax(&self) -> bool {
        !self.full_syntax.is_empty() && self.full_syntax != self.mnemonic
    }

    pub fn example_lines(&self) -> impl Iterator<Item = &str> {
        self.example
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}
