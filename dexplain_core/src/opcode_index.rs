use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::rc::Rc;
use log::{debug, warn};
use crate::opcode_record::{OpcodeRecord, RawRow};

const HEX_KEY_WIDTH: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    ByName(String),
    ByHex(String),
}

impl Display for Query {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Query::ByName(name) => write!(f, "name '{}'", name),
            Query::ByHex(hex) => write!(f, "hex '{}'", hex),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LookupResult {
    Found(Rc<OpcodeRecord>),
    Suggestions(Vec<Rc<OpcodeRecord>>),
    NotFound,
}

/// Strips a leading `0x`, lowercases and left-pads with zeros to two digits.
pub fn normalize_hex(value: &str) -> String {
    let value = value.trim();
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
        .to_lowercase();

    format!("{:0>width$}", digits, width = HEX_KEY_WIDTH)
}

/// Immutable lookup structure over the opcode table.
///
/// Records are shared between the mnemonic and the hex mapping, so a hex hit
/// yields the very record the mnemonic mapping holds for that row.
#[derive(Debug, Default)]
pub struct OpcodeIndex {
    by_mnemonic: HashMap<String, Rc<OpcodeRecord>>,
    mnemonic_order: Vec<String>,
    by_hex: HashMap<String, Rc<OpcodeRecord>>,
}

impl OpcodeIndex {

    fn insert_mnemonic(&mut self, row: &RawRow) -> Option<Rc<OpcodeRecord>> {
        let record = Rc::new(OpcodeRecord::from_raw_row(row)?);
        let key = record.mnemonic().to_lowercase();

        if self.by_mnemonic.insert(key.clone(), Rc::clone(&record)).is_some() {
            debug!("duplicate mnemonic {}, keeping row with hex {}", key, row.hex);
        } else {
            self.mnemonic_order.push(key);
        }

        Some(record)
    }

    fn insert_hex(&mut self, hex: &str, record: Option<Rc<OpcodeRecord>>) {
        let record = record.unwrap_or_else(|| {
            warn!("row with hex {} has no mnemonic, storing an empty record", hex);
            Rc::new(OpcodeRecord::default())
        });

        self.by_hex.insert(normalize_hex(hex), record);
    }

    pub fn build<'a>(rows: impl IntoIterator<Item = &'a RawRow>) -> OpcodeIndex {
        let mut index = OpcodeIndex::default();

        for row in rows {
            let record = index.insert_mnemonic(row);

            if !row.hex.is_empty() {
                index.insert_hex(&row.hex, record);
            }
        }

        debug!("indexed {} mnemonics and {} hex codes", index.by_mnemonic.len(), index.by_hex.len());
        index
    }

    fn lookup_hex(&self, value: &str) -> LookupResult {
        match self.by_hex.get(&normalize_hex(value)) {
            Some(record) => LookupResult::Found(Rc::clone(record)),
            None => LookupResult::NotFound,
        }
    }

    fn lookup_name(&self, value: &str) -> LookupResult {
        let name = value.trim().to_lowercase();

        if let Some(record) = self.by_mnemonic.get(&name) {
            return LookupResult::Found(Rc::clone(record));
        }

        let matches: Vec<Rc<OpcodeRecord>> = self.mnemonic_order.iter()
            .filter(|key| key.contains(name.as_str()))
            .filter_map(|key| self.by_mnemonic.get(key))
            .cloned()
            .collect();

        if matches.is_empty() {
            LookupResult::NotFound
        } else {
            LookupResult::Suggestions(matches)
        }
    }

    pub fn lookup(&self, query: &Query) -> LookupResult {
        debug!("looking up {}", query);

        match query {
            Query::ByHex(value) => self.lookup_hex(value),
            Query::ByName(value) => self.lookup_name(value),
        }
    }

    pub fn len(&self) -> usize {
        self.by_mnemonic.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_mnemonic.is_empty()
    }

    /// Lowercase mnemonic keys, in first-insertion order.
    #[cfg(test)]
    pub fn mnemonics(&self) -> impl Iterator<Item = &str> {
        self.mnemonic_order.iter().map(String::as_str)
    }

    #[cfg(test)]
    pub fn hex_codes(&self) -> impl Iterator<Item = &str> {
        self.by_hex.keys().map(String::as_str)
    }
}
