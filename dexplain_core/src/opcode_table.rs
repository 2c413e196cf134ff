use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use log::{debug, info};
use scraper::{ElementRef, Html, Selector};
use crate::opcode_record::RawRow;
use crate::opcode_source::{HttpOpcodeSource, OpcodeSource};

const MIN_CELLS_PER_ROW: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum OpcodeTableError {
    ConfigurationError(String),
    FetchError(String),
    ParseError(String),
}

impl Display for OpcodeTableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OpcodeTableError::ConfigurationError(s) => write!(f, "configuration error: {}", s),
            OpcodeTableError::FetchError(s) => write!(f, "fetch error: {}", s),
            OpcodeTableError::ParseError(s) => write!(f, "parse error: {}", s),
        }
    }
}

impl Error for OpcodeTableError {}

pub struct OpcodeTable;

impl OpcodeTable {

    fn selector(css: &str) -> Result<Selector, OpcodeTableError> {
        Selector::parse(css).map_err(|e| OpcodeTableError::ParseError(format!("invalid selector {}: {}", css, e)))
    }

    fn cell_text(cell: &ElementRef) -> String {
        cell.text().collect::<String>().trim().to_string()
    }

    fn parse_row(row: ElementRef, cell_selector: &Selector) -> Option<RawRow> {
        let cells: Vec<String> = row.select(cell_selector).map(|cell| OpcodeTable::cell_text(&cell)).collect();

        if cells.len() < MIN_CELLS_PER_ROW {
            return None;
        }

        let mut cells = cells.into_iter();
        let hex = cells.next().unwrap_or_default();
        let full_syntax = cells.next().unwrap_or_default();
        let explanation = cells.next().unwrap_or_default();
        let example = cells.next().unwrap_or_default();

        Some(RawRow { hex, full_syntax, explanation, example })
    }

    /// Extracts the rows of the first table in `html`, header row excluded.
    pub fn parse(html: &str) -> Result<Vec<RawRow>, OpcodeTableError> {
        let table_selector = OpcodeTable::selector("table")?;
        let row_selector = OpcodeTable::selector("tr")?;
        let cell_selector = OpcodeTable::selector("td")?;

        let document = Html::parse_document(html);

        let table = document.select(&table_selector)
            .next()
            .ok_or(OpcodeTableError::ParseError("could not find opcode table in document".to_string()))?;

        let rows: Vec<RawRow> = table.select(&row_selector)
            .skip(1)
            .filter_map(|row| OpcodeTable::parse_row(row, &cell_selector))
            .collect();

        debug!("parsed {} opcode rows", rows.len());
        Ok(rows)
    }

    pub fn fetch(source: &impl OpcodeSource) -> Result<Vec<RawRow>, OpcodeTableError> {
        let document = source.fetch_document()?;
        OpcodeTable::parse(&document)
    }

    pub fn fetch_url(url: &str, timeout: Duration) -> Result<Vec<RawRow>, OpcodeTableError> {
        info!("loading opcode table from {} ...", url);

        let source = HttpOpcodeSource::new(url, timeout)?;
        OpcodeTable::fetch(&source)
    }
}
