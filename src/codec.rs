//! Whitespace-delimited catalog file format.
//!
//! ```text
//! <count>
//! <id> <name> <manufacturer> <purpose> <frequency> <power> <weight>
//! ```
//!
//! Any run of whitespace separates tokens, line breaks included. There is no
//! quoting, so text fields must be single tokens; `write_catalog` refuses to
//! encode a field that would split on reload.

use crate::errors::AppError;
use crate::model::RadioRecord;
use log::{debug, trace, warn};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::path::Path;
use std::str::FromStr;

#[inline]
fn strip_bom(s: &str) -> &str {
    s.strip_prefix('\u{FEFF}').unwrap_or(s)
}

/// Token stream over a line reader, the way a stream extractor sees it.
struct Tokens<R: BufRead> {
    lines: Lines<R>,
    pending: VecDeque<String>,
    first_line: bool,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self { lines: reader.lines(), pending: VecDeque::new(), first_line: true }
    }

    fn next(&mut self) -> Result<Option<String>, AppError> {
        loop {
            if let Some(tok) = self.pending.pop_front() {
                return Ok(Some(tok));
            }
            let Some(line) = self.lines.next() else { return Ok(None); };
            let line = line?;
            let s = if self.first_line { strip_bom(&line) } else { line.as_str() };
            self.first_line = false;
            self.pending.extend(s.split_whitespace().map(str::to_string));
        }
    }
}

fn next_field<R: BufRead>(tokens: &mut Tokens<R>, rec_no: usize, field: &str) -> Result<String, AppError> {
    tokens
        .next()?
        .ok_or_else(|| AppError::Parse(format!("record {}: missing {}", rec_no, field)))
}

fn parse_field<T: FromStr>(tok: &str, rec_no: usize, field: &str) -> Result<T, AppError> {
    tok.parse::<T>()
        .map_err(|_| AppError::Parse(format!("record {}: bad {} {:?}", rec_no, field, tok)))
}

pub fn load_catalog(path: &Path) -> Result<Vec<RadioRecord>, AppError> {
    let f = File::open(path).map_err(|e| AppError::IO(format!("open {}: {}", path.display(), e)))?;
    let records = parse_catalog_reader(BufReader::new(f))?;
    debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parses a whole catalog. Any malformed or missing token fails the load;
/// no partial catalog is returned.
pub fn parse_catalog_reader<R: BufRead>(reader: R) -> Result<Vec<RadioRecord>, AppError> {
    let mut tokens = Tokens::new(reader);

    let count_tok = tokens
        .next()?
        .ok_or_else(|| AppError::Parse("empty file, expected record count".into()))?;
    let count = count_tok
        .parse::<i64>()
        .map_err(|_| AppError::Parse(format!("bad record count {:?}", count_tok)))?;
    if count <= 0 {
        return Err(AppError::InvalidCount(count));
    }
    let count = usize::try_from(count).map_err(|_| AppError::InvalidCount(count))?;
    trace!("declared count={}", count);

    let mut out = Vec::with_capacity(count.min(1024));
    for i in 0..count {
        let rec_no = i + 1;
        let id = parse_field(&next_field(&mut tokens, rec_no, "id")?, rec_no, "id")?;
        let name = next_field(&mut tokens, rec_no, "name")?;
        let manufacturer = next_field(&mut tokens, rec_no, "manufacturer")?;
        let purpose = next_field(&mut tokens, rec_no, "purpose")?;
        let frequency = parse_field(&next_field(&mut tokens, rec_no, "frequency")?, rec_no, "frequency")?;
        let power = parse_field(&next_field(&mut tokens, rec_no, "power")?, rec_no, "power")?;
        let weight = parse_field(&next_field(&mut tokens, rec_no, "weight")?, rec_no, "weight")?;

        let rec = RadioRecord { id, name, manufacturer, purpose, frequency, power, weight };
        trace!("parsed {:?}", rec);
        out.push(rec);
    }

    let mut extra = 0usize;
    while tokens.next()?.is_some() {
        extra += 1;
    }
    if extra > 0 {
        warn!("ignoring {} tokens after the {} declared records", extra, count);
    }
    Ok(out)
}

fn check_text_field(rec: &RadioRecord, field: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(AppError::InvalidField(format!(
            "record id={}: {} {:?} must be a single non-empty token",
            rec.id, field, value
        )));
    }
    Ok(())
}

fn check_encodable(records: &[RadioRecord]) -> Result<(), AppError> {
    for r in records {
        check_text_field(r, "name", &r.name)?;
        check_text_field(r, "manufacturer", &r.manufacturer)?;
        check_text_field(r, "purpose", &r.purpose)?;
    }
    Ok(())
}

/// Writes the count line and one line per record. Nothing is written if any
/// text field would not survive a reload.
pub fn write_catalog<W: Write>(records: &[RadioRecord], mut w: W) -> Result<(), AppError> {
    check_encodable(records)?;
    writeln!(w, "{}", records.len())?;
    for r in records {
        writeln!(
            w,
            "{} {} {} {} {} {} {}",
            r.id, r.name, r.manufacturer, r.purpose, r.frequency, r.power, r.weight
        )?;
    }
    w.flush()?;
    Ok(())
}

pub fn save_catalog(records: &[RadioRecord], path: &Path) -> Result<(), AppError> {
    check_encodable(records)?;
    let f = File::create(path)
        .map_err(|e| AppError::IO(format!("open {} for writing: {}", path.display(), e)))?;
    write_catalog(records, BufWriter::new(f))?;
    debug!("saved {} records to {}", records.len(), path.display());
    Ok(())
}
