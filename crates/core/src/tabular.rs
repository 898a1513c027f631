use std::io::{Read, Write};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::warn;

use crate::error::{GlossaryError, Result};
use crate::model::{ColumnNames, TabularRow};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub fn read_rows<R: Read>(
    source_name: &str,
    mut reader: R,
    columns: &ColumnNames,
) -> Result<Vec<TabularRow>> {
    let mut raw = Vec::new();
    reader
        .read_to_end(&mut raw)
        .map_err(|err| GlossaryError::source_read(source_name, err))?;
    let body = raw.strip_prefix(UTF8_BOM).unwrap_or(&raw);
    let mut reader = ReaderBuilder::new().from_reader(body);
    let headers = reader
        .headers()
        .map_err(|err| GlossaryError::source_read(source_name, err))?
        .clone();
    if headers.is_empty() {
        return Err(GlossaryError::source_read(source_name, "file is empty"));
    }
    let positions = column_positions(&headers, columns);
    for (name, position) in columns.headers().into_iter().zip(positions) {
        if position.is_none() {
            warn!("{} has no '{}' column; treating it as blank", source_name, name);
        }
    }
    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(|err| {
            GlossaryError::source_read(source_name, format!("invalid row {}: {}", idx + 2, err))
        })?;
        let mut row = TabularRow::default();
        for (slot, position) in row.fields_mut().into_iter().zip(positions) {
            if let Some(cell) = position.and_then(|pos| record.get(pos)) {
                *slot = cell.to_string();
            }
        }
        rows.push(row);
    }
    Ok(rows)
}

fn column_positions(headers: &StringRecord, columns: &ColumnNames) -> [Option<usize>; 10] {
    columns
        .headers()
        .map(|name| headers.iter().position(|header| header.trim() == name))
}

pub fn write_rows<W: Write>(
    mut writer: W,
    rows: &[TabularRow],
    columns: &ColumnNames,
    bom: bool,
) -> Result<()> {
    if bom {
        writer.write_all(UTF8_BOM)?;
    }
    let mut csv_writer = WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(columns.headers())?;
    for row in rows {
        csv_writer.write_record(row.fields())?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn rows_to_bytes(rows: &[TabularRow], columns: &ColumnNames, bom: bool) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_rows(&mut out, rows, columns, bom)?;
    Ok(out)
}
