//! Emitting the per-page table data files.

use std::collections::BTreeMap;
use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use dugout_stats::table::StatTable;
use dugout_stats::table::StatValue;

use crate::error::Result;

const TABLE_GLOBAL_NAME: &str = "tableData";

/// Writes one page's full table as a JS file defining the global the
/// page script re-subsets on selection changes.
pub(crate) struct TableWriter<W> {
    writer: W,
}

#[derive(Serialize)]
struct TableData<'a> {
    columns: &'a [String],
    keys: &'a [String],
    rows: BTreeMap<&'a str, &'a [StatValue]>,
}

impl<W: Write> TableWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_table(&mut self, table: &StatTable) -> Result<()> {
        let rows = table
            .entity_keys()
            .iter()
            .map(|key| (key.as_str(), table.values(key).unwrap_or_default()))
            .collect();

        let data = TableData {
            columns: table.columns(),
            keys: table.entity_keys(),
            rows,
        };

        let json = serde_json::to_string(&data)?;
        writeln!(self.writer, "const {TABLE_GLOBAL_NAME} = {json};")?;

        Ok(())
    }
}

pub(crate) struct DataEngine<'a> {
    path: &'a Path,
}

impl<'a> DataEngine<'a> {
    pub fn new(path: &'a Path) -> DataEngine<'a> {
        Self { path }
    }

    pub fn write(&self, slug: &str, table: &StatTable) -> Result<()> {
        if !self.path.exists() {
            fs::create_dir(self.path)?;
        }

        let file_path = self.path.join(format!("{slug}.js"));
        let file = File::create(file_path)?;
        let mut writer = TableWriter::new(file);

        writer.write_table(table)
    }
}
