use botsweep_core::{SweepError, SweepResult};

/// In-memory roster: header row plus data rows, all cells as strings.
/// Column and row order are preserved exactly as read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Roster {
    pub fn from_csv_path(path: &str) -> SweepResult<Self> {
        let mut reader =
            csv::Reader::from_path(path).map_err(|e| SweepError::Table(e.to_string()))?;

        let headers = reader
            .headers()
            .map_err(|e| SweepError::Table(e.to_string()))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| SweepError::Table(e.to_string()))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of one named column, top to bottom. Short rows yield empty
    /// cells rather than an error.
    pub fn column(&self, name: &str) -> SweepResult<Vec<String>> {
        let idx = self
            .headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| SweepError::Table(format!("column not found: {}", name)))?;

        Ok(self
            .rows
            .iter()
            .map(|row| row.get(idx).cloned().unwrap_or_default())
            .collect())
    }

    /// Append one value per existing row. Rejects a length mismatch so a
    /// result column can never silently shift against its rows.
    pub fn append_column(&mut self, name: &str, values: &[String]) -> SweepResult<()> {
        if values.len() != self.rows.len() {
            return Err(SweepError::Table(format!(
                "column {} has {} values for {} rows",
                name,
                values.len(),
                self.rows.len()
            )));
        }

        self.headers.push(name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value.clone());
        }
        Ok(())
    }

    pub fn write_csv_path(&self, path: &str) -> SweepResult<()> {
        let mut writer =
            csv::Writer::from_path(path).map_err(|e| SweepError::Table(e.to_string()))?;

        writer
            .write_record(&self.headers)
            .map_err(|e| SweepError::Table(e.to_string()))?;
        for row in &self.rows {
            writer
                .write_record(row)
                .map_err(|e| SweepError::Table(e.to_string()))?;
        }
        writer.flush()?;
        Ok(())
    }
}
