//! Output writers for simulation results.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::metrics::{CsvSummaryRow, GameMetrics};

pub struct OutputWriter {
    jsonl_writer: Box<dyn Write + Send>,
    csv_writer: Option<csv::Writer<BufWriter<File>>>,
    jsonl_path: Option<PathBuf>,
}

impl OutputWriter {
    /// JSON lines go to `output` (stdout when `None`), gzip-compressed when
    /// `compress` is set and a file is given.
    pub fn new(
        output: Option<&Path>,
        csv_path: Option<&Path>,
        compress: bool,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let (jsonl_writer, jsonl_path): (Box<dyn Write + Send>, _) = match output {
            Some(path) if compress => {
                let gz_path = if path.extension().is_some_and(|e| e == "gz") {
                    path.to_path_buf()
                } else {
                    let mut name = path.as_os_str().to_owned();
                    name.push(".gz");
                    PathBuf::from(name)
                };
                let file = File::create(&gz_path)?;
                (
                    Box::new(BufWriter::new(GzEncoder::new(file, Compression::default()))),
                    Some(gz_path),
                )
            }
            Some(path) => (
                Box::new(BufWriter::new(File::create(path)?)),
                Some(path.to_path_buf()),
            ),
            None => (Box::new(io::stdout()), None),
        };

        let csv_writer = match csv_path {
            Some(path) => Some(csv::Writer::from_writer(BufWriter::new(File::create(path)?))),
            None => None,
        };

        Ok(Self {
            jsonl_writer,
            csv_writer,
            jsonl_path,
        })
    }

    pub fn write_game(&mut self, metrics: &GameMetrics) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string(metrics)?;
        writeln!(self.jsonl_writer, "{json}")?;

        if let Some(writer) = self.csv_writer.as_mut() {
            writer.serialize(CsvSummaryRow::from(metrics))?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.jsonl_writer.flush()?;
        if let Some(writer) = self.csv_writer.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }

    pub fn jsonl_path(&self) -> Option<&PathBuf> {
        self.jsonl_path.as_ref()
    }
}
