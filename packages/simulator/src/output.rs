//! Output writers for simulation results.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::metrics::{CsvSummaryRow, GameMetrics};
use crate::types::OutputFormat;

pub struct OutputWriter {
    games_writer: Option<Box<dyn Write + Send>>,
    format: OutputFormat,
    buffered: Vec<GameMetrics>,
    csv_writer: Option<csv::Writer<BufWriter<File>>>,
    games_path: PathBuf,
    csv_path: PathBuf,
}

impl OutputWriter {
    pub fn new(
        output_dir: &Path,
        format: &OutputFormat,
        compress: bool,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        std::fs::create_dir_all(output_dir)?;

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");

        let extension = match format {
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Json => "json",
        };
        let filename = format!("simulation_{}.{}", timestamp, extension);

        let (games_writer, games_path): (Box<dyn Write + Send>, PathBuf) = if compress {
            let gz_path = output_dir.join(format!("{}.gz", filename));
            let writer: Box<dyn Write + Send> = Box::new(BufWriter::new(GzEncoder::new(
                File::create(&gz_path)?,
                Compression::default(),
            )));
            (writer, gz_path)
        } else {
            let path = output_dir.join(&filename);
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&path)?;
            let writer: Box<dyn Write + Send> = Box::new(BufWriter::new(file));
            (writer, path)
        };

        // Always create CSV summary
        let csv_path = output_dir.join(format!("simulation_{}_summary.csv", timestamp));
        let csv_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&csv_path)?;
        let csv_writer = csv::Writer::from_writer(BufWriter::new(csv_file));

        Ok(Self {
            games_writer: Some(games_writer),
            format: format.clone(),
            buffered: Vec::new(),
            csv_writer: Some(csv_writer),
            games_path,
            csv_path,
        })
    }

    pub fn write_game(&mut self, metrics: &GameMetrics) -> Result<(), Box<dyn std::error::Error>> {
        match self.format {
            OutputFormat::Jsonl => {
                if let Some(ref mut writer) = self.games_writer {
                    let json = serde_json::to_string(metrics)?;
                    writeln!(writer, "{}", json)?;
                    writer.flush()?;
                }
            }
            OutputFormat::Json => self.buffered.push(metrics.clone()),
        }

        // Header row comes from the first serialized record
        if let Some(ref mut writer) = self.csv_writer {
            let row: CsvSummaryRow = metrics.into();
            writer.serialize(&row)?;
            writer.flush()?;
        }

        Ok(())
    }

    /// Flush everything; a gzip stream is only complete once this returns.
    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(mut writer) = self.games_writer.take() {
            if matches!(self.format, OutputFormat::Json) {
                serde_json::to_writer_pretty(&mut writer, &self.buffered)?;
                writeln!(writer)?;
            }
            writer.flush()?;
        }
        if let Some(ref mut writer) = self.csv_writer {
            writer.flush()?;
        }
        Ok(())
    }

    pub fn output_paths(&self) -> (&Path, &Path) {
        (&self.games_path, &self.csv_path)
    }
}
