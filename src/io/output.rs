use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

/// Result of an `aggregate` run, serializable for the JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateReport {
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<usize>,
    pub group_count: usize,
    pub group_sums: Vec<i64>,
    pub total: i64,
}

/// Result of a `score` run, serializable for the JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub table: String,
    pub rounds: usize,
    pub total: u64,
}

pub trait OutputWriter {
    fn write_aggregate(&mut self, report: &AggregateReport) -> anyhow::Result<()>;
    fn write_score(&mut self, report: &ScoreReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: Serialize>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_aggregate(&mut self, report: &AggregateReport) -> anyhow::Result<()> {
        self.write_json(report)
    }

    fn write_score(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        self.write_json(report)
    }
}

/// Terminal format is the bare result integer, nothing else, so the output
/// stays pipeline-friendly.
pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_aggregate(&mut self, report: &AggregateReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", report.total)?;
        Ok(())
    }

    fn write_score(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", report.total)?;
        Ok(())
    }
}

pub fn create_writer(format: OutputFormat, destination: Box<dyn Write>) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(destination)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(destination)),
    }
}
