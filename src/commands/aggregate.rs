use crate::core::{aggregate, group_sums, AggregateMode};
use crate::io::{self, AggregateReport};
use anyhow::Result;
use std::path::PathBuf;

pub struct AggregateConfig {
    pub path: PathBuf,
    pub mode: AggregateMode,
    pub format: crate::io::output::OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn handle_aggregate(config: AggregateConfig) -> Result<()> {
    let input = io::read_input(&config.path)?;
    let sums = group_sums(&input)?;
    log::debug!("aggregated {} groups from {}", sums.len(), config.path.display());

    let total = aggregate(&sums, config.mode);
    let report = build_report(&sums, config.mode, total);

    write_report(&report, config.format, config.output.as_deref())
}

fn build_report(sums: &[i64], mode: AggregateMode, total: i64) -> AggregateReport {
    let (mode_name, top) = match mode {
        AggregateMode::Max => ("max", None),
        AggregateMode::Top(k) => ("top", Some(k)),
    };
    AggregateReport {
        mode: mode_name.to_string(),
        top,
        group_count: sums.len(),
        group_sums: sums.to_vec(),
        total,
    }
}

fn write_report(
    report: &AggregateReport,
    format: crate::io::output::OutputFormat,
    output: Option<&std::path::Path>,
) -> Result<()> {
    let destination: Box<dyn std::io::Write> = match output {
        Some(path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(std::io::stdout()),
    };
    let mut writer = io::create_writer(format, destination);
    writer.write_aggregate(report)
}
