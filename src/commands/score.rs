use crate::core::{score_rounds, TableVariant};
use crate::io::{self, ScoreReport};
use anyhow::Result;
use std::path::PathBuf;

pub struct ScoreConfig {
    pub path: PathBuf,
    pub table: TableVariant,
    pub format: crate::io::output::OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn handle_score(config: ScoreConfig) -> Result<()> {
    let input = io::read_input(&config.path)?;
    let rounds = input.lines().count();
    let total = score_rounds(&input, config.table.table())?;
    log::debug!("scored {} rounds from {}", rounds, config.path.display());

    let report = ScoreReport {
        table: table_name(config.table).to_string(),
        rounds,
        total,
    };

    write_report(&report, config.format, config.output.as_deref())
}

fn table_name(table: TableVariant) -> &'static str {
    match table {
        TableVariant::Move => "move",
        TableVariant::Outcome => "outcome",
    }
}

fn write_report(
    report: &ScoreReport,
    format: crate::io::output::OutputFormat,
    output: Option<&std::path::Path>,
) -> Result<()> {
    let destination: Box<dyn std::io::Write> = match output {
        Some(path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(std::io::stdout()),
    };
    let mut writer = io::create_writer(format, destination);
    writer.write_score(report)
}
