//! FILENAME: app/src/main.rs
//! CLI entry point: fetch records, build the pivot report, export it.

use std::path::PathBuf;
use std::process::ExitCode;

use app::source::{RecordSource, DEFAULT_PAGE_SIZE};
use app::{build_report, AppError};
use clap::{Parser, ValueEnum};
use export::{save_csv, save_xlsx, ExportColumns};
use report_engine::{MeasureField, ReportDefinition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Xlsx,
    Csv,
}

/// Fetches flat employee performance records and exports them as a
/// multi-level pivot report with summed measures.
#[derive(Debug, Parser)]
#[command(name = "pivot-report", version)]
struct Args {
    /// Records endpoint (answers `{ "items": [...] }` with take/skip paging).
    #[arg(long)]
    url: String,

    /// Page size for the records endpoint.
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    take: u32,

    /// Grouping fields, outer to inner.
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "loc_name,group_name,name"
    )]
    group_by: Vec<String>,

    /// Measure fields to sum at every group level.
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "aht_1,aht_2,aht_3,aht_4,cc_1,cc_2,cc_3,cc_4,nn_1,nn_2,nn_3,nn_4"
    )]
    measures: Vec<String>,

    /// Output file path.
    #[arg(long, default_value = "report.xlsx")]
    out: PathBuf,

    /// Output file format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Xlsx)]
    format: OutputFormat,
}

async fn run(args: Args) -> Result<(), AppError> {
    let source = RecordSource::new(args.url, args.take);
    let records = source.fetch_all().await?;
    log::info!("fetched {} records", records.len());

    let definition = ReportDefinition::new(
        args.group_by,
        args.measures.iter().map(|m| MeasureField::sum(m.as_str())).collect(),
    );
    let rows = build_report(records, &definition)?;

    let columns = ExportColumns::new(args.measures);
    match args.format {
        OutputFormat::Xlsx => save_xlsx(&rows, &columns, &args.out)?,
        OutputFormat::Csv => save_csv(&rows, &columns, &args.out)?,
    }
    log::info!("wrote {} rows to {}", rows.len(), args.out.display());

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
