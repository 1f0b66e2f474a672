use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use txn_ingest::read_transactions;
use txn_model::{JobConfig, OUTPUT_COLUMNS, RAW_COLUMNS, columns};
use txn_output::write_transactions;
use txn_transform::{normalize_records, suspicious_count};

use crate::cli::RunArgs;
use crate::summary::apply_table_style;
use crate::types::JobResult;

/// List the raw input schema and the output projection.
pub fn run_schema() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Column", "Description"]);
    apply_table_style(&mut table);
    for name in RAW_COLUMNS {
        table.add_row(vec![name, column_description(name)]);
    }
    println!("Input columns:");
    println!("{table}");

    let mut projection = Table::new();
    projection.set_header(vec!["Column", "Description"]);
    apply_table_style(&mut projection);
    for name in OUTPUT_COLUMNS {
        projection.add_row(vec![name, column_description(name)]);
    }
    println!();
    println!("Output projection (in order):");
    println!("{projection}");
    Ok(())
}

fn column_description(name: &str) -> &'static str {
    match name {
        columns::TRANSACTION_ID => "Transaction identifier",
        columns::CUSTOMER_ID => "Customer identifier",
        columns::ACCOUNT_ID => "Account identifier",
        columns::TRANSACTION_DATE => "Transaction timestamp, passed through verbatim",
        columns::TRANSACTION_TYPE => "Transaction type, passed through verbatim",
        columns::AMOUNT => "Transaction amount; null or unparseable becomes 0.0",
        columns::CURRENCY => "Currency code, passed through verbatim",
        columns::DESCRIPTION => "Free text; the literal \"NULL\" becomes absent",
        columns::COUNTRY_CODE => "Raw country code, mapped to country_name",
        columns::ACCOUNT_TYPE => "Raw account type, mapped to account_type_standardized",
        columns::COUNTRY_NAME => "Country name derived from country_code",
        columns::ACCOUNT_TYPE_STANDARDIZED => "Standardized account type label",
        columns::IS_SUSPICIOUS => "True when the normalized amount exceeds 5000",
        _ => "",
    }
}

/// Execute the cleansing job: ingest, normalize, write, in that order.
/// Fails without touching the destination if any stage errors.
pub fn run_job(args: &RunArgs) -> Result<JobResult> {
    let config = JobConfig::new(&args.job_name);
    let job_span = info_span!("job", job_name = %config.job_name);
    let _job_guard = job_span.enter();

    let ingest_span = info_span!("ingest", input = %config.input_path.display());
    let ingest_start = Instant::now();
    let raw = ingest_span
        .in_scope(|| read_transactions(&config.input_path))
        .with_context(|| {
            format!(
                "read raw transactions from {}",
                config.input_path.display()
            )
        })?;
    let rows_read = raw.height();
    info!(
        rows = rows_read,
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let transform_span = info_span!("normalize");
    let transform_start = Instant::now();
    let mut cleaned = transform_span
        .in_scope(|| normalize_records(&raw))
        .context("normalize transaction records")?;
    let suspicious = suspicious_count(&cleaned).context("count flagged records")?;
    info!(
        rows = cleaned.height(),
        suspicious,
        duration_ms = transform_start.elapsed().as_millis(),
        "normalization complete"
    );

    let output_span = info_span!("output", output = %config.output_path.display());
    let output_start = Instant::now();
    output_span
        .in_scope(|| write_transactions(&mut cleaned, &config.output_path))
        .with_context(|| {
            format!(
                "write cleansed transactions to {}",
                config.output_path.display()
            )
        })?;
    info!(
        rows = cleaned.height(),
        duration_ms = output_start.elapsed().as_millis(),
        "output complete"
    );

    Ok(JobResult {
        job_name: config.job_name,
        input_path: config.input_path,
        output_path: config.output_path,
        rows_read,
        rows_written: cleaned.height(),
        suspicious,
    })
}
