use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use mondrian_engine::anonymize;
use mondrian_ingest::{LoadOptions, load_csv};
use mondrian_model::{AnonymizeOptions, Strategy};
use mondrian_output::write_csv;

use crate::cli::Cli;
use crate::types::RunSummary;

/// Run the full pipeline: load, partition, generalize, write, summarize.
pub fn run_anonymize(args: &Cli) -> Result<RunSummary> {
    let started = Instant::now();
    let span = info_span!("anonymize", input = %args.input.display());
    let _guard = span.enter();

    let dataset = load_csv(
        &args.input,
        LoadOptions {
            has_header: args.has_header,
        },
    )
    .with_context(|| format!("load {}", args.input.display()))?;
    info!(records = dataset.len(), "input loaded");

    let strategy = Strategy::from(args.strategy);
    let options = AnonymizeOptions::new(args.qids.clone(), args.k).with_strategy(strategy);
    let result = anonymize(&dataset, &options).context("anonymize")?;

    if args.dry_run {
        info!("dry run, skipping output");
    } else {
        let written = write_csv(&args.output, dataset.header(), result.records())
            .with_context(|| format!("write {}", args.output.display()))?;
        info!(records = written, output = %args.output.display(), "output written");
    }

    let sizes: Vec<usize> = result.groups().iter().map(Vec::len).collect();
    Ok(RunSummary {
        input: args.input.clone(),
        output: (!args.dry_run).then(|| args.output.clone()),
        strategy,
        k: args.k,
        records: result.record_count(),
        groups: result.group_count(),
        smallest_group: sizes.iter().copied().min().unwrap_or(0),
        largest_group: sizes.iter().copied().max().unwrap_or(0),
        elapsed: started.elapsed(),
    })
}
