//! Subcommand implementations.

use std::path::PathBuf;

use anyhow::Context;
use tracing::{debug, info};

use m2o_catalog::{CatalogIndex, Matrix};
use m2o_export::{XlsxOptions, format_rows, write_csv, write_xlsx};
use m2o_ingest::{filter_market, load_template_columns, read_csv_table};
use m2o_model::{ResolvedItem, SelectionKey};
use m2o_session::{SelectionStore, ToggleOutcome, resolve};

use crate::cli::{CatalogArgs, FamiliesArgs, MatrixArgs, OutputFormatArg, RunArgs};
use crate::plan::{PlanAction, load_plan};
use crate::summary::print_matrix;

/// Outcome of a `run` invocation, fed to the summary printer.
pub struct RunResult {
    pub family: String,
    pub items: Vec<ResolvedItem>,
    /// Written output path; `None` on dry runs.
    pub output: Option<PathBuf>,
    /// Transient notices collected while applying the plan (cells with no
    /// catalog rows behind them, bulk-toggle counts).
    pub notices: Vec<String>,
}

fn load_catalog(args: &CatalogArgs) -> anyhow::Result<CatalogIndex> {
    let table = read_csv_table(&args.catalog)
        .with_context(|| format!("loading catalog {}", args.catalog.display()))?;
    let table = filter_market(table, &args.market);
    let index = CatalogIndex::load(&table).context("indexing catalog")?;
    info!(
        families = index.families_available().len(),
        market = %args.market,
        "catalog ready"
    );
    Ok(index)
}

pub fn run_families(args: &FamiliesArgs) -> anyhow::Result<()> {
    let index = load_catalog(&args.catalog)?;
    for family in index.families_available() {
        println!("{family}");
    }
    Ok(())
}

pub fn run_matrix(args: &MatrixArgs) -> anyhow::Result<()> {
    let index = load_catalog(&args.catalog)?;
    let matrix = Matrix::build(&index, &args.family);
    if matrix.is_empty() {
        println!("No selectable variants for family '{}'.", args.family);
        return Ok(());
    }
    print_matrix(&matrix);
    Ok(())
}

pub fn run_plan(args: &RunArgs) -> anyhow::Result<RunResult> {
    let index = load_catalog(&args.catalog)?;
    let plan = load_plan(&args.plan)?;
    let mut store = SelectionStore::new();
    store.set_active_family(&plan.family);

    let mut notices = Vec::new();
    for action in &plan.actions {
        apply_action(&index, &mut store, &plan.family, action, &mut notices)?;
    }

    let items = resolve(&index, &store);
    info!(
        family = %plan.family,
        selections = store.len(),
        resolved = items.len(),
        "plan applied"
    );

    let template_columns = match &args.template {
        Some(path) => load_template_columns(path)
            .with_context(|| format!("loading template {}", path.display()))?,
        None => Vec::new(),
    };
    let table = format_rows(&items, &index, &template_columns);

    let output = if args.dry_run {
        debug!("dry run; skipping output file");
        None
    } else {
        match args.format {
            OutputFormatArg::Xlsx => {
                let options = XlsxOptions {
                    sheet_name: args.sheet_name.clone(),
                };
                write_xlsx(&table, &args.output, &options)
                    .with_context(|| format!("writing {}", args.output.display()))?;
            }
            OutputFormatArg::Csv => {
                write_csv(&table, &args.output)
                    .with_context(|| format!("writing {}", args.output.display()))?;
            }
        }
        Some(args.output.clone())
    };

    Ok(RunResult {
        family: plan.family,
        items,
        output,
        notices,
    })
}

fn apply_action(
    index: &CatalogIndex,
    store: &mut SelectionStore,
    family: &str,
    action: &PlanAction,
    notices: &mut Vec<String>,
) -> anyhow::Result<()> {
    match action {
        PlanAction::ToggleCell {
            product,
            upholstery_type,
            upholstery_color,
            checked,
        } => {
            let outcome = store.toggle_cell(
                index,
                family,
                product,
                upholstery_type,
                upholstery_color,
                *checked,
            );
            if outcome == ToggleOutcome::NotFound {
                notices.push(format!(
                    "no catalog rows for {family} / {product} / {upholstery_type} / {upholstery_color}"
                ));
            }
        }
        PlanAction::ToggleColumn {
            upholstery_type,
            upholstery_color,
            checked,
        } => {
            let products = index.products_in(family);
            let changed = store.toggle_column(
                index,
                family,
                upholstery_type,
                upholstery_color,
                &products,
                *checked,
            );
            notices.push(format!(
                "{} {changed} selection(s) for column {upholstery_type} / {upholstery_color}",
                if *checked { "added" } else { "removed" }
            ));
        }
        PlanAction::SetBases {
            product,
            upholstery_type,
            upholstery_color,
            bases,
        } => {
            let key = SelectionKey::new(family, product, upholstery_type, upholstery_color);
            store
                .set_chosen_bases(&key, bases.clone())
                .with_context(|| format!("setting bases for {key}"))?;
        }
        PlanAction::FamilyBase { base, checked } => {
            let changed = store.toggle_family_base(family, base, *checked);
            notices.push(format!(
                "{} base '{base}' on {changed} selection(s)",
                if *checked { "added" } else { "removed" }
            ));
        }
    }
    Ok(())
}
