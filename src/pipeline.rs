//! The unify action, shared by the desktop window and the command line tool.
//!
//! A run walks select -> load -> merge -> save. Each stage either hands its
//! result to the next one or ends the run with an [`Outcome`]; failures are
//! logged where they are caught and carried in the outcome.

use crate::config::{UnifyConfig, OUTPUT_SUFFIX};
use crate::loader::load_table;
use crate::merger::merge_tables;
use crate::outcome::Outcome;
use crate::selector::select_files;
use crate::table::{MergedTable, RawTable};
use crate::writer::save_result;
use crate::UnifyError;
use chrono::{Local, NaiveDateTime};

enum Step {
    Select,
    Load(Vec<String>),
    Merge(Vec<RawTable>),
    Save(MergedTable),
    Done(Outcome),
}

impl Step {
    fn name(&self) -> &'static str {
        match self {
            Step::Select => "selecting",
            Step::Load(_) => "loading",
            Step::Merge(_) => "merging",
            Step::Save(_) => "saving",
            Step::Done(_) => "done",
        }
    }
}

/// Run the whole unify action on `config.directory`, stamping with local time.
pub fn unify(config: &UnifyConfig) -> Outcome {
    unify_at(config, || Local::now().naive_local())
}

/// Run the unify action with `clock` supplying the save timestamp.
///
/// The clock is read once, when the save stage starts.
pub fn unify_at(config: &UnifyConfig, clock: impl Fn() -> NaiveDateTime) -> Outcome {
    let mut step = Step::Select;
    loop {
        log::info!("Unify {}: {}", config.directory.display(), step.name());
        step = match step {
            Step::Select => select(config),
            Step::Load(files) => load(config, &files),
            Step::Merge(tables) => merge(&tables),
            Step::Save(table) => save(config, table, clock()),
            Step::Done(outcome) => {
                match outcome.error() {
                    Some(err) => log::warn!("{}: {}", outcome.message(), err),
                    None => log::info!("{}", outcome.message()),
                }
                return outcome;
            }
        };
    }
}

/// Whether `name` is a workbook written by a previous run.
///
/// Generated workbooks share the export prefix, so they would otherwise be
/// picked up as inputs on the next run.
pub fn is_generated_output(name: &str) -> bool {
    name.ends_with(&format!(" - {}", OUTPUT_SUFFIX))
}

fn select(config: &UnifyConfig) -> Step {
    let files = match select_files(&config.directory, &config.file_prefix, &config.file_marker) {
        Ok(files) => files,
        Err(e) => {
            log::error!("File selection failed: {}", e);
            return Step::Done(Outcome::NoFilesFound(Some(e)));
        }
    };

    let (previous, files): (Vec<String>, Vec<String>) =
        files.into_iter().partition(|name| is_generated_output(name));
    for name in &previous {
        log::info!("Skipping previously generated workbook {}", name);
    }

    if files.is_empty() {
        Step::Done(Outcome::NoFilesFound(None))
    } else {
        log::info!("Found {} export(s)", files.len());
        Step::Load(files)
    }
}

fn load(config: &UnifyConfig, files: &[String]) -> Step {
    let mut tables = Vec::with_capacity(files.len());
    let mut first_error = None;

    for name in files {
        let result = load_table(&config.directory, name, &config.load).and_then(|table| {
            if table.is_empty() {
                Err(UnifyError::EmptyResult(format!("{}: no data rows", name)))
            } else {
                Ok(table)
            }
        });
        match result {
            Ok(table) => tables.push(table),
            Err(e) => {
                log::error!("Failed to load {}: {}", name, e);
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }

    match first_error {
        Some(e) => Step::Done(Outcome::LoadFailed(e)),
        None => Step::Merge(tables),
    }
}

fn merge(tables: &[RawTable]) -> Step {
    match merge_tables(tables) {
        Ok(merged) => Step::Save(merged),
        Err(e) => {
            log::error!("Merge failed: {}", e);
            Step::Done(Outcome::MergeFailed(e))
        }
    }
}

fn save(config: &UnifyConfig, table: MergedTable, now: NaiveDateTime) -> Step {
    match save_result(table, &config.directory, &config.base_name, now) {
        Ok(path) => Step::Done(Outcome::Saved(path)),
        Err(e) => {
            log::error!("Save failed: {}", e);
            Step::Done(Outcome::SaveFailed(e))
        }
    }
}
