//! Command implementations.
//!
//! Each function returns the wire payload the matching backend endpoint
//! would serialize, so `main` only has to print it.

use crate::args::GenSettings;
use anyhow::Context;
use mart_generator::{clamp_row_count, DirtyConfig, Generator};
use mart_jobstore::notify::NOTIFICATIONS_FILE;
use mart_jobstore::{routing, JobPlan, JobStore, NotificationStore};
use mart_populate::{jsonl, CsvExporter};
use mart_types::wire::{
    CleanDataResponse, JobReceipt, NotificationList, ParentJobList, TableRows, WriteReport,
};
use mart_types::Table;
use rand::Rng;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// Build a generator from resolved settings.
///
/// Seed 0 means "surprise me": a seed is drawn from OS entropy and logged so
/// the run can still be reproduced.
fn build_generator(settings: &GenSettings) -> anyhow::Result<Generator> {
    if !(0.0..=1.0).contains(&settings.dirty_rate) {
        anyhow::bail!("--dirty-rate must be in [0, 1], got {}", settings.dirty_rate);
    }

    let seed = if settings.seed == 0 {
        let seed: u64 = rand::rng().random();
        info!(seed, "seed drawn from OS entropy");
        seed
    } else {
        settings.seed
    };

    Ok(Generator::new(seed).with_dirty(DirtyConfig::new(settings.dirty_rate)))
}

/// Clamp the requested count, logging when the request was out of range.
fn effective_count(requested: u64) -> u64 {
    let count = clamp_row_count(requested);
    if count != requested {
        warn!(requested, clamped = count, "row count clamped");
    }
    count
}

fn checked_batch_size(batch_size: u64) -> anyhow::Result<u64> {
    if batch_size == 0 {
        anyhow::bail!("--batch-size must be at least 1");
    }
    Ok(batch_size)
}

/// Bulk-generate into a fresh job folder of chunked JSONL files.
pub fn run_generate(settings: &GenSettings, dry_run: bool) -> anyhow::Result<JobReceipt> {
    let count = effective_count(settings.count);
    let plan = JobPlan::new(count, checked_batch_size(settings.batch_size)?);

    if dry_run {
        info!(
            parent_job_id = %plan.parent_job_id,
            total_chunks = plan.total_chunks(),
            "dry run, nothing written"
        );
        return Ok(plan.receipt("planned"));
    }

    let store = JobStore::new(&settings.out_dir);
    store
        .prepare_folder(&plan.parent_job_id)
        .with_context(|| format!("Failed to create job folder in {:?}", settings.out_dir))?;

    let mut generator = build_generator(settings)?;
    let started = Instant::now();
    for chunk in &plan.chunks {
        let sets = generator.record_sets(chunk.count)?;
        let path = store.chunk_path(&plan.parent_job_id, &chunk.job_id);
        jsonl::write_chunk(&path, &sets)?;
        info!(job_id = %chunk.job_id, count = chunk.count, "chunk written");
    }
    info!(
        parent_job_id = %plan.parent_job_id,
        record_sets = count,
        elapsed = ?started.elapsed(),
        "generation job completed"
    );

    let inbox = NotificationStore::new(settings.out_dir.join(NOTIFICATIONS_FILE));
    inbox.save(
        &format!(
            "Generation job {} completed ({count} record sets)",
            plan.parent_job_id
        ),
        "completed",
        Some(&plan.parent_job_id),
    )?;

    Ok(plan.receipt("completed"))
}

/// Print record sets to stdout as pretty JSON.
pub fn run_print(settings: &GenSettings) -> anyhow::Result<()> {
    let count = effective_count(settings.count);
    let mut generator = build_generator(settings)?;

    for _ in 0..count {
        let set = generator.record_set()?;
        println!("{}", serde_json::to_string_pretty(&set)?);
    }
    Ok(())
}

/// Synchronous generate-and-export to per-table CSV files, with the
/// generation/commit timing split.
pub fn run_export(settings: &GenSettings, to: &Path) -> anyhow::Result<WriteReport> {
    let count = effective_count(settings.count);
    let mut generator = build_generator(settings)?;

    let gen_start = Instant::now();
    let sets = generator.record_sets(count)?;
    let generation_time = gen_start.elapsed().as_secs_f64();

    let metrics = CsvExporter::new(to)
        .export(&sets)
        .with_context(|| format!("Failed to export CSV to {to:?}"))?;

    let all_messages: Vec<String> = sets
        .iter()
        .map(|set| format!("your user name is : {}", set.user.username))
        .collect();
    let all_user_ids: Vec<String> = sets.iter().map(|set| set.user.id.clone()).collect();

    Ok(WriteReport {
        success: true,
        message: all_messages.last().cloned().unwrap_or_default(),
        user_id: all_user_ids.last().cloned(),
        all_messages,
        all_user_ids,
        generation_time,
        commit_time: metrics.write_duration.as_secs_f64(),
    })
}

/// List known job folders.
pub fn jobs_list(out_dir: &Path) -> anyhow::Result<ParentJobList> {
    let store = JobStore::new(out_dir);
    Ok(ParentJobList {
        success: true,
        parent_job_ids: store.list_parent_jobs()?,
    })
}

/// Fetch one table's rows out of a job folder (capped at 100 rows).
pub fn jobs_show(out_dir: &Path, parent_job_id: &str, table: Table) -> anyhow::Result<TableRows> {
    let store = JobStore::new(out_dir);
    let rows = store.fetch_table(parent_job_id, table)?;
    Ok(TableRows::new(table.as_str(), rows))
}

/// Delete a job folder and everything in it.
pub fn jobs_delete(out_dir: &Path, parent_job_id: &str) -> anyhow::Result<()> {
    let store = JobStore::new(out_dir);
    store.delete_folder(parent_job_id)?;
    Ok(())
}

/// Decide cleanup routing for a row count.
pub fn run_route(
    count: u64,
    batch_size: u64,
    parent_job_id: Option<String>,
) -> anyhow::Result<CleanDataResponse> {
    let count = effective_count(count);
    let mut plan = JobPlan::new(count, checked_batch_size(batch_size)?);
    if let Some(id) = parent_job_id {
        plan.parent_job_id = id;
    }
    Ok(routing::clean_response(&plan))
}

/// List unread notifications, newest first.
pub fn notifications_list(out_dir: &Path) -> anyhow::Result<NotificationList> {
    let inbox = NotificationStore::new(out_dir.join(NOTIFICATIONS_FILE));
    Ok(NotificationList {
        success: true,
        notifications: inbox.unread()?,
    })
}

/// Acknowledge (delete) one notification.
pub fn notifications_ack(out_dir: &Path, id: &str) -> anyhow::Result<()> {
    let inbox = NotificationStore::new(out_dir.join(NOTIFICATIONS_FILE));
    if !inbox.ack(id)? {
        anyhow::bail!("Notification not found: {id}");
    }
    Ok(())
}
