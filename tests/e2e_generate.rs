//! End-to-end test for the generate → browse → delete flow.

use fakemart::args::GenSettings;
use fakemart::run;
use mart_types::Table;
use std::path::PathBuf;

fn settings(out_dir: PathBuf, count: u64, batch_size: u64) -> GenSettings {
    GenSettings {
        count,
        seed: 42,
        batch_size,
        dirty_rate: 0.0,
        out_dir,
    }
}

#[test]
fn test_generate_browse_delete_e2e() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("data");

    // 120 record sets in chunks of 50 -> 3 chunk files
    let receipt = run::run_generate(&settings(out.clone(), 120, 50), false).unwrap();
    assert_eq!(receipt.status, "completed");
    assert_eq!(receipt.total_count, 120);
    assert_eq!(receipt.batch_size, 50);
    assert_eq!(receipt.total_chunks, 3);
    assert_eq!(receipt.job_ids.len(), 3);

    // Folder layout: one directory per parent job, one file per chunk
    let folder = out.join(&receipt.parent_job_id);
    let chunk_files: Vec<_> = std::fs::read_dir(&folder)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(chunk_files.len(), 3);
    for job_id in &receipt.job_ids {
        assert!(folder.join(format!("{job_id}.jsonl")).exists());
    }

    // The folder shows up in the listing
    let folders = run::jobs_list(&out).unwrap();
    assert_eq!(folders.parent_job_ids, vec![receipt.parent_job_id.clone()]);

    // Fetching a table is capped at 100 rows even though 120 were written
    let rows = run::jobs_show(&out, &receipt.parent_job_id, Table::ProductsSku).unwrap();
    let skus = rows.rows["products_sku"].as_array().unwrap();
    assert_eq!(skus.len(), 100);

    // Every fetched SKU row looks like a real SKU
    for sku in skus {
        let id = sku["id"].as_str().unwrap();
        assert_eq!(id.split('-').count(), 4);
        assert!(sku["quantity"].as_i64().unwrap() >= 0);
    }

    // Completion landed in the inbox and can be acknowledged
    let inbox = run::notifications_list(&out).unwrap();
    assert_eq!(inbox.notifications.len(), 1);
    assert_eq!(
        inbox.notifications[0].parent_job_id.as_deref(),
        Some(receipt.parent_job_id.as_str())
    );
    run::notifications_ack(&out, &inbox.notifications[0].id).unwrap();
    assert!(run::notifications_list(&out).unwrap().notifications.is_empty());

    // Deleting the folder empties the listing and further fetches fail
    run::jobs_delete(&out, &receipt.parent_job_id).unwrap();
    assert!(run::jobs_list(&out).unwrap().parent_job_ids.is_empty());
    assert!(run::jobs_show(&out, &receipt.parent_job_id, Table::User).is_err());
}

#[test]
fn test_out_of_range_count_is_clamped_not_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("data");

    let receipt = run::run_generate(&settings(out, 0, 1000), true).unwrap();
    assert_eq!(receipt.total_count, 1);
    assert_eq!(receipt.total_chunks, 1);
}

#[test]
fn test_export_reports_timing_split() {
    let dir = tempfile::tempdir().unwrap();
    let to = dir.path().join("export");

    let report = run::run_export(&settings(dir.path().join("data"), 4, 1000), &to).unwrap();
    assert!(report.success);
    assert_eq!(report.all_user_ids.len(), 4);
    assert!(report.message.starts_with("your user name is : "));
    assert!(report.generation_time >= 0.0);
    assert!(report.commit_time > 0.0);

    // One CSV file per table, each with header + 4 rows
    for table in Table::ALL {
        let content = std::fs::read_to_string(to.join(format!("{table}.csv"))).unwrap();
        assert_eq!(content.lines().count(), 5, "{table}.csv");
    }
}
