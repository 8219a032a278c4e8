use std::fs;
use std::path::{Path, PathBuf};

fn collect_rs_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        if let Ok(read_dir) = fs::read_dir(&dir) {
            for entry in read_dir.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    stack.push(path);
                } else if path.extension().map(|e| e == "rs").unwrap_or(false) {
                    files.push(path);
                }
            }
        }
    }
    files
}

fn file_contains(path: &Path, needle: &str) -> bool {
    fs::read_to_string(path)
        .map(|c| c.contains(needle))
        .unwrap_or(false)
}

#[test]
fn notification_writes_only_from_notification_repo() {
    // The notification log is append-only and best-effort; every write must
    // funnel through the one repo function so callers cannot bypass the
    // self-fan-out suppression or the swallow-on-failure contract.
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");

    let mut offenders = Vec::new();
    for file in collect_rs_files(&src_root) {
        let path_str = file.to_string_lossy();
        if path_str.ends_with("db/notification_repo.rs") {
            continue;
        }
        if file_contains(&file, "INSERT INTO notifications") {
            offenders.push(path_str.to_string());
        }
    }

    if !offenders.is_empty() {
        panic!(
            "Notification writes must go through db::notification_repo only. Offenders: {:?}",
            offenders
        );
    }
}

#[test]
fn notification_log_is_never_edited_in_place() {
    // Only the bulk mark-all-read flip may UPDATE the notifications table.
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");

    let mut offenders = Vec::new();
    for file in collect_rs_files(&src_root) {
        let path_str = file.to_string_lossy();
        if path_str.ends_with("db/notification_repo.rs") {
            continue;
        }
        if file_contains(&file, "UPDATE notifications") {
            offenders.push(path_str.to_string());
        }
    }

    if !offenders.is_empty() {
        panic!(
            "Notification updates must go through db::notification_repo::mark_all_read only. Offenders: {:?}",
            offenders
        );
    }
}
