use mdu_core::{
    AccessFailure, EntryKind, FailureKind, FileRecord, SizePolicy, UsageConfig, WalkStats,
    join_entry,
};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_stats_counting() {
    let mut stats = WalkStats::new();
    stats.record(EntryKind::File);
    stats.record(EntryKind::File);
    stats.record(EntryKind::Directory);
    stats.record(EntryKind::Symlink);
    stats.record(EntryKind::Other);
    stats.record_failure();

    assert_eq!(stats.files, 2);
    assert_eq!(stats.dirs, 1);
    assert_eq!(stats.symlinks, 1);
    assert_eq!(stats.others, 1);
    assert_eq!(stats.failures, 1);
    assert_eq!(stats.entries(), 5);
}

#[test]
fn test_config_stat_and_measure() {
    let temp = TempDir::new().unwrap();
    let file = join_entry(temp.path(), OsStr::new("a.txt"));
    fs::write(&file, "hello").unwrap();

    let config = UsageConfig::builder().apparent_size(true).build().unwrap();
    let metadata = config.stat(&file).unwrap();
    let record = FileRecord::from_metadata(&metadata, config.size_policy());

    assert_eq!(record.kind, EntryKind::File);
    assert_eq!(record.size, 5);
}

#[test]
fn test_apparent_and_allocated_diverge_for_unaligned_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("odd.bin");
    fs::write(&file, vec![1u8; 1234]).unwrap();

    let metadata = fs::symlink_metadata(&file).unwrap();
    let apparent = SizePolicy::Apparent.measure(&metadata);
    let allocated = SizePolicy::Allocated.measure(&metadata);

    assert_eq!(apparent, 1234);
    assert_ne!(apparent, allocated);
}

#[cfg(unix)]
#[test]
fn test_follow_symlinks_changes_stat() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("target")).unwrap();
    let link = temp.path().join("link");
    std::os::unix::fs::symlink(temp.path().join("target"), &link).unwrap();

    let lstat = UsageConfig::new().stat(&link).unwrap();
    assert_eq!(EntryKind::from_file_type(lstat.file_type()), EntryKind::Symlink);

    let follow = UsageConfig::builder().follow_symlinks(true).build().unwrap();
    let stat = follow.stat(&link).unwrap();
    assert_eq!(EntryKind::from_file_type(stat.file_type()), EntryKind::Directory);
}

#[test]
fn test_access_failure_from_stat() {
    let path = Path::new("no/such/entry");
    let err = UsageConfig::new().stat(path).unwrap_err();
    let failure = AccessFailure::stat(path, err);

    assert_eq!(failure.kind, FailureKind::Stat);
    assert!(failure.is_not_found());
    assert!(failure.to_string().starts_with("no/such/entry: "));
}
