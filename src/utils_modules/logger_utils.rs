use crate::common::*;

#[doc = "Log line format: `[timestamp] [LEVEL] message`"]
fn log_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        record.args()
    )
}

#[doc = r#"
    Installs the global logger: daily-rotated files under `logs/`, duplicated
    to stdout, keeping one week of history.

    # Panics
    When logger initialization fails; the application cannot run unlogged.
"#]
pub fn set_global_logger() {
    let handle = Logger::try_with_str("info")
        .unwrap_or_else(|e| panic!("[logger_utils->set_global_logger] invalid log spec: {:?}", e))
        .log_to_file(FileSpec::default().directory("logs"))
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(7),
        )
        .duplicate_to_stdout(Duplicate::All)
        .format(log_format)
        .start()
        .unwrap_or_else(|e| {
            panic!(
                "[logger_utils->set_global_logger] Logger initialization failed: {:?}",
                e
            )
        });

    /* Dropping the handle would shut the logger down; it must live as long
    as the process. */
    std::mem::forget(handle);
}
