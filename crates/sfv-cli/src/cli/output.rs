//! Terminal rendering: result table, summary line, progress on stderr.

use anyhow::Result;
use sfv_core::verify::{results_to_json, BatchSummary, VerificationResult, VerifyProgress};
use std::io::{self, IsTerminal};
use std::sync::mpsc::{self, Sender};
use std::thread;
use std::time::Instant;

const PROGRESS_INTERVAL_MS: u128 = 200;

/// Run `f` with a progress sender whose snapshots are drawn on stderr by a
/// background thread. No progress is drawn when stderr is not a terminal.
pub(crate) fn with_progress<T>(f: impl FnOnce(Option<Sender<VerifyProgress>>) -> T) -> T {
    if !io::stderr().is_terminal() {
        return f(None);
    }
    let (tx, rx) = mpsc::channel::<VerifyProgress>();
    let handle = thread::spawn(move || {
        let mut last_print: Option<Instant> = None;
        for p in rx {
            let due = last_print.map_or(true, |t| t.elapsed().as_millis() >= PROGRESS_INTERVAL_MS);
            if due || p.is_finished() {
                eprint!(
                    "\r  {}/{} files ({:.0}%)  {:.1} MiB  ",
                    p.files_done,
                    p.files_total,
                    p.fraction() * 100.0,
                    p.bytes_done as f64 / 1_048_576.0
                );
                last_print = Some(Instant::now());
            }
        }
        if last_print.is_some() {
            eprintln!();
        }
    });
    let out = f(Some(tx));
    if handle.join().is_err() {
        tracing::warn!("progress thread panicked");
    }
    out
}

/// One line per result: status tag, computed CRC, expected CRC, path.
pub(crate) fn format_result(r: &VerificationResult) -> String {
    let expected = r
        .expected_crc32
        .map(|e| format!("{e:08X}"))
        .unwrap_or_else(|| "--------".to_string());
    format!(
        "{:<3} {:08X} {} {}",
        r.status().label(),
        r.computed_crc32,
        expected,
        r.path.display()
    )
}

pub(crate) fn format_summary(s: &BatchSummary) -> String {
    format!(
        "{} file(s): {} ok, {} bad, {} not checked",
        s.total(),
        s.matched,
        s.mismatched,
        s.not_checked
    )
}

pub(crate) fn print_results(results: &[VerificationResult], json: bool) -> Result<()> {
    if json {
        println!("{}", results_to_json(results)?);
        return Ok(());
    }
    for r in results {
        println!("{}", format_result(r));
    }
    println!("{}", format_summary(&BatchSummary::from_results(results)));
    Ok(())
}
