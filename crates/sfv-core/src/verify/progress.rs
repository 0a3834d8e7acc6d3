//! Progress snapshots for a verification batch.

/// Sent after every file of a batch, in completion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyProgress {
    /// Files finished so far (checksummed or skipped).
    pub files_done: usize,
    pub files_total: usize,
    /// Bytes read from files that were checksummed successfully.
    pub bytes_done: u64,
    /// Files dropped because they could not be read.
    pub skipped: usize,
}

impl VerifyProgress {
    /// Fraction complete in [0.0, 1.0].
    pub fn fraction(&self) -> f64 {
        if self.files_total == 0 {
            return 1.0;
        }
        (self.files_done as f64 / self.files_total as f64).min(1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.files_done >= self.files_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_of_empty_batch_is_complete() {
        let p = VerifyProgress {
            files_done: 0,
            files_total: 0,
            bytes_done: 0,
            skipped: 0,
        };
        assert_eq!(p.fraction(), 1.0);
        assert!(p.is_finished());
    }

    #[test]
    fn fraction_halfway() {
        let p = VerifyProgress {
            files_done: 2,
            files_total: 4,
            bytes_done: 10,
            skipped: 1,
        };
        assert!((p.fraction() - 0.5).abs() < 1e-9);
        assert!(!p.is_finished());
    }
}
