//! Checksum verification: classify computed CRCs against a manifest and
//! run batches of files, sequentially or on worker threads.

mod batch;
mod progress;
mod result;
mod status;

pub use batch::{verify_batch, verify_batch_with, verify_one, VerifyOptions};
pub use progress::VerifyProgress;
pub use result::{results_to_json, BatchSummary, VerificationResult};
pub use status::{classify, Status};
