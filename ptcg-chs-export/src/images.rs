//! Card image export.
//!
//! Every numbered card's image is copied from the dataset to
//! `<out>/img/<set_symbol>/<card_no>.png`. A missing source image is logged
//! and counted; it never stops the export.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ptcg_chs_core::Catalog;
use tokio::sync::mpsc;

/// Longest a single copy may take before it is reported as timed out.
const COPY_TIMEOUT: Duration = Duration::from_secs(60);

/// One copy to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageJob {
    pub src: PathBuf,
    pub dst: PathBuf,
}

#[derive(Debug)]
pub enum ImageOutcome {
    Copied(ImageJob),
    Missing(ImageJob),
    Failed(ImageJob, std::io::Error),
    /// The copy did not finish within the copy timeout.
    TimedOut(ImageJob),
    /// The copy task itself died.
    Aborted(ImageJob, String),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImageReport {
    pub copied: usize,
    pub missing: usize,
    /// Failed, timed out or aborted copies.
    pub failed: usize,
}

/// Copies to perform for one catalog.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImagePlan {
    pub jobs: Vec<ImageJob>,
    /// Cards with no number, which have no image file name.
    pub unnumbered: usize,
    /// Cards whose destination another card already claimed.
    pub shared: usize,
}

/// Plan the copies for a catalog.
///
/// Relative image paths use the vendor's backslash separators. Cards that
/// share a destination (merged cards appear under two catalog entries) are
/// copied once, from the first card seen.
pub fn plan_images(catalog: &Catalog, data_root: &Path, out_dir: &Path) -> ImagePlan {
    let img_root = out_dir.join("img");
    let mut seen = HashSet::new();
    let mut plan = ImagePlan::default();

    for card in catalog.sets().flat_map(|s| s.cards.iter()) {
        let Some(card_no) = card.card_no() else {
            plan.unnumbered += 1;
            continue;
        };
        let dst = img_root
            .join(&card.collection.set_symbol)
            .join(format!("{card_no}.png"));
        if !seen.insert(dst.clone()) {
            plan.shared += 1;
            continue;
        }
        let src = data_root.join(card.image_path.replace('\\', "/"));
        plan.jobs.push(ImageJob { src, dst });
    }
    plan
}

fn copy_image(job: ImageJob) -> ImageOutcome {
    if !job.src.is_file() {
        return ImageOutcome::Missing(job);
    }
    if let Some(parent) = job.dst.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            return ImageOutcome::Failed(job, e);
        }
    }
    match std::fs::copy(&job.src, &job.dst) {
        Ok(_) => ImageOutcome::Copied(job),
        Err(e) if e.kind() == ErrorKind::NotFound => ImageOutcome::Missing(job),
        Err(e) => ImageOutcome::Failed(job, e),
    }
}

/// Run `jobs` on `workers` blocking-copy workers.
///
/// `on_result` sees every outcome as it arrives; every job yields exactly
/// one outcome.
pub async fn export_images<F>(jobs: Vec<ImageJob>, workers: usize, on_result: F) -> ImageReport
where
    F: FnMut(&ImageOutcome),
{
    run_copies(jobs, workers, COPY_TIMEOUT, copy_image, on_result).await
}

pub(crate) async fn run_copies<F>(
    jobs: Vec<ImageJob>,
    workers: usize,
    timeout: Duration,
    copy: fn(ImageJob) -> ImageOutcome,
    mut on_result: F,
) -> ImageReport
where
    F: FnMut(&ImageOutcome),
{
    let mut report = ImageReport::default();
    let mut outcomes = spawn_copy_workers(jobs, workers, timeout, copy);

    while let Some(outcome) = outcomes.recv().await {
        match &outcome {
            ImageOutcome::Copied(_) => report.copied += 1,
            ImageOutcome::Missing(job) => {
                log::warn!("Missing image {}", job.src.display());
                report.missing += 1;
            }
            ImageOutcome::Failed(job, e) => {
                log::warn!(
                    "Failed to copy {} -> {}: {}",
                    job.src.display(),
                    job.dst.display(),
                    e
                );
                report.failed += 1;
            }
            ImageOutcome::TimedOut(job) => {
                log::warn!(
                    "Copy of {} timed out after {}s",
                    job.src.display(),
                    timeout.as_secs_f32()
                );
                report.failed += 1;
            }
            ImageOutcome::Aborted(job, reason) => {
                log::warn!("Copy of {} aborted: {}", job.src.display(), reason);
                report.failed += 1;
            }
        }
        on_result(&outcome);
    }
    report
}

/// Start `workers` tasks pulling jobs from a bounded queue.
///
/// The returned channel closes once every job has produced its outcome.
fn spawn_copy_workers(
    jobs: Vec<ImageJob>,
    workers: usize,
    timeout: Duration,
    copy: fn(ImageJob) -> ImageOutcome,
) -> mpsc::UnboundedReceiver<ImageOutcome> {
    let workers = workers.max(1);
    let (job_tx, job_rx) = async_channel::bounded::<ImageJob>(workers);
    let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

    for _ in 0..workers {
        let job_rx = job_rx.clone();
        let outcome_tx = outcome_tx.clone();
        tokio::spawn(async move {
            while let Ok(job) = job_rx.recv().await {
                let outcome = copy_with_timeout(job, timeout, copy).await;
                if outcome_tx.send(outcome).is_err() {
                    break; // Receiver dropped
                }
            }
        });
    }
    drop(outcome_tx);

    tokio::spawn(async move {
        for job in jobs {
            if job_tx.send(job).await.is_err() {
                break;
            }
        }
    });
    outcome_rx
}

async fn copy_with_timeout(
    job: ImageJob,
    timeout: Duration,
    copy: fn(ImageJob) -> ImageOutcome,
) -> ImageOutcome {
    let pending = job.clone();
    let task = tokio::task::spawn_blocking(move || copy(job));
    match tokio::time::timeout(timeout, task).await {
        Ok(Ok(outcome)) => outcome,
        Ok(Err(e)) => ImageOutcome::Aborted(pending, e.to_string()),
        Err(_) => ImageOutcome::TimedOut(pending),
    }
}

#[cfg(test)]
#[path = "tests/images_tests.rs"]
mod tests;
