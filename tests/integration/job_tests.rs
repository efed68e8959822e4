//! Job runner integration tests
//!
//! Proves the orchestration layer's state machine: completion, immediate
//! completion on an empty store, the stall guard, and failure handling.

#[cfg(test)]
mod tests {
    use crate::common::{InMemoryOrderStore, runner};
    use orderpurge_rs::services::JobState;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_job_completes_and_accounts_every_row() {
        let store = Arc::new(InMemoryOrderStore::new());
        store.seed(120);
        let runner = runner(store, 50);

        let report = runner.run().await.unwrap();
        assert_eq!(report.state, JobState::Completed);
        assert_eq!(report.batches, 3);
        assert_eq!(report.progress.total_at_start, 120);
        assert_eq!(report.progress.processed, 120);
        assert_eq!(report.progress.remaining, 0);
        assert_eq!(report.progress.percent(), 100);
    }

    #[tokio::test]
    async fn test_empty_store_completes_without_batches() {
        let store = Arc::new(InMemoryOrderStore::new());
        let runner = runner(store, 50);

        let report = runner.run().await.unwrap();
        assert_eq!(report.state, JobState::Completed);
        assert_eq!(report.batches, 0);
        assert_eq!(report.progress.total_at_start, 0);
    }

    #[tokio::test]
    async fn test_stall_guard_fires_instead_of_looping() {
        let store = Arc::new(InMemoryOrderStore::new());
        let ids = store.seed(5);
        // One row can never be deleted; the job must not spin forever
        store.fail_deletes_of(ids[4]);
        let runner = runner(store, 50);

        let report = runner.run().await.unwrap();
        assert_eq!(report.state, JobState::Stalled);
        assert_eq!(report.progress.processed, 4);
        assert_eq!(report.progress.remaining, 1);
        // First batch makes progress, then the guard counts three
        // no-progress batches before aborting
        assert_eq!(report.batches, 4);
    }

    #[tokio::test]
    async fn test_store_outage_fails_the_job() {
        let store = Arc::new(InMemoryOrderStore::new());
        store.seed(10);
        store.outage_after_deletes(4);
        let runner = runner(store, 3);

        let report = runner.run().await.unwrap();
        assert_eq!(report.state, JobState::Failed);
        assert!(report.error.is_some());
        assert!(report.into_result().is_err());
    }

    #[tokio::test]
    async fn test_failed_job_is_resumable() {
        let store = Arc::new(InMemoryOrderStore::new());
        store.seed(10);
        store.outage_after_deletes(4);
        let runner = runner(store.clone(), 3);

        let report = runner.run().await.unwrap();
        assert_eq!(report.state, JobState::Failed);

        // A rerun against the restored store drains what is left
        store.restore();
        let report = runner.run().await.unwrap();
        assert_eq!(report.state, JobState::Completed);
        assert_eq!(report.progress.total_at_start, 6);
        assert_eq!(report.progress.remaining, 0);
    }
}
