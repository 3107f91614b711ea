//! Tests for profile progress tracking

#[cfg(test)]
mod tests {
    use edgematch::io::progress::ProgressManager;

    #[test]
    fn test_progress_manager_counts_attempts() {
        let mut pm = ProgressManager::new();
        assert_eq!(pm.completed(), 0);

        pm.initialize(3);
        pm.complete_attempt(120);
        pm.complete_attempt(64);
        assert_eq!(pm.completed(), 2);
        pm.finish();
    }

    // Re-initialising starts a fresh count
    #[test]
    fn test_initialize_resets_count() {
        let mut pm = ProgressManager::default();
        pm.initialize(2);
        pm.complete_attempt(10);
        pm.initialize(5);
        assert_eq!(pm.completed(), 0);
        pm.finish();
    }

    #[test]
    fn test_uninitialized_manager_still_counts() {
        let mut pm = ProgressManager::new();
        pm.complete_attempt(7);
        pm.finish();
        assert_eq!(pm.completed(), 1);
    }
}
