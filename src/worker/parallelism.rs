//! Worker count resolution
//!
//! The default worker count is the number of logical CPUs. A configured
//! override is honored as-is, with a warning when it oversubscribes the
//! machine.

/// Number of logical CPUs available to this process
///
/// ```
/// use wordpulse::worker::parallelism::num_cpus;
///
/// assert!(num_cpus() >= 1);
/// ```
pub fn num_cpus() -> usize {
    num_cpus::get()
}

/// Resolve the worker count from an optional override
///
/// A `None` override falls back to [`num_cpus`]. A zero override is passed
/// through untouched; the partitioner rejects it. Oversubscription is
/// reported by the config validator, not here.
pub fn resolve_workers(requested: Option<usize>) -> usize {
    requested.unwrap_or_else(num_cpus)
}

/// Warn when more workers than logical CPUs are configured
///
/// Returns true if the count exceeds the CPU count.
pub fn warn_if_oversubscribed(workers: usize) -> bool {
    let cpu_count = num_cpus();
    if workers > cpu_count {
        log::warn!(
            "Worker count ({}) exceeds CPU count ({}); workers will time-share cores",
            workers,
            cpu_count
        );
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_cpus() {
        let cpus = num_cpus();
        assert!(cpus > 0);
        assert!(cpus <= 4096);
    }

    #[test]
    fn test_resolve_workers_default() {
        assert_eq!(resolve_workers(None), num_cpus());
    }

    #[test]
    fn test_resolve_workers_override() {
        assert_eq!(resolve_workers(Some(3)), 3);
        assert_eq!(resolve_workers(Some(0)), 0);
    }

    #[test]
    fn test_warn_if_oversubscribed() {
        let cpu_count = num_cpus();

        assert!(!warn_if_oversubscribed(cpu_count));
        assert!(!warn_if_oversubscribed(cpu_count / 2));

        assert!(warn_if_oversubscribed(cpu_count + 1));
        assert!(warn_if_oversubscribed(cpu_count * 2));
    }
}
