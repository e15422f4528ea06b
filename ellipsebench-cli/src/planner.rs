//! Benchmark Planner
//!
//! Builds the execution plan: which variants run, and at which segment counts.
//!
//! Variant filtering is a regex match on the method label. The fixed variant
//! order is preserved, since fastest-method ties go to the earliest one.

use ellipsebench_geom::Method;

/// Execution plan for a sweep
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionPlan {
    /// Variants to run, in fixed order
    pub methods: Vec<Method>,
    /// Segment counts, ascending
    pub segments: Vec<u32>,
}

/// Build execution plan from the filter and sweep bounds
pub fn build_plan(filter: Option<&regex::Regex>, min_segments: u32, max_segments: u32) -> ExecutionPlan {
    ExecutionPlan {
        methods: select_methods(filter),
        segments: sweep_segments(min_segments, max_segments),
    }
}

/// Variants whose label matches `filter` (all when `None`)
pub fn select_methods(filter: Option<&regex::Regex>) -> Vec<Method> {
    Method::ALL
        .into_iter()
        .filter(|m| filter.is_none_or(|re| re.is_match(m.label())))
        .collect()
}

/// Doubling sequence `min, 2·min, 4·min, …` while `≤ max`
pub fn sweep_segments(min_segments: u32, max_segments: u32) -> Vec<u32> {
    let mut counts = Vec::new();
    let mut segments = min_segments.max(1);
    while segments <= max_segments {
        counts.push(segments);
        match segments.checked_mul(2) {
            Some(next) => segments = next,
            None => break,
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_default_sweep() {
        let counts = sweep_segments(4, 524_288);
        assert_eq!(counts.len(), 18);
        assert_eq!(counts.first(), Some(&4));
        assert_eq!(counts.last(), Some(&524_288));
        for (i, s) in counts.iter().enumerate() {
            assert_eq!(*s, 1 << (i + 2));
        }
    }

    #[test]
    fn test_sweep_bounds() {
        assert_eq!(sweep_segments(3, 20), [3, 6, 12]);
        assert_eq!(sweep_segments(8, 8), [8]);
        assert!(sweep_segments(16, 8).is_empty());
        assert_eq!(sweep_segments(0, 4), [1, 2, 4]);
    }

    #[test]
    fn test_sweep_stops_at_u32_max() {
        let counts = sweep_segments(1 << 31, u32::MAX);
        assert_eq!(counts, [1 << 31]);
    }

    #[test]
    fn test_select_all() {
        assert_eq!(select_methods(None), Method::ALL);
    }

    #[test]
    fn test_select_by_regex_keeps_order() {
        let re = Regex::new("omp|bis").unwrap();
        assert_eq!(
            select_methods(Some(&re)),
            [Method::Method1Omp, Method::Method2Omp, Method::Method2Bis]
        );

        let re = Regex::new("^method2$").unwrap();
        assert_eq!(select_methods(Some(&re)), [Method::Method2]);
    }

    #[test]
    fn test_build_plan() {
        let plan = build_plan(None, 4, 16);
        assert_eq!(plan.methods.len(), 5);
        assert_eq!(plan.segments, [4, 8, 16]);
    }
}
