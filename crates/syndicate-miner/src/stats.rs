//! Per-level statistics collected during one mining call

/// Counters for a single level of the apriori lattice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelStats {
    /// Itemset size of this level
    pub level: usize,

    /// Candidates whose support was counted
    pub counted: usize,

    /// Candidates discarded because a subset was infrequent
    pub pruned: usize,

    /// Candidates that met the support threshold
    pub frequent: usize,
}

/// Statistics collected during one mining call
///
/// Tracks how many candidates each level produced, how many the
/// anti-monotone pruning rule discarded without counting, and how many
/// survived.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MiningStats {
    /// One entry per level that was generated
    pub levels: Vec<LevelStats>,

    /// Distinct items seen across all transactions
    pub distinct_items: usize,

    /// Whether support counting ran on the rayon pool at any level
    pub parallel: bool,
}

impl MiningStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one level
    pub fn record_level(&mut self, level: usize, counted: usize, pruned: usize, frequent: usize) {
        self.levels.push(LevelStats {
            level,
            counted,
            pruned,
            frequent,
        });
    }

    /// Candidates counted across all levels
    pub fn total_counted(&self) -> usize {
        self.levels.iter().map(|l| l.counted).sum()
    }

    /// Candidates pruned across all levels
    pub fn total_pruned(&self) -> usize {
        self.levels.iter().map(|l| l.pruned).sum()
    }

    /// Frequent itemsets across all levels
    pub fn total_frequent(&self) -> usize {
        self.levels.iter().map(|l| l.frequent).sum()
    }

    /// Size of the largest frequent itemset
    pub fn deepest_level(&self) -> usize {
        self.levels
            .iter()
            .filter(|l| l.frequent > 0)
            .map(|l| l.level)
            .max()
            .unwrap_or(0)
    }

    /// Generate a summary report of the statistics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Mining Summary".to_string(),
            "==============".to_string(),
            format!("Distinct items: {}", self.distinct_items),
            format!("Parallel counting: {}", if self.parallel { "yes" } else { "no" }),
            String::new(),
        ];

        for level in &self.levels {
            lines.push(format!(
                "  Level {}: {} counted, {} pruned, {} frequent",
                level.level, level.counted, level.pruned, level.frequent
            ));
        }

        lines.push(format!(
            "  Total: {} counted, {} pruned, {} frequent",
            self.total_counted(),
            self.total_pruned(),
            self.total_frequent()
        ));

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_creation() {
        let stats = MiningStats::new();
        assert_eq!(stats.total_counted(), 0);
        assert_eq!(stats.total_frequent(), 0);
        assert_eq!(stats.deepest_level(), 0);
    }

    #[test]
    fn test_record_levels() {
        let mut stats = MiningStats::new();
        stats.record_level(1, 10, 0, 6);
        stats.record_level(2, 15, 0, 4);
        stats.record_level(3, 2, 3, 0);

        assert_eq!(stats.total_counted(), 27);
        assert_eq!(stats.total_pruned(), 3);
        assert_eq!(stats.total_frequent(), 10);
        assert_eq!(stats.deepest_level(), 2);
    }

    #[test]
    fn test_summary() {
        let mut stats = MiningStats::new();
        stats.distinct_items = 12;
        stats.record_level(1, 12, 0, 5);

        let summary = stats.summary();
        assert!(summary.contains("Distinct items: 12"));
        assert!(summary.contains("Level 1: 12 counted, 0 pruned, 5 frequent"));
    }
}
