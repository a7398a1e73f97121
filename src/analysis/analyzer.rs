use serde::Serialize;

use crate::analysis::{
    compute_quality_flags, correlation_matrix, missing_table, problematic_columns,
    profile_columns, summarize_dataset, top_categories, CategoryCount, ColumnProfile,
    CorrelationMatrix, DatasetSummary, MissingReport, QualityFlags,
};
use crate::config::EdaConfig;
use crate::models::Dataset;

/// Top values of one text column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnCategories {
    pub column: String,
    pub top: Vec<CategoryCount>,
}

/// Everything a full report shows, in serializable form.
#[derive(Debug, Clone, Serialize)]
pub struct EdaReport {
    pub summary: DatasetSummary,
    pub quality_flags: QualityFlags,
    pub missing: MissingReport,
    pub problematic_columns: Vec<String>,
    pub correlation: CorrelationMatrix,
    pub top_categories: Vec<ColumnCategories>,
    pub profiles: Vec<ColumnProfile>,
}

/// Unified analysis API over one dataset and one configuration.
pub struct Analyzer<'a> {
    dataset: &'a Dataset,
    config: EdaConfig,
}

impl<'a> Analyzer<'a> {
    /// Create a new Analyzer for the given dataset.
    pub fn new(dataset: &'a Dataset, config: EdaConfig) -> Self {
        Self { dataset, config }
    }

    pub fn config(&self) -> &EdaConfig {
        &self.config
    }

    /// Row/column counts, type labels and memory footprint.
    pub fn summary(&self) -> DatasetSummary {
        summarize_dataset(self.dataset)
    }

    /// Quality flags with the configured thresholds.
    pub fn quality_flags(&self) -> QualityFlags {
        compute_quality_flags(self.dataset, self.config.thresholds)
    }

    pub fn missing(&self) -> MissingReport {
        missing_table(self.dataset)
    }

    /// Columns at or above the configured `min_missing_share`.
    pub fn problematic_columns(&self) -> Vec<String> {
        problematic_columns(self.dataset, self.config.min_missing_share)
    }

    pub fn correlation(&self) -> CorrelationMatrix {
        correlation_matrix(self.dataset)
    }

    /// Top `top_k` values of one column.
    pub fn top_categories(&self, column: &str) -> Vec<CategoryCount> {
        top_categories(self.dataset, column, self.config.top_k)
    }

    /// Top values for the first `max_category_columns` text columns.
    pub fn category_overview(&self) -> Vec<ColumnCategories> {
        self.dataset
            .categorical_columns()
            .into_iter()
            .take(self.config.max_category_columns)
            .map(|c| ColumnCategories {
                column: c.name().to_string(),
                top: self.top_categories(c.name()),
            })
            .collect()
    }

    pub fn profiles(&self) -> Vec<ColumnProfile> {
        profile_columns(self.dataset)
    }

    /// Run every analysis.
    pub fn report(&self) -> EdaReport {
        EdaReport {
            summary: self.summary(),
            quality_flags: self.quality_flags(),
            missing: self.missing(),
            problematic_columns: self.problematic_columns(),
            correlation: self.correlation(),
            top_categories: self.category_overview(),
            profiles: self.profiles(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QualityThresholds;
    use crate::models::Column;

    fn sample_dataset() -> Dataset {
        Dataset::new(
            "Analyzer Test",
            vec![
                Column::int("user_id", &[Some(1), Some(2), Some(2), Some(4)]),
                Column::float("score", &[Some(0.0), None, Some(0.0), Some(3.5)]),
                Column::text("city", &[Some("Oslo"), Some("Rome"), Some("Oslo"), None]),
                Column::text("tag", &[Some("a"), Some("b"), Some("c"), Some("d")]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_flags_match_standalone() {
        let ds = sample_dataset();
        let analyzer = Analyzer::new(&ds, EdaConfig::default());
        assert_eq!(
            analyzer.quality_flags(),
            compute_quality_flags(&ds, QualityThresholds::default())
        );
    }

    #[test]
    fn test_configured_thresholds_used() {
        let ds = sample_dataset();
        let strict = EdaConfig {
            thresholds: QualityThresholds {
                zero_threshold: 0.9,
                ..QualityThresholds::default()
            },
            ..EdaConfig::default()
        };
        assert!(Analyzer::new(&ds, EdaConfig::default()).quality_flags().has_many_zero_values);
        assert!(!Analyzer::new(&ds, strict).quality_flags().has_many_zero_values);
    }

    #[test]
    fn test_problematic_uses_config() {
        let ds = sample_dataset();
        let config = EdaConfig {
            min_missing_share: 0.25,
            ..EdaConfig::default()
        };
        assert_eq!(
            Analyzer::new(&ds, config).problematic_columns(),
            vec!["score", "city"]
        );
    }

    #[test]
    fn test_category_overview_limits() {
        let ds = sample_dataset();
        let config = EdaConfig {
            top_k: 1,
            max_category_columns: 1,
            ..EdaConfig::default()
        };
        let overview = Analyzer::new(&ds, config).category_overview();
        assert_eq!(overview.len(), 1);
        assert_eq!(overview[0].column, "city");
        assert_eq!(overview[0].top.len(), 1);
        assert_eq!(overview[0].top[0].count, 2);
    }

    #[test]
    fn test_report_collects_everything() {
        let ds = sample_dataset();
        let report = Analyzer::new(&ds, EdaConfig::default()).report();
        assert_eq!(report.summary.n_rows, 4);
        assert!(report.quality_flags.has_suspicious_id_duplicates);
        assert_eq!(report.missing.len(), 2);
        assert_eq!(report.correlation.columns, vec!["user_id", "score"]);
        assert_eq!(report.top_categories.len(), 2);
        assert_eq!(report.profiles.len(), 4);
    }

    #[test]
    fn test_report_serializes_nan_as_null() {
        let ds = Dataset::new(
            "nan",
            vec![
                Column::float("a", &[Some(1.0), Some(1.0)]),
                Column::float("b", &[Some(1.0), Some(2.0)]),
            ],
        )
        .unwrap();
        let report = Analyzer::new(&ds, EdaConfig::default()).report();
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["correlation"]["values"][0][1].is_null());
    }

    #[test]
    fn test_analyzer_empty_dataset() {
        let ds = Dataset::empty("Empty");
        let report = Analyzer::new(&ds, EdaConfig::default()).report();
        assert_eq!(report.summary.n_rows, 0);
        assert!(report.missing.is_empty());
        assert!(report.correlation.is_empty());
        assert_eq!(report.quality_flags, QualityFlags::default());
    }
}
