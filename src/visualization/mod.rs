mod charts;
mod tables;

pub use charts::{
    format_correlation_heatmap, format_histograms, format_missing_matrix, HISTOGRAM_BINS,
};
pub use tables::{
    format_dtypes, format_missing_table, format_overview, format_profiles, format_quality_flags,
    format_rows, format_top_categories, print_dtypes, print_missing_table, print_overview,
    print_profiles, print_quality_flags, print_rows, print_top_categories, FlagStyle,
};
