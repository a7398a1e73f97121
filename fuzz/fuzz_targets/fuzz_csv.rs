#![no_main]

use eda_analyzer::{
    analysis::{compute_quality_flags, correlation_matrix, missing_table, top_categories},
    io::{read_csv_from_bytes, LoadOptions},
    QualityThresholds,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(ds) = read_csv_from_bytes(data, "fuzz", &LoadOptions::default()) {
        let _ = missing_table(&ds);
        let _ = compute_quality_flags(&ds, QualityThresholds::default());
        let corr = correlation_matrix(&ds);
        for row in &corr.values {
            assert_eq!(row.len(), corr.size());
        }
        if let Some(first) = ds.column_names().first() {
            let _ = top_categories(&ds, first, 5);
        }
    }
});
