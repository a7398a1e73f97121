use std::collections::HashMap;

use serde::Serialize;

use crate::models::{CellKey, Dataset, Value};

/// Occurrence count of one value in a column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub value: Value,
    pub count: usize,
}

/// The `k` most frequent non-null values of `column`, most frequent first.
///
/// Equal counts keep the order in which the values first appear in the
/// column. An unknown column name yields an empty list.
pub fn top_categories(dataset: &Dataset, column: &str, k: usize) -> Vec<CategoryCount> {
    let Some(col) = dataset.column(column) else {
        return Vec::new();
    };

    let mut index: HashMap<CellKey<'_>, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();
    for value in col.values().iter().flatten() {
        let slot = *index.entry(CellKey::of(Some(value))).or_insert_with(|| {
            counts.push(CategoryCount {
                value: value.clone(),
                count: 0,
            });
            counts.len() - 1
        });
        counts[slot].count += 1;
    }

    // stable: first-seen order breaks ties
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(k);
    counts
}
