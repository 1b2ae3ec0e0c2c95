// src/simplify/analysis.rs

use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::Value;
use std::fmt;

use super::item::SimplifiedItem;

pub const SAMPLE_SIZE: usize = 3;

const DATE_FIELDS: [&str; 2] = ["DateOfCreation", "DateOfModification"];

#[derive(Debug, Clone, PartialEq)]
pub struct FieldCoverage {
    pub field: String,
    pub count: usize,
    pub percentage: f64,
}

/// Summary of a simplified batch: which fields survived and how often.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub total: usize,
    /// Every field seen at least once, most common first.
    pub fields: Vec<FieldCoverage>,
    pub date_fields: Vec<FieldCoverage>,
    pub samples: Vec<SimplifiedItem>,
}

impl AnalysisReport {
    pub fn coverage(&self, field: &str) -> Option<&FieldCoverage> {
        self.fields.iter().find(|c| c.field == field)
    }
}

pub fn analyze(items: &[SimplifiedItem]) -> AnalysisReport {
    analyze_with_rng(items, &mut rand::thread_rng())
}

/// Like [`analyze`] with a caller-provided RNG for the sample.
pub fn analyze_with_rng<R: Rng + ?Sized>(items: &[SimplifiedItem], rng: &mut R) -> AnalysisReport {
    let total = items.len();

    // First-seen order is kept so the later stable sort breaks ties the same way every run.
    let mut counts: Vec<(&'static str, usize)> = Vec::new();
    for item in items {
        for name in item.field_names() {
            match counts.iter_mut().find(|(n, _)| *n == name) {
                Some((_, c)) => *c += 1,
                None => counts.push((name, 1)),
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let fields = counts
        .iter()
        .map(|(name, count)| coverage(name, *count, total))
        .collect();

    let date_fields = DATE_FIELDS
        .iter()
        .map(|name| {
            let count = counts
                .iter()
                .find(|(n, _)| n == name)
                .map_or(0, |(_, c)| *c);
            coverage(name, count, total)
        })
        .collect();

    let samples = items
        .choose_multiple(rng, SAMPLE_SIZE.min(total))
        .cloned()
        .collect();

    AnalysisReport {
        total,
        fields,
        date_fields,
        samples,
    }
}

fn coverage(field: &str, count: usize, total: usize) -> FieldCoverage {
    let percentage = if total > 0 {
        count as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    FieldCoverage {
        field: field.to_string(),
        count,
        percentage,
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total;

        writeln!(f, "--- SIMPLIFIED DATA ANALYSIS ---")?;
        writeln!(f, "Total items: {total}")?;
        writeln!(f)?;
        writeln!(f, "Fields preserved:")?;
        for c in &self.fields {
            writeln!(f, "  {}: {}/{total} items ({:.2}%)", c.field, c.count, c.percentage)?;
        }

        writeln!(f)?;
        writeln!(f, "--- DATE FIELDS ANALYSIS ---")?;
        for c in &self.date_fields {
            writeln!(f, "  {}: {}/{total} items ({:.2}%)", c.field, c.count, c.percentage)?;
        }

        writeln!(f)?;
        write!(f, "--- SAMPLE SIMPLIFIED ITEMS ---")?;
        for (i, sample) in self.samples.iter().enumerate() {
            writeln!(f)?;
            writeln!(f)?;
            write!(f, "Sample {}:", i + 1)?;
            // serde_json's default map is ordered by key.
            for (key, value) in sample.to_map() {
                match value {
                    Value::String(s) => write!(f, "\n  {key}: {s}")?,
                    other => write!(f, "\n  {key}: {other}")?,
                }
            }
        }
        Ok(())
    }
}
