use anyhow::Context;
use indexmap::IndexMap;
use std::{fs, path::Path};

/// Allowed-value lists per constrained column, persisted as one JSON object.
/// Only columns present here are constrained; everything else is free text.
/// Insertion order is kept so the dropdowns stay stable across sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionRegistry {
    entries: IndexMap<String, Vec<String>>,
}

impl OptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_path(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("reading {path:?}"))?;
        let entries: IndexMap<String, Vec<String>> =
            serde_json::from_str(&text).with_context(|| format!("parsing {path:?}"))?;
        Ok(Self {
            entries: entries
                .into_iter()
                .map(|(column, values)| (column, dedupe(values)))
                .collect(),
        })
    }

    pub fn save_to_path(&self, path: &Path) -> anyhow::Result<()> {
        let text = serde_json::to_string(&self.entries).context("serializing column options")?;
        fs::write(path, text).with_context(|| format!("writing {path:?}"))?;
        Ok(())
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.entries.contains_key(column)
    }

    /// Allowed values for a column; empty for unconstrained columns.
    pub fn values(&self, column: &str) -> &[String] {
        self.entries.get(column).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replace a column's allowed values, de-duplicated, empties dropped.
    pub fn set_values(&mut self, column: impl Into<String>, values: Vec<String>) {
        self.entries.insert(column.into(), dedupe(values));
    }

    /// Empty every list but keep the keys; the clear-all action resets the
    /// dropdowns without forgetting which columns are constrained.
    pub fn clear_all_values(&mut self) {
        for values in self.entries.values_mut() {
            values.clear();
        }
    }
}

/// Parse the comma-separated list the options editor uses.
pub fn parse_value_list(text: &str) -> Vec<String> {
    dedupe(
        text.split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

fn dedupe(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !value.is_empty() && !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{OptionRegistry, parse_value_list};

    #[test]
    fn parse_value_list_trims_and_drops_empties() {
        assert_eq!(
            parse_value_list(" Home , Work ,, Errands ,"),
            vec!["Home", "Work", "Errands"]
        );
        assert!(parse_value_list("  ,  ,").is_empty());
    }

    #[test]
    fn set_values_dedupes_preserving_first_occurrence() {
        let mut registry = OptionRegistry::new();
        registry.set_values(
            "Priority",
            vec![
                "High".to_string(),
                "Low".to_string(),
                "High".to_string(),
                String::new(),
            ],
        );
        assert_eq!(registry.values("Priority"), ["High", "Low"]);
    }

    #[test]
    fn clear_all_values_keeps_columns() {
        let mut registry = OptionRegistry::new();
        registry.set_values("Category", vec!["Home".to_string()]);
        registry.set_values("Priority", vec!["High".to_string()]);
        registry.clear_all_values();

        assert!(registry.contains("Category"));
        assert!(registry.values("Category").is_empty());
        assert!(registry.values("Priority").is_empty());
    }

    #[test]
    fn values_for_unknown_column_is_empty() {
        let registry = OptionRegistry::new();
        assert!(registry.values("Nope").is_empty());
        assert!(!registry.contains("Nope"));
    }
}
