//! Report configuration: noise keywords, exclusion patterns, and the
//! domain glossary. Always passed in explicitly so independent reports can
//! run with different policies.

use crate::path::Pattern;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Case-insensitive fragments; a path whose key segment contains one is
    /// dropped from the report.
    pub noise_keywords: Vec<String>,
    /// Subtrees excluded from comparison before classification.
    pub exclude_paths: Vec<Pattern>,
    /// Path segment -> parenthetical annotation appended in the report.
    pub glossary: HashMap<String, String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        let noise_keywords = ["modified", "created", "timestamp", "time", "lastedModifiedAt"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let exclude_paths = ["root['Items'][*]['modified']", "root['Items'][*]['created']"]
            .iter()
            .map(|p| Pattern::parse(p).expect("default exclude pattern must parse"))
            .collect();

        let glossary = [
            ("availableEVVancies", "（電動車剩餘位）"),
            ("availableEVVacancies", "（電動車剩餘位）"),
            ("availableVacancyList", "（各類車位明細）"),
            ("availableVacancy", "（可用車位數）"),
            ("availableCarParkSpace", "（總剩餘車位）"),
            ("type.DC", "（DC直流充電）"),
            ("type.AC", "（AC交流充電）"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        ReportConfig {
            noise_keywords,
            exclude_paths,
            glossary,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    noise_keywords: Option<Vec<String>>,
    #[serde(default)]
    exclude_paths: Option<Vec<String>>,
    #[serde(default)]
    glossary: Option<HashMap<String, String>>,
}

impl ReportConfig {
    /// Load overrides from a JSON file; any field left out keeps its
    /// built-in default.
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to load {}: {}", path.display(), e))?;

        let raw: RawConfig = serde_json::from_str(&contents)
            .map_err(|e| format!("Invalid config {}: {}", path.display(), e))?;

        let mut cfg = ReportConfig::default();
        if let Some(keywords) = raw.noise_keywords {
            cfg.noise_keywords = keywords;
        }
        if let Some(patterns) = raw.exclude_paths {
            cfg.exclude_paths = patterns
                .iter()
                .map(|p| Pattern::parse(p))
                .collect::<Result<_, _>>()?;
        }
        if let Some(glossary) = raw.glossary {
            cfg.glossary = glossary;
        }
        Ok(cfg)
    }
}
