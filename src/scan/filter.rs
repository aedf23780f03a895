//! Inclusion and stop-keyword decisions for visited entries.

use crate::fs::DirEntry;

use super::config::{FilenameMode, ScanConfig};
use super::utils::extension_of;

/// Name-based filter built from a [`ScanConfig`].
pub struct EntryFilter<'a> {
    config: &'a ScanConfig,
}

impl<'a> EntryFilter<'a> {
    pub fn new(config: &'a ScanConfig) -> Self {
        Self { config }
    }

    /// Whether the entry should be reported.
    ///
    /// Files whose extension is excluded are dropped first. The filename
    /// keywords are then applied according to the configured mode; an empty
    /// keyword set places no restriction.
    pub fn should_report(&self, entry: &DirEntry) -> bool {
        if !entry.is_dir && self.config.exclude_extensions.contains(extension_of(&entry.name)) {
            return false;
        }

        let keywords = &self.config.filename_keywords;
        if keywords.is_empty() {
            return true;
        }

        let matched = keywords.matches_substring(&entry.name);
        match self.config.filename_mode {
            FilenameMode::Blacklist => !matched,
            FilenameMode::Whitelist => matched,
        }
    }

    /// The stop keyword found in a directory name, if any.
    pub fn stop_keyword(&self, entry: &DirEntry) -> Option<&'a str> {
        self.config.stop_keywords.find_in(&entry.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::KeywordSet;
    use std::path::PathBuf;

    fn file(name: &str) -> DirEntry {
        DirEntry {
            name: name.to_string(),
            path: PathBuf::from("/scan").join(name),
            is_dir: false,
        }
    }

    fn dir(name: &str) -> DirEntry {
        DirEntry {
            is_dir: true,
            ..file(name)
        }
    }

    #[test]
    fn test_no_filters_reports_everything() {
        let config = ScanConfig::new("/scan");
        let filter = EntryFilter::new(&config);
        assert!(filter.should_report(&file("a.txt")));
        assert!(filter.should_report(&dir("sub")));
    }

    #[test]
    fn test_excluded_extension_case_insensitive() {
        let config = ScanConfig::new("/scan").with_exclude_extensions(KeywordSet::parse(".tmp", false));
        let filter = EntryFilter::new(&config);
        assert!(!filter.should_report(&file("notes.TMP")));
        assert!(!filter.should_report(&file("notes.tmp")));
        assert!(filter.should_report(&file("notes.txt")));
    }

    #[test]
    fn test_excluded_extension_case_sensitive() {
        let config = ScanConfig::new("/scan").with_exclude_extensions(KeywordSet::parse(".tmp", true));
        let filter = EntryFilter::new(&config);
        assert!(filter.should_report(&file("notes.TMP")));
        assert!(!filter.should_report(&file("notes.tmp")));
    }

    #[test]
    fn test_excluded_extension_ignores_directories() {
        let config = ScanConfig::new("/scan").with_exclude_extensions(KeywordSet::parse(".d", false));
        let filter = EntryFilter::new(&config);
        assert!(filter.should_report(&dir("conf.d")));
        assert!(!filter.should_report(&file("conf.d")));
    }

    #[test]
    fn test_blacklist_rejects_matches() {
        let config = ScanConfig::new("/scan")
            .with_filename_keywords(KeywordSet::parse("draft old", false), FilenameMode::Blacklist);
        let filter = EntryFilter::new(&config);
        assert!(!filter.should_report(&file("Report_DRAFT.docx")));
        assert!(!filter.should_report(&dir("old-stuff")));
        assert!(filter.should_report(&file("final.docx")));
    }

    #[test]
    fn test_whitelist_requires_match() {
        let config = ScanConfig::new("/scan")
            .with_filename_keywords(KeywordSet::parse("draft", false), FilenameMode::Whitelist);
        let filter = EntryFilter::new(&config);
        assert!(filter.should_report(&file("Draft-1.md")));
        assert!(filter.should_report(&dir("drafts")));
        assert!(!filter.should_report(&file("final.md")));
        assert!(!filter.should_report(&dir("docs")));
    }

    #[test]
    fn test_whitelist_case_sensitive() {
        let config = ScanConfig::new("/scan")
            .with_filename_keywords(KeywordSet::parse("Draft", true), FilenameMode::Whitelist);
        let filter = EntryFilter::new(&config);
        assert!(filter.should_report(&file("Draft-1.md")));
        assert!(!filter.should_report(&file("draft-1.md")));
    }

    #[test]
    fn test_exclusion_wins_over_whitelist() {
        let config = ScanConfig::new("/scan")
            .with_exclude_extensions(KeywordSet::parse(".bak", false))
            .with_filename_keywords(KeywordSet::parse("draft", false), FilenameMode::Whitelist);
        let filter = EntryFilter::new(&config);
        assert!(!filter.should_report(&file("draft.bak")));
    }

    #[test]
    fn test_stop_keyword_substring() {
        let config = ScanConfig::new("/scan").with_stop_keywords(KeywordSet::parse(".git node_modules", false));
        let filter = EntryFilter::new(&config);
        assert_eq!(filter.stop_keyword(&dir(".GIT")), Some(".git"));
        assert_eq!(filter.stop_keyword(&dir("web_node_modules_cache")), Some("node_modules"));
        assert_eq!(filter.stop_keyword(&dir("src")), None);
    }

    #[test]
    fn test_stop_keyword_case_sensitive() {
        let config = ScanConfig::new("/scan").with_stop_keywords(KeywordSet::parse(".D", true));
        let filter = EntryFilter::new(&config);
        assert_eq!(filter.stop_keyword(&dir("x.D")), Some(".D"));
        assert_eq!(filter.stop_keyword(&dir("x.d")), None);
    }
}
