//! Extension allow-list applied to changed file paths.

use camino::Utf8Path;

/// Predicate accepting paths whose file name ends in an allowed extension.
///
/// Extensions are matched against the end of the final path component, so
/// multi-part extensions such as `d.ts` work and a bare dotfile named `.ts`
/// is not mistaken for a TypeScript file. Matching is case-sensitive.
///
/// # Example
///
/// ```
/// use lint_changed::ExtensionFilter;
///
/// let filter = ExtensionFilter::parse(" ts, .js ,");
/// assert!(filter.matches("src/app.ts"));
/// assert!(filter.matches("lib/index.js"));
/// assert!(!filter.matches("README.md"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
    suffixes: Vec<String>,
}

impl ExtensionFilter {
    /// Builds a filter from individual extensions.
    ///
    /// Each entry is trimmed and stripped of leading dots; blank entries are
    /// ignored.
    #[must_use]
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut suffixes: Vec<String> = Vec::new();
        for extension in extensions {
            let normalised = extension.as_ref().trim().trim_start_matches('.');
            if normalised.is_empty() {
                continue;
            }
            let suffix = format!(".{normalised}");
            if !suffixes.contains(&suffix) {
                suffixes.push(suffix);
            }
        }
        Self { suffixes }
    }

    /// Builds a filter from a comma-separated list such as `"ts, tsx, js"`.
    #[must_use]
    pub fn parse(list: &str) -> Self {
        Self::new(list.split(','))
    }

    /// Returns true when no extension survived normalisation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    /// Accepted extensions without their leading dot.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.suffixes
            .iter()
            .map(|suffix| suffix.trim_start_matches('.'))
    }

    /// Returns true if `path` ends in one of the accepted extensions.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        let Some(file_name) = Utf8Path::new(path).file_name() else {
            return false;
        };
        self.suffixes
            .iter()
            .any(|suffix| file_name.len() > suffix.len() && file_name.ends_with(suffix.as_str()))
    }

    /// Keeps the paths that match, preserving their order.
    #[must_use]
    pub fn apply(&self, paths: Vec<String>) -> Vec<String> {
        paths.into_iter().filter(|path| self.matches(path)).collect()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::ExtensionFilter;

    #[rstest]
    #[case::plain("src/app.ts", true)]
    #[case::nested_js("packages/a/b/index.js", true)]
    #[case::other_extension("main.py", false)]
    #[case::extension_in_directory("ts/readme", false)]
    #[case::bare_dotfile(".ts", false)]
    #[case::suffix_without_dot("scripts", false)]
    #[case::case_sensitive("LEGACY.TS", false)]
    #[case::multi_part("types/global.d.ts", true)]
    fn matches_on_final_component(#[case] path: &str, #[case] expected: bool) {
        let filter = ExtensionFilter::parse("ts,js");

        assert_eq!(filter.matches(path), expected, "path {path}");
    }

    #[rstest]
    fn normalises_configured_extensions() {
        let filter = ExtensionFilter::parse(" .ts ,, js , ts,");

        assert_eq!(filter.extensions().collect::<Vec<_>>(), ["ts", "js"]);
    }

    #[rstest]
    #[case::empty("")]
    #[case::separators_only(" , ,")]
    #[case::dots_only(".")]
    fn blank_lists_produce_empty_filter(#[case] list: &str) {
        assert!(ExtensionFilter::parse(list).is_empty());
    }

    #[rstest]
    fn empty_filter_rejects_everything() {
        let filter = ExtensionFilter::default();

        assert!(filter.apply(vec!["a.ts".to_owned(), "b".to_owned()]).is_empty());
    }

    #[rstest]
    fn apply_keeps_every_match_in_order() {
        let filter = ExtensionFilter::new(["ts", "js"]);
        let paths = ["z.ts", "a.py", "m.js", "b.ts", "c.rs"].map(str::to_owned).to_vec();

        assert_eq!(filter.apply(paths), ["z.ts", "m.js", "b.ts"]);
    }
}
