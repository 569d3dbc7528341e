//! Version-number matching on directory names.

use regex::Regex;

/// A successful match of a version pattern inside a directory name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct VersionMatch<'a> {
    /// The captured `MAJOR.MINOR.PATCH` text.
    pub(crate) version: &'a str,
    /// Text of the name preceding the version number. A `v` marker is
    /// dropped only when it stands alone, so `Tool_v1.0.0` gives `Tool_`
    /// while `Dev2.1.0` keeps `Dev`.
    pub(crate) prefix: &'a str,
}

/// Compiled directory-name pattern.
///
/// The search is unanchored, so `Old Paradigm 3.4.2 (backup)` matches just
/// like `Paradigm_v3.4.2`.
#[derive(Debug, Clone)]
pub(crate) struct VersionPattern {
    re: Regex,
}

impl VersionPattern {
    /// Product name, an optional run of underscores or whitespace, an
    /// optional `v`, then a three-part version.
    ///
    /// Handles `Paradigm 3.4.2`, `Paradigm3.4.2`, `Paradigm_3.4.2` and
    /// `Paradigm v3.4.2`.
    pub(crate) fn for_product(product: &str) -> Self {
        let pattern = format!(r"{}[_\s]*v?(\d+\.\d+\.\d+)", regex::escape(product));
        Self {
            re: Regex::new(&pattern).expect("Escaped product pattern is valid"),
        }
    }

    /// Any three-part version, optionally preceded by `v`.
    pub(crate) fn any_product() -> Self {
        Self {
            re: Regex::new(r"v?(\d+\.\d+\.\d+)").expect("Invalid regex pattern"),
        }
    }

    /// Find the first match in `name`.
    pub(crate) fn find<'a>(&self, name: &'a str) -> Option<VersionMatch<'a>> {
        let caps = self.re.captures(name)?;
        let version = caps.get(1)?;
        Some(VersionMatch {
            version: version.as_str(),
            prefix: strip_version_marker(&name[..version.start()]),
        })
    }
}

/// Drop a trailing `v` that starts a word.
fn strip_version_marker(text: &str) -> &str {
    match text.strip_suffix('v') {
        Some(rest)
            if rest
                .chars()
                .next_back()
                .map_or(true, |c| c == '_' || c == '-' || c.is_whitespace()) =>
        {
            rest
        }
        _ => text,
    }
}
