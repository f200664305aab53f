//! Split changed files into source and test groups by path.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::git::ChangedFile;

/// Paths matching any of these are test files.
static TEST_PATH_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\.test\.(ts|js|tsx|jsx)$",
        r"\.spec\.(ts|js|tsx|jsx)$",
        r"__tests__/",
        r"\.test/",
        r"\.spec/",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("test path pattern must compile"))
    .collect()
});

/// Changed files partitioned by role, each group in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileCategories {
    pub non_test_files: Vec<ChangedFile>,
    pub test_files: Vec<ChangedFile>,
}

impl FileCategories {
    pub fn is_empty(&self) -> bool {
        self.non_test_files.is_empty() && self.test_files.is_empty()
    }
}

pub fn is_test_file(path: &str) -> bool {
    TEST_PATH_PATTERNS.iter().any(|re| re.is_match(path))
}

/// Partition `files` into non-test and test groups. Every input file lands
/// in exactly one group.
pub fn categorize(files: &[ChangedFile]) -> FileCategories {
    let (test_files, non_test_files) = files
        .iter()
        .cloned()
        .partition(|f| is_test_file(&f.path));

    FileCategories {
        non_test_files,
        test_files,
    }
}
