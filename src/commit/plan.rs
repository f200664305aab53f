//! The commits a run is about to create.

use crate::git::ChangedFile;

/// Files and messages for the source commit and the test commit.
///
/// A message is empty exactly when its file group is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitPlan {
    pub non_test_files: Vec<ChangedFile>,
    pub test_files: Vec<ChangedFile>,
    pub commit_message: String,
    pub test_commit_message: String,
}

impl CommitPlan {
    pub fn has_source_commit(&self) -> bool {
        !self.non_test_files.is_empty()
    }

    pub fn has_test_commit(&self) -> bool {
        !self.test_files.is_empty()
    }

    /// Number of commits the plan will create (0, 1 or 2).
    pub fn commit_count(&self) -> usize {
        usize::from(self.has_source_commit()) + usize::from(self.has_test_commit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::FileStatus;

    #[test]
    fn test_commit_count() {
        let mut plan = CommitPlan::default();
        assert_eq!(plan.commit_count(), 0);

        plan.test_files.push(ChangedFile::new("a.test.ts", FileStatus::Untracked));
        plan.test_commit_message = "chore: test files for recent changes".to_string();
        assert_eq!(plan.commit_count(), 1);
        assert!(!plan.has_source_commit());

        plan.non_test_files.push(ChangedFile::new("a.ts", FileStatus::Modified));
        plan.commit_message = "feat: add a".to_string();
        assert_eq!(plan.commit_count(), 2);
    }
}
