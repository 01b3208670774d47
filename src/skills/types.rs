use std::ffi::OsString;
use std::path::PathBuf;

/// How a full mirror swaps the old link set for the new one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MirrorStrategy {
    /// Delete the target, recreate it, then link every skill.
    #[default]
    ClearAndRecreate,
    /// Build the links in a hidden sibling and rename it into place.
    Staged,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MirrorOptions {
    pub strategy: MirrorStrategy,
    pub dry_run: bool,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LinkOptions {
    pub dry_run: bool,
}

/// A skill directory found directly under a source root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillDir {
    pub name: OsString,
    pub path: PathBuf,
}

/// One symlink placed (or planned) in a target directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkEntry {
    pub name: OsString,
    pub link_path: PathBuf,
    pub relative_target: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetReport {
    pub dir: PathBuf,
    /// The directory existed and was removed before relinking.
    pub cleared: bool,
    pub links: Vec<LinkEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MirrorReport {
    pub source: PathBuf,
    pub targets: Vec<TargetReport>,
}

impl MirrorReport {
    pub fn link_count(&self) -> usize {
        self.targets.iter().map(|target| target.links.len()).sum()
    }
}

#[derive(Debug)]
pub enum LinkOutcome {
    Linked {
        entry: LinkEntry,
        /// An older symlink with the same name was removed first.
        replaced: bool,
        created_dir: bool,
    },
    /// A real file or directory already holds the link name.
    Conflict { link_path: PathBuf },
    Failed { dir: PathBuf, error: std::io::Error },
}

#[derive(Debug)]
pub struct LinkReport {
    pub skill_name: OsString,
    pub outcomes: Vec<LinkOutcome>,
}

impl LinkReport {
    pub fn linked(&self) -> impl Iterator<Item = &LinkEntry> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            LinkOutcome::Linked { entry, .. } => Some(entry),
            _ => None,
        })
    }

    pub fn conflicts(&self) -> impl Iterator<Item = &PathBuf> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            LinkOutcome::Conflict { link_path } => Some(link_path),
            _ => None,
        })
    }

    pub fn failure_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, LinkOutcome::Failed { .. }))
            .count()
    }
}
