use anyhow::Result as _Result;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkillLinksError {
    #[error("Usage: {usage}")]
    Usage {
        usage: &'static str,
        example: &'static str,
    },

    #[error("Path does not exist: {}", path.display())]
    PathNotFound { path: PathBuf },

    #[error("Source directory does not exist: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Could not determine the home directory")]
    HomeDirNotFound,

    #[error("No target directories given")]
    NoTargets,

    #[error("{} overlaps the source {}", target.display(), source_root.display())]
    TargetOverlapsSource { target: PathBuf, source_root: PathBuf },

    #[error("Failed to update {}: {source}", path.display())]
    TargetIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
}

impl SkillLinksError {
    pub fn display_localized(&self) -> String {
        match self {
            SkillLinksError::Usage { usage, example } => format!(
                "{}\n{}",
                t!("errors.usage", usage = usage),
                t!("errors.usage_example", example = example)
            ),
            SkillLinksError::PathNotFound { path } => {
                t!("errors.path_not_found", path = path.display()).to_string()
            }
            SkillLinksError::SourceNotFound { path } => format!(
                "{}\n{}",
                t!("errors.source_not_found", path = path.display()),
                t!("errors.source_hint")
            ),
            SkillLinksError::HomeDirNotFound => t!("errors.home_not_found").to_string(),
            SkillLinksError::NoTargets => t!("errors.no_targets").to_string(),
            SkillLinksError::TargetOverlapsSource {
                target,
                source_root,
            } => t!(
                "errors.target_overlaps_source",
                target = target.display(),
                source = source_root.display()
            )
            .to_string(),
            SkillLinksError::TargetIo { path, source } => t!(
                "errors.target_failed",
                path = path.display(),
                error = source
            )
            .to_string(),
            SkillLinksError::Io(_) => self.to_string(),
        }
    }
}

pub type Result<T> = _Result<T, SkillLinksError>;
