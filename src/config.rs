use crate::error::{Result, SkillLinksError};
use std::env;
use std::path::{Path, PathBuf};

/// Directory component that marks where a project's skills live.
pub const SENTINEL_DIR: &str = ".agents";
pub const SKILLS_DIR: &str = "skills";
pub const AGENT_DIR: &str = ".agent";
pub const CLAUDE_DIR: &str = ".claude";
pub const GEMINI_DIR: &str = ".gemini";
pub const ANTIGRAVITY_DIR: &str = "antigravity";
pub const GLOBAL_SKILLS_DIR: &str = "global_skills";
pub const COMMON_DIR: &str = "common";

/// Process-wide inputs, resolved once at startup and passed down explicitly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Context {
    pub cwd: PathBuf,
    pub home: PathBuf,
}

impl Context {
    pub fn new(cwd: impl Into<PathBuf>, home: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            home: home.into(),
        }
    }

    pub fn from_env() -> Result<Self> {
        let cwd = env::current_dir()?;
        let home = dirs::home_dir().ok_or(SkillLinksError::HomeDirNotFound)?;
        Ok(Self { cwd, home })
    }

    /// `<cwd>/common/.agent/skills` and `<cwd>/common/.claude/skills`.
    pub fn link_targets(&self) -> Vec<PathBuf> {
        let common = self.cwd.join(COMMON_DIR);
        project_targets(&common)
    }

    pub fn global_source(&self) -> PathBuf {
        self.home.join(SENTINEL_DIR).join(SKILLS_DIR)
    }

    pub fn global_targets(&self) -> Vec<PathBuf> {
        vec![
            self.home.join(CLAUDE_DIR).join(SKILLS_DIR),
            self.home
                .join(GEMINI_DIR)
                .join(ANTIGRAVITY_DIR)
                .join(GLOBAL_SKILLS_DIR),
        ]
    }
}

/// `<base>/.agent/skills` and `<base>/.claude/skills`.
pub fn project_targets(base: &Path) -> Vec<PathBuf> {
    vec![
        base.join(AGENT_DIR).join(SKILLS_DIR),
        base.join(CLAUDE_DIR).join(SKILLS_DIR),
    ]
}
