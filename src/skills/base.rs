use crate::config::SENTINEL_DIR;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Where a project base came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BaseResolution {
    /// Everything before the last `.agents` component.
    Sentinel(PathBuf),
    /// No `.agents` component; the working directory stands in.
    Fallback(PathBuf),
}

impl BaseResolution {
    pub fn path(&self) -> &Path {
        match self {
            BaseResolution::Sentinel(path) | BaseResolution::Fallback(path) => path,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, BaseResolution::Fallback(_))
    }
}

pub fn infer_base(path: &Path, cwd: &Path) -> BaseResolution {
    infer_base_with(path, cwd, OsStr::new(SENTINEL_DIR))
}

fn infer_base_with(path: &Path, cwd: &Path, sentinel: &OsStr) -> BaseResolution {
    let components: Vec<Component<'_>> = path.components().collect();
    let idx = components
        .iter()
        .rposition(|component| matches!(component, Component::Normal(name) if *name == sentinel));

    let Some(idx) = idx else {
        return BaseResolution::Fallback(cwd.to_path_buf());
    };

    let base: PathBuf = components[..idx].iter().collect();
    if base.as_os_str().is_empty() {
        // `.agents/skills` (relative, nothing in front) has no base of its own.
        let root = if path.is_absolute() {
            PathBuf::from(std::path::MAIN_SEPARATOR_STR)
        } else {
            cwd.to_path_buf()
        };
        return BaseResolution::Sentinel(root);
    }
    BaseResolution::Sentinel(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_is_prefix_before_sentinel() {
        let base = infer_base(
            Path::new("/repo/common/.agents/skills"),
            Path::new("/elsewhere"),
        );
        assert_eq!(base, BaseResolution::Sentinel(PathBuf::from("/repo/common")));
    }

    #[test]
    fn test_last_sentinel_wins() {
        let base = infer_base(
            Path::new("/home/me/.agents/vendor/.agents/skills"),
            Path::new("/elsewhere"),
        );
        assert_eq!(
            base.path(),
            Path::new("/home/me/.agents/vendor"),
            "truncation happens at the last occurrence"
        );
    }

    #[test]
    fn test_sentinel_directly_under_root() {
        let base = infer_base(Path::new("/.agents/skills"), Path::new("/elsewhere"));
        assert_eq!(base, BaseResolution::Sentinel(PathBuf::from("/")));
    }

    #[test]
    fn test_missing_sentinel_falls_back_to_cwd() {
        let base = infer_base(Path::new("/repo/skills"), Path::new("/work"));
        assert!(base.is_fallback());
        assert_eq!(base.path(), Path::new("/work"));
    }

    #[test]
    fn test_similar_names_do_not_match() {
        let base = infer_base(Path::new("/repo/.agent/skills"), Path::new("/work"));
        assert!(base.is_fallback());
        let base = infer_base(Path::new("/repo/my.agents/skills"), Path::new("/work"));
        assert!(base.is_fallback());
    }

    #[test]
    fn test_custom_sentinel() {
        let base = infer_base_with(
            Path::new("/repo/tools/skills"),
            Path::new("/work"),
            OsStr::new("tools"),
        );
        assert_eq!(base, BaseResolution::Sentinel(PathBuf::from("/repo")));
    }
}
