use std::fs;
use std::io;
use std::path::Path;

/// True when `path` itself is a symlink, dangling or not.
pub fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false)
}

/// True when something occupies `path`, including a dangling symlink.
pub fn entry_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Removes whatever sits at `path`. A symlinked directory loses only the link.
pub fn remove_path(path: &Path) -> io::Result<()> {
    let meta = fs::symlink_metadata(path)?;
    if meta.file_type().is_symlink() || meta.is_file() {
        fs::remove_file(path)?;
    } else if meta.is_dir() {
        fs::remove_dir_all(path)?;
    }
    Ok(())
}

#[cfg(unix)]
pub fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
pub fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    // Relative targets are resolved against the link's directory here too.
    let resolved = link.parent().map(|dir| dir.join(target));
    match resolved {
        Some(resolved) if resolved.is_file() => std::os::windows::fs::symlink_file(target, link),
        _ => std::os::windows::fs::symlink_dir(target, link),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_remove_path_keeps_symlinked_directory_contents() {
        let temp = TempDir::new().expect("temp dir");
        let real = temp.path().join("real");
        fs::create_dir_all(&real).expect("real dir");
        fs::write(real.join("SKILL.md"), "# real").expect("write");
        let link = temp.path().join("link");
        create_symlink(&real, &link).expect("symlink");

        remove_path(&link).expect("remove link");
        assert!(!entry_exists(&link));
        assert!(real.join("SKILL.md").exists());
    }

    #[test]
    fn test_dangling_symlink_still_exists() {
        let temp = TempDir::new().expect("temp dir");
        let link = temp.path().join("dangling");
        create_symlink(&temp.path().join("missing"), &link).expect("symlink");

        assert!(!link.exists());
        assert!(entry_exists(&link));
        assert!(is_symlink(&link));
    }
}
