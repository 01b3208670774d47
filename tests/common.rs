#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn make_skill(root: &Path, name: &str) -> PathBuf {
    let dir = root.join(name);
    fs::create_dir_all(&dir).expect("create skill dir");
    fs::write(dir.join("SKILL.md"), format!("---\nname: {name}\n---\n")).expect("write SKILL.md");
    dir
}

pub fn entry_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|entry| {
            entry
                .expect("dir entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}

pub fn assert_symlink(path: &Path) {
    let meta = fs::symlink_metadata(path)
        .unwrap_or_else(|e| panic!("missing entry {}: {e}", path.display()));
    assert!(
        meta.file_type().is_symlink(),
        "{} is not a symlink",
        path.display()
    );
}

/// Resolves a link's raw target against the link's own directory.
pub fn resolve_link(link: &Path) -> PathBuf {
    let raw = fs::read_link(link).expect("read link");
    assert!(raw.is_relative(), "{} is not relative", raw.display());
    let dir = link.parent().expect("link parent");
    fs::canonicalize(dir.join(raw)).expect("canonicalize link target")
}

pub fn canonical(path: &Path) -> PathBuf {
    fs::canonicalize(path).expect("canonicalize")
}

/// A scratch project with a `home/` and a `work/` directory.
pub struct Workspace {
    pub temp: TempDir,
    pub home: PathBuf,
    pub work: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("temp dir");
        let root = canonical(temp.path());
        let home = root.join("home");
        let work = root.join("work");
        fs::create_dir_all(&home).expect("home dir");
        fs::create_dir_all(&work).expect("work dir");
        Self { temp, home, work }
    }
}
