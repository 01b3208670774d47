use crate::error::{Result, SkillLinksError};
use crate::path_utils::{normalize, relative_path};
use crate::skills::fs_ops::{create_symlink, entry_exists, remove_path};
use crate::skills::types::{
    LinkEntry, MirrorOptions, MirrorReport, MirrorStrategy, SkillDir, TargetReport,
};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Makes every directory in `targets` hold exactly one relative symlink per
/// skill directory under `source_root`.
///
/// A missing source root, or a target that overlaps it, fails before any
/// target is touched. Targets are processed in order; an I/O error aborts the
/// run and leaves the targets already handled as they are.
pub fn mirror(
    source_root: &Path,
    targets: &[PathBuf],
    options: MirrorOptions,
) -> Result<MirrorReport> {
    if !source_root.exists() {
        return Err(SkillLinksError::SourceNotFound {
            path: source_root.to_path_buf(),
        });
    }
    if targets.is_empty() {
        return Err(SkillLinksError::NoTargets);
    }
    ensure_disjoint(source_root, targets)?;

    let skills = discover_skill_dirs(source_root)?;
    let mut report = MirrorReport {
        source: source_root.to_path_buf(),
        targets: Vec::with_capacity(targets.len()),
    };

    for dir in targets {
        let target = match (options.dry_run, options.strategy) {
            (true, _) => Ok(plan_target(dir, &skills)),
            (false, MirrorStrategy::ClearAndRecreate) => rebuild_target(dir, &skills),
            (false, MirrorStrategy::Staged) => swap_in_target(dir, &skills),
        }
        .map_err(|source| SkillLinksError::TargetIo {
            path: dir.clone(),
            source,
        })?;
        report.targets.push(target);
    }

    Ok(report)
}

/// Immediate subdirectories of `source_root`, sorted by name. Symlinks that
/// point at directories count; regular files are skipped.
pub fn discover_skill_dirs(source_root: &Path) -> Result<Vec<SkillDir>> {
    let mut skills = Vec::new();
    for entry in fs::read_dir(source_root)? {
        let entry = entry?;
        let path = entry.path();
        if !fs::metadata(&path)?.is_dir() {
            continue;
        }
        skills.push(SkillDir {
            name: entry.file_name(),
            path,
        });
    }
    skills.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(skills)
}

/// Clearing a target that is, holds, or sits inside the source would destroy
/// the skills themselves.
fn ensure_disjoint(source_root: &Path, targets: &[PathBuf]) -> Result<()> {
    let source = fs::canonicalize(source_root)?;
    for dir in targets {
        let target = resolve_parent(dir);
        if source.starts_with(&target) || target.starts_with(&source) {
            return Err(SkillLinksError::TargetOverlapsSource {
                target: dir.clone(),
                source_root: source_root.to_path_buf(),
            });
        }
    }
    Ok(())
}

/// Canonicalizes the parent only, so a target that is itself a symlink is
/// compared by where it lives, not where it points.
fn resolve_parent(dir: &Path) -> PathBuf {
    let dir = normalize(dir);
    if let (Some(parent), Some(name)) = (dir.parent(), dir.file_name()) {
        if let Ok(parent) = fs::canonicalize(parent) {
            return parent.join(name);
        }
    }
    dir
}

fn planned_links(dir: &Path, skills: &[SkillDir]) -> Vec<LinkEntry> {
    skills
        .iter()
        .map(|skill| LinkEntry {
            name: skill.name.clone(),
            link_path: dir.join(&skill.name),
            relative_target: relative_path(dir, &skill.path),
        })
        .collect()
}

fn plan_target(dir: &Path, skills: &[SkillDir]) -> TargetReport {
    let cleared = entry_exists(dir);
    if cleared {
        println!("{}", t!("mirror.cleaning", path = dir.display()));
    }
    println!("{}", t!("mirror.creating_dir", path = dir.display()));
    let links = planned_links(dir, skills);
    for link in &links {
        print_link(link);
    }
    TargetReport {
        dir: dir.to_path_buf(),
        cleared,
        links,
    }
}

fn rebuild_target(dir: &Path, skills: &[SkillDir]) -> io::Result<TargetReport> {
    let cleared = entry_exists(dir);
    if cleared {
        println!("{}", t!("mirror.cleaning", path = dir.display()));
        remove_path(dir)?;
    }
    println!("{}", t!("mirror.creating_dir", path = dir.display()));
    fs::create_dir_all(dir)?;

    let links = planned_links(dir, skills);
    write_links(dir, &links)?;
    Ok(TargetReport {
        dir: dir.to_path_buf(),
        cleared,
        links,
    })
}

fn swap_in_target(dir: &Path, skills: &[SkillDir]) -> io::Result<TargetReport> {
    let staging = sibling_path(dir, "staging");
    let previous = sibling_path(dir, "previous");
    if let Some(parent) = dir.parent() {
        fs::create_dir_all(parent)?;
    }
    // Leftovers from an interrupted run.
    for leftover in [&staging, &previous] {
        if entry_exists(leftover) {
            remove_path(leftover)?;
        }
    }

    println!("{}", t!("mirror.staging", path = staging.display()));
    // Link targets are computed from the final location; the staging
    // directory shares its parent, so the relative paths stay valid.
    let links = planned_links(dir, skills);
    if let Err(err) = fs::create_dir(&staging).and_then(|()| write_links(&staging, &links)) {
        discard(&staging);
        return Err(err);
    }

    let cleared = entry_exists(dir);
    if cleared {
        println!("{}", t!("mirror.swapping", path = dir.display()));
        if let Err(err) = fs::rename(dir, &previous) {
            discard(&staging);
            return Err(err);
        }
        if let Err(err) = fs::rename(&staging, dir) {
            let _ = fs::rename(&previous, dir);
            discard(&staging);
            return Err(err);
        }
        remove_path(&previous)?;
    } else {
        println!("{}", t!("mirror.creating_dir", path = dir.display()));
        if let Err(err) = fs::rename(&staging, dir) {
            discard(&staging);
            return Err(err);
        }
    }

    Ok(TargetReport {
        dir: dir.to_path_buf(),
        cleared,
        links,
    })
}

/// Best-effort cleanup on an error path; the original error is what matters.
fn discard(path: &Path) {
    if entry_exists(path) {
        let _ = remove_path(path);
    }
}

fn write_links(dir: &Path, links: &[LinkEntry]) -> io::Result<()> {
    for link in links {
        print_link(link);
        create_symlink(&link.relative_target, &dir.join(&link.name))?;
    }
    Ok(())
}

fn print_link(link: &LinkEntry) {
    println!(
        "{}",
        t!(
            "mirror.creating_link",
            link = link.link_path.display(),
            target = link.relative_target.display()
        )
    );
}

/// `.<name>.<purpose>` next to `dir`. The name is fixed so the next run finds
/// what a crashed run left behind.
fn sibling_path(dir: &Path, purpose: &str) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(dir.file_name().unwrap_or_else(|| "target".as_ref()));
    name.push(".");
    name.push(purpose);
    dir.with_file_name(name)
}
