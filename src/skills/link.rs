use crate::error::{Result, SkillLinksError};
use crate::path_utils::relative_path;
use crate::skills::fs_ops::{create_symlink, entry_exists, is_symlink, remove_path};
use crate::skills::types::{LinkEntry, LinkOptions, LinkOutcome, LinkReport};
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Places a relative symlink to `skill_path` in each of `targets`, named
/// after the skill's base name.
///
/// Existing symlinks with that name are replaced. A real file or directory
/// with that name is left alone and reported as a conflict; I/O failures are
/// reported per target. Neither stops the remaining targets.
pub fn link_skill(
    skill_path: &Path,
    targets: &[PathBuf],
    options: LinkOptions,
) -> Result<LinkReport> {
    if !skill_path.exists() {
        return Err(SkillLinksError::PathNotFound {
            path: skill_path.to_path_buf(),
        });
    }
    if targets.is_empty() {
        return Err(SkillLinksError::NoTargets);
    }
    let skill_name = skill_path
        .file_name()
        .map(OsStr::to_os_string)
        .ok_or_else(|| SkillLinksError::PathNotFound {
            path: skill_path.to_path_buf(),
        })?;

    let mut outcomes = Vec::with_capacity(targets.len());
    for dir in targets {
        let outcome = match link_into(skill_path, &skill_name, dir, options) {
            Ok(outcome) => outcome,
            Err(error) => {
                eprintln!(
                    "{}",
                    t!("link.failed", path = dir.display(), error = error)
                );
                LinkOutcome::Failed {
                    dir: dir.clone(),
                    error,
                }
            }
        };
        outcomes.push(outcome);
    }

    Ok(LinkReport {
        skill_name,
        outcomes,
    })
}

fn link_into(
    skill_path: &Path,
    skill_name: &OsStr,
    dir: &Path,
    options: LinkOptions,
) -> io::Result<LinkOutcome> {
    let created_dir = !dir.exists();
    if created_dir {
        println!("{}", t!("link.creating_dir", path = dir.display()));
        if !options.dry_run {
            fs::create_dir_all(dir)?;
        }
    }

    let link_path = dir.join(skill_name);
    let relative_target = relative_path(dir, skill_path);

    let mut replaced = false;
    if entry_exists(&link_path) {
        if !is_symlink(&link_path) {
            eprintln!("{}", t!("link.not_symlink", path = link_path.display()));
            return Ok(LinkOutcome::Conflict { link_path });
        }
        println!("{}", t!("link.removing_link", path = link_path.display()));
        if !options.dry_run {
            remove_path(&link_path)?;
        }
        replaced = true;
    }

    println!(
        "{}",
        t!(
            "link.creating_link",
            link = link_path.display(),
            target = relative_target.display()
        )
    );
    if !options.dry_run {
        create_symlink(&relative_target, &link_path)?;
    }

    Ok(LinkOutcome::Linked {
        entry: LinkEntry {
            name: skill_name.to_os_string(),
            link_path,
            relative_target,
        },
        replaced,
        created_dir,
    })
}
