mod base;
mod fs_ops;
mod link;
mod mirror;
mod types;

pub use base::{BaseResolution, infer_base};
pub use link::link_skill;
pub use mirror::{discover_skill_dirs, mirror};
pub use types::{
    LinkEntry, LinkOptions, LinkOutcome, LinkReport, MirrorOptions, MirrorReport, MirrorStrategy,
    SkillDir, TargetReport,
};
