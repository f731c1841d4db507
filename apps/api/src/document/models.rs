#![allow(dead_code)]

//! Versioned resume document model.
//!
//! Two wire shapes coexist. `ResumeV1` is the legacy flat record early
//! clients exported (camelCase keys, fixed top-level sections). `ResumeV2` is
//! the block-oriented document everything downstream consumes: an ordered
//! list of typed, titled blocks. V1 enters the system only to be converted —
//! it is never written back.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// V1 — legacy flat record
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkExperienceItem {
    /// Entry ids are opaque client-generated strings; legacy exports may omit them.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub technologies: String,
}

/// The legacy flat resume record. `personalInfo` is the only hard requirement;
/// every other section tolerates absence so that partially-filled legacy
/// exports still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeV1 {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub work_experience: Vec<WorkExperienceItem>,
    #[serde(default)]
    pub education: Vec<EducationItem>,
    #[serde(default)]
    pub projects: Vec<ProjectItem>,
    #[serde(default)]
    pub skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// V2 — block-oriented document
// ────────────────────────────────────────────────────────────────────────────

/// The literal `version` value every V2 document carries.
pub const RESUME_V2_VERSION: u32 = 2;

/// Field mapping carried by an `object` block (personal info).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub photo: String,
}

/// One record of a `list` block (work / education / project entries).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub highlight: String,
}

/// A titled, typed section of a V2 document.
///
/// The `type` tag discriminates the payload shape, so a block with a
/// mismatched tag/payload pair cannot be constructed or deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResumeBlock {
    Object { title: String, data: PersonalFields },
    Text { title: String, data: String },
    List { title: String, data: Vec<ListEntry> },
}

impl ResumeBlock {
    pub fn title(&self) -> &str {
        match self {
            ResumeBlock::Object { title, .. } => title,
            ResumeBlock::Text { title, .. } => title,
            ResumeBlock::List { title, .. } => title,
        }
    }

    pub fn block_type(&self) -> &'static str {
        match self {
            ResumeBlock::Object { .. } => "object",
            ResumeBlock::Text { .. } => "text",
            ResumeBlock::List { .. } => "list",
        }
    }
}

/// Block-oriented resume document. Block order is significant — it is the
/// section order of the rendered document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeV2 {
    pub version: u32,
    pub blocks: Vec<ResumeBlock>,
}

impl ResumeV2 {
    pub fn new(blocks: Vec<ResumeBlock>) -> Self {
        Self {
            version: RESUME_V2_VERSION,
            blocks,
        }
    }

    /// Returns the first block with the given title, if any.
    pub fn block_titled(&self, title: &str) -> Option<&ResumeBlock> {
        self.blocks.iter().find(|b| b.title() == title)
    }
}
