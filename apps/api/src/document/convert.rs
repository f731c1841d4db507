//! Legacy V1 → V2 document conversion.
//!
//! The conversion is deterministic and order-preserving: blocks are emitted in
//! the fixed section order below, restricted to non-empty sections. Position
//! (for work entries) and degree (for education) have no field of their own in
//! V2 — they are folded into the entry description text, which is what the
//! block editor expects to show.

use serde_json::Value;
use thiserror::Error;

use crate::document::detect::{classify, DocumentFormat};
use crate::document::models::{ListEntry, PersonalFields, ResumeBlock, ResumeV1, ResumeV2};

/// Section titles of converter output, in emission order.
pub const TITLE_PERSONAL_INFO: &str = "个人信息";
pub const TITLE_SUMMARY: &str = "个人总结";
pub const TITLE_WORK_EXPERIENCE: &str = "工作经历";
pub const TITLE_EDUCATION: &str = "教育背景";
pub const TITLE_PROJECTS: &str = "项目经历";
pub const TITLE_SKILLS: &str = "专业技能";

/// Joins the V1 skills list into the single skills text block.
/// Full-width enumeration comma — legacy documents round-trip through
/// templates that expect exactly this separator.
const SKILL_SEPARATOR: &str = "、";

/// The payload handed to the converter was not a well-formed V1 document.
/// Conversion fails fast instead of emitting a partial block list, so caller
/// bugs surface at the boundary rather than as half-converted documents.
#[derive(Debug, Error)]
#[error("invalid resume input: {0}")]
pub struct InvalidInputError(pub String);

/// Converts a V1 document into the block-oriented V2 shape.
///
/// Always emits the personal-info and summary blocks; work, education,
/// project and skill blocks are emitted only when their source section is
/// non-empty. Output block order never varies.
pub fn convert(doc: &ResumeV1) -> ResumeV2 {
    let mut blocks = Vec::with_capacity(6);

    blocks.push(ResumeBlock::Object {
        title: TITLE_PERSONAL_INFO.to_string(),
        data: PersonalFields {
            name: doc.personal_info.name.clone(),
            email: doc.personal_info.email.clone(),
            phone: doc.personal_info.phone.clone(),
            location: doc.personal_info.location.clone(),
            title: doc.personal_info.title.clone(),
            // V1 has no photo field; start empty.
            photo: String::new(),
        },
    });

    blocks.push(ResumeBlock::Text {
        title: TITLE_SUMMARY.to_string(),
        data: doc.summary.clone(),
    });

    if !doc.work_experience.is_empty() {
        blocks.push(ResumeBlock::List {
            title: TITLE_WORK_EXPERIENCE.to_string(),
            data: doc
                .work_experience
                .iter()
                .map(|item| ListEntry {
                    id: item.id.clone(),
                    name: item.company.clone(),
                    description: format!("职位：{}\n{}", item.position, item.description),
                    time: item.duration.clone(),
                    highlight: String::new(),
                })
                .collect(),
        });
    }

    if !doc.education.is_empty() {
        blocks.push(ResumeBlock::List {
            title: TITLE_EDUCATION.to_string(),
            data: doc
                .education
                .iter()
                .map(|item| ListEntry {
                    id: item.id.clone(),
                    name: item.school.clone(),
                    description: format!("{}\n{}", item.degree, item.description),
                    time: item.duration.clone(),
                    highlight: String::new(),
                })
                .collect(),
        });
    }

    if !doc.projects.is_empty() {
        blocks.push(ResumeBlock::List {
            title: TITLE_PROJECTS.to_string(),
            data: doc
                .projects
                .iter()
                .map(|item| ListEntry {
                    id: item.id.clone(),
                    name: item.name.clone(),
                    description: item.description.clone(),
                    time: item.duration.clone(),
                    highlight: item.technologies.clone(),
                })
                .collect(),
        });
    }

    if !doc.skills.is_empty() {
        blocks.push(ResumeBlock::Text {
            title: TITLE_SKILLS.to_string(),
            data: doc.skills.join(SKILL_SEPARATOR),
        });
    }

    ResumeV2::new(blocks)
}

/// Precondition-checked conversion from a raw decoded payload.
///
/// The caller is expected to have classified the payload already; this
/// re-checks and rejects anything that is not a well-formed V1 document with a
/// descriptive error instead of converting garbage.
pub fn convert_payload(payload: &Value) -> Result<ResumeV2, InvalidInputError> {
    match classify(payload) {
        DocumentFormat::V1 => {}
        DocumentFormat::V2 => {
            return Err(InvalidInputError(
                "payload is already a v2 document".to_string(),
            ))
        }
        DocumentFormat::Unknown => {
            return Err(InvalidInputError(
                "payload is not a recognizable v1 resume".to_string(),
            ))
        }
    }

    let doc: ResumeV1 = serde_json::from_value(payload.clone())
        .map_err(|e| InvalidInputError(format!("malformed v1 resume: {e}")))?;

    Ok(convert(&doc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::models::{
        EducationItem, PersonalInfo, ProjectItem, WorkExperienceItem,
    };
    use serde_json::json;

    fn full_v1() -> ResumeV1 {
        ResumeV1 {
            personal_info: PersonalInfo {
                name: "张伟".to_string(),
                email: "zw@example.com".to_string(),
                phone: "13800000000".to_string(),
                location: "上海".to_string(),
                title: "后端工程师".to_string(),
            },
            summary: "五年后端开发经验".to_string(),
            work_experience: vec![WorkExperienceItem {
                id: "w1".to_string(),
                company: "某科技公司".to_string(),
                position: "工程师".to_string(),
                duration: "2019.07 - 2023.06".to_string(),
                description: "负责后端".to_string(),
            }],
            education: vec![EducationItem {
                id: "e1".to_string(),
                school: "某大学".to_string(),
                degree: "本科".to_string(),
                duration: "2015 - 2019".to_string(),
                description: "计算机科学与技术".to_string(),
            }],
            projects: vec![ProjectItem {
                id: "p1".to_string(),
                name: "订单系统重构".to_string(),
                description: "拆分单体服务".to_string(),
                duration: "2021".to_string(),
                technologies: "Go / Kafka / PostgreSQL".to_string(),
            }],
            skills: vec!["Go".to_string(), "Python".to_string(), "SQL".to_string()],
        }
    }

    fn titles(doc: &ResumeV2) -> Vec<&str> {
        doc.blocks.iter().map(|b| b.title()).collect()
    }

    #[test]
    fn test_full_document_block_order() {
        let v2 = convert(&full_v1());
        assert_eq!(
            titles(&v2),
            vec![
                TITLE_PERSONAL_INFO,
                TITLE_SUMMARY,
                TITLE_WORK_EXPERIENCE,
                TITLE_EDUCATION,
                TITLE_PROJECTS,
                TITLE_SKILLS,
            ]
        );
        assert_eq!(v2.version, 2);
    }

    #[test]
    fn test_personal_info_copied_with_empty_photo() {
        let v2 = convert(&full_v1());
        match &v2.blocks[0] {
            ResumeBlock::Object { title, data } => {
                assert_eq!(title, TITLE_PERSONAL_INFO);
                assert_eq!(data.name, "张伟");
                assert_eq!(data.email, "zw@example.com");
                assert_eq!(data.phone, "13800000000");
                assert_eq!(data.location, "上海");
                assert_eq!(data.title, "后端工程师");
                assert_eq!(data.photo, "", "photo must initialize empty");
            }
            other => panic!("first block must be the personal-info object, got {other:?}"),
        }
    }

    #[test]
    fn test_work_description_folds_in_position() {
        let v2 = convert(&full_v1());
        match v2.block_titled(TITLE_WORK_EXPERIENCE) {
            Some(ResumeBlock::List { data, .. }) => {
                assert_eq!(data[0].description, "职位：工程师\n负责后端");
                assert_eq!(data[0].name, "某科技公司");
                assert_eq!(data[0].time, "2019.07 - 2023.06");
                assert_eq!(data[0].highlight, "");
            }
            other => panic!("expected work experience list block, got {other:?}"),
        }
    }

    #[test]
    fn test_education_description_folds_in_degree() {
        let v2 = convert(&full_v1());
        match v2.block_titled(TITLE_EDUCATION) {
            Some(ResumeBlock::List { data, .. }) => {
                assert_eq!(data[0].description, "本科\n计算机科学与技术");
                assert_eq!(data[0].name, "某大学");
                assert_eq!(data[0].highlight, "");
            }
            other => panic!("expected education list block, got {other:?}"),
        }
    }

    #[test]
    fn test_project_keeps_description_and_highlights_technologies() {
        let v2 = convert(&full_v1());
        match v2.block_titled(TITLE_PROJECTS) {
            Some(ResumeBlock::List { data, .. }) => {
                assert_eq!(data[0].description, "拆分单体服务");
                assert_eq!(data[0].highlight, "Go / Kafka / PostgreSQL");
            }
            other => panic!("expected projects list block, got {other:?}"),
        }
    }

    #[test]
    fn test_skills_joined_with_full_width_separator() {
        let v2 = convert(&full_v1());
        match v2.block_titled(TITLE_SKILLS) {
            Some(ResumeBlock::Text { data, .. }) => {
                assert_eq!(data, "Go、Python、SQL");
            }
            other => panic!("expected skills text block, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_sections_are_omitted_independently() {
        // Each optional section drops its own block without disturbing the rest.
        let mut doc = full_v1();
        doc.projects.clear();
        let v2 = convert(&doc);
        assert!(v2.block_titled(TITLE_PROJECTS).is_none());
        assert!(v2.block_titled(TITLE_WORK_EXPERIENCE).is_some());

        let mut doc = full_v1();
        doc.work_experience.clear();
        assert!(convert(&doc).block_titled(TITLE_WORK_EXPERIENCE).is_none());

        let mut doc = full_v1();
        doc.education.clear();
        assert!(convert(&doc).block_titled(TITLE_EDUCATION).is_none());

        let mut doc = full_v1();
        doc.skills.clear();
        assert!(convert(&doc).block_titled(TITLE_SKILLS).is_none());
    }

    #[test]
    fn test_minimal_document_emits_exactly_two_blocks() {
        let doc = ResumeV1 {
            personal_info: PersonalInfo::default(),
            summary: String::new(),
            work_experience: vec![],
            education: vec![],
            projects: vec![],
            skills: vec![],
        };
        let v2 = convert(&doc);
        assert_eq!(titles(&v2), vec![TITLE_PERSONAL_INFO, TITLE_SUMMARY]);
        // Summary block is always present, even when empty.
        match &v2.blocks[1] {
            ResumeBlock::Text { data, .. } => assert_eq!(data, ""),
            other => panic!("expected summary text block, got {other:?}"),
        }
    }

    #[test]
    fn test_entry_order_is_preserved_within_blocks() {
        let mut doc = full_v1();
        doc.work_experience.push(WorkExperienceItem {
            id: "w2".to_string(),
            company: "第二家公司".to_string(),
            position: "高级工程师".to_string(),
            duration: "2023 - 至今".to_string(),
            description: "负责架构".to_string(),
        });
        let v2 = convert(&doc);
        match v2.block_titled(TITLE_WORK_EXPERIENCE) {
            Some(ResumeBlock::List { data, .. }) => {
                assert_eq!(data[0].id, "w1");
                assert_eq!(data[1].id, "w2");
            }
            other => panic!("expected work experience list block, got {other:?}"),
        }
    }

    #[test]
    fn test_converted_output_classifies_as_v2() {
        let v2 = convert(&full_v1());
        let value = serde_json::to_value(&v2).unwrap();
        assert_eq!(classify(&value), DocumentFormat::V2);
    }

    #[test]
    fn test_convert_payload_accepts_v1_json() {
        let payload = json!({
            "personalInfo": {"name": "张伟"},
            "summary": "总结",
            "workExperience": [],
            "education": [],
            "projects": [],
            "skills": ["Rust"]
        });
        let v2 = convert_payload(&payload).unwrap();
        assert_eq!(titles(&v2), vec![TITLE_PERSONAL_INFO, TITLE_SUMMARY, TITLE_SKILLS]);
    }

    #[test]
    fn test_convert_payload_rejects_unknown() {
        let err = convert_payload(&json!({"foo": 1})).unwrap_err();
        assert!(err.to_string().contains("not a recognizable"));
    }

    #[test]
    fn test_convert_payload_rejects_v2() {
        let err = convert_payload(&json!({"version": 2, "blocks": []})).unwrap_err();
        assert!(err.to_string().contains("already a v2"));
    }

    #[test]
    fn test_convert_payload_rejects_malformed_v1() {
        // Detection keys present, but personalInfo is not an object.
        let payload = json!({
            "personalInfo": "张伟",
            "summary": "",
            "education": [],
            "projects": [],
            "skills": []
        });
        let err = convert_payload(&payload).unwrap_err();
        assert!(err.to_string().contains("malformed v1 resume"));
    }
}
