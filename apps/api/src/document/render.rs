//! Renders a V2 document as structured Markdown.
//!
//! Output follows block order. Blocks with nothing to show (an empty text
//! body, an empty list) are skipped rather than rendered as bare headings.

use crate::document::models::{ListEntry, PersonalFields, ResumeBlock, ResumeV2};

pub fn render_markdown(doc: &ResumeV2) -> String {
    let mut md = String::new();

    for block in &doc.blocks {
        match block {
            ResumeBlock::Object { title, data } => render_object(&mut md, title, data),
            ResumeBlock::Text { title, data } => render_text(&mut md, title, data),
            ResumeBlock::List { title, data } => render_list(&mut md, title, data),
        }
    }

    md
}

fn render_object(md: &mut String, title: &str, data: &PersonalFields) {
    md.push_str(&format!("## {title}\n\n"));
    // Display labels for the personal-info fields, in render order.
    let fields = [
        ("姓名", &data.name),
        ("职位", &data.title),
        ("邮箱", &data.email),
        ("电话", &data.phone),
        ("城市", &data.location),
    ];
    for (label, value) in fields {
        if !value.is_empty() {
            md.push_str(&format!("- **{label}**：{value}\n"));
        }
    }
    md.push('\n');
}

fn render_text(md: &mut String, title: &str, data: &str) {
    if data.is_empty() {
        return;
    }
    md.push_str(&format!("## {title}\n\n{data}\n\n"));
}

fn render_list(md: &mut String, title: &str, entries: &[ListEntry]) {
    if entries.is_empty() {
        return;
    }
    md.push_str(&format!("## {title}\n\n"));
    for entry in entries {
        md.push_str(&format!("### {}", entry.name));
        if !entry.time.is_empty() {
            md.push_str(&format!("（{}）", entry.time));
        }
        md.push('\n');
        if !entry.description.is_empty() {
            md.push_str(&entry.description);
            md.push('\n');
        }
        if !entry.highlight.is_empty() {
            md.push_str(&format!("**{}**\n", entry.highlight));
        }
        md.push('\n');
    }
}
