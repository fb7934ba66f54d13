//! Structured views of overlay content, serialized to JSON for the host DOM.

use serde::Serialize;

use crate::content::{Profile, Section, SectionContent};

/// How the host should weight a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Large headline.
    Title,
    /// Accent-colored lead line.
    Accent,
    Body,
    /// Small, dimmed metadata (locations, periods).
    Muted,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading { text: String },
    Paragraph { text: String, tone: Tone },
    List { items: Vec<String> },
    Field { label: String, value: String },
}

impl Block {
    fn heading(text: impl Into<String>) -> Self {
        Block::Heading { text: text.into() }
    }

    fn paragraph(text: impl Into<String>, tone: Tone) -> Self {
        Block::Paragraph { text: text.into(), tone }
    }

    fn list(items: &[String]) -> Self {
        Block::List { items: items.to_vec() }
    }
}

/// One section's detail panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub blocks: Vec<Block>,
}

impl PanelView {
    /// Render a section. Blocks follow field order: intro, skills, experience,
    /// education, certifications, contact. Empty fields render nothing.
    pub fn render(section: &Section) -> Self {
        let mut blocks = Vec::new();
        let c = &section.content;
        intro_blocks(c, &mut blocks);
        skill_blocks(c, &mut blocks);
        experience_blocks(c, &mut blocks);
        education_blocks(c, &mut blocks);
        contact_blocks(c, &mut blocks);
        Self {
            id: section.id.clone(),
            title: section.name.clone(),
            subtitle: section.short.clone(),
            blocks,
        }
    }
}

fn intro_blocks(c: &SectionContent, out: &mut Vec<Block>) {
    if let Some(h) = &c.headline {
        out.push(Block::paragraph(h, Tone::Title));
    }
    if let Some(s) = &c.sub_headline {
        out.push(Block::paragraph(s, Tone::Accent));
    }
    if let Some(l) = &c.location {
        out.push(Block::paragraph(l, Tone::Muted));
    }
    if let Some(s) = &c.summary {
        out.push(Block::paragraph(s, Tone::Body));
    }
}

fn skill_blocks(c: &SectionContent, out: &mut Vec<Block>) {
    for (heading, items) in [
        ("Top Skills", &c.skills_top),
        ("Technical Expertise", &c.skills_technical),
        ("Emerging Technologies", &c.skills_misc),
    ] {
        if !items.is_empty() {
            out.push(Block::heading(heading));
            out.push(Block::list(items));
        }
    }
}

fn experience_blocks(c: &SectionContent, out: &mut Vec<Block>) {
    for exp in &c.experience {
        out.push(Block::heading(&exp.company));
        out.push(Block::paragraph(format!("{} | {}", exp.role, exp.period), Tone::Muted));
        if !exp.bullets.is_empty() {
            out.push(Block::list(&exp.bullets));
        }
    }
}

fn education_blocks(c: &SectionContent, out: &mut Vec<Block>) {
    if !c.education.is_empty() {
        out.push(Block::heading("Education"));
        for e in &c.education {
            out.push(Block::paragraph(&e.school, Tone::Body));
            out.push(Block::paragraph(&e.degree, Tone::Body));
            out.push(Block::paragraph(&e.period, Tone::Muted));
        }
    }
    if !c.certifications.is_empty() {
        out.push(Block::heading("Certifications"));
        out.push(Block::list(&c.certifications));
    }
}

fn contact_blocks(c: &SectionContent, out: &mut Vec<Block>) {
    let Some(contact) = &c.contact else {
        return;
    };
    let fields = [
        ("Phone", &contact.phone),
        ("Email", &contact.email),
        ("LinkedIn", &contact.linkedin),
        ("Portfolio", &contact.portfolio),
        ("Address", &contact.address),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            out.push(Block::Field {
                label: label.to_string(),
                value: value.clone(),
            });
        }
    }
}

/// LinkedIn call-to-action modal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub name: String,
    pub tagline: String,
    pub linkedin_url: String,
    pub portrait: String,
    pub cta: String,
}

impl ProfileView {
    pub fn render(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            tagline: profile.tagline.clone(),
            linkedin_url: profile.linkedin_url.clone(),
            portrait: profile.portrait.clone(),
            cta: "View LinkedIn Profile".to_string(),
        }
    }
}

/// Everything the host DOM layer needs besides the frame buffer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlaySnapshot {
    pub panel: Option<PanelView>,
    pub profile: Option<ProfileView>,
    /// Display name of the hovered planet, for the tooltip.
    pub hovered: Option<String>,
    pub sun_label: String,
    /// World position the host projects the sun label to.
    pub sun_label_anchor: [f32; 3],
    pub touch_controls: bool,
}

impl OverlaySnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
