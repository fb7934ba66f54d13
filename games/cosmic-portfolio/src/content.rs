use serde::{Deserialize, Serialize};

/// Portfolio data bundled into the binary.
const BUNDLED_JSON: &str = include_str!("../assets/portfolio.json");

/// The read-only résumé: one planet per section plus the profile behind the sun.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    /// Ordered sections. Order fixes each planet's orbit slot.
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub profile: Profile,
    /// Floating label above the sun.
    #[serde(default = "default_sun_label")]
    pub sun_label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Stable identifier (e.g., "home", "skills").
    pub id: String,
    /// Display name used for the panel title and hover tooltip.
    pub name: String,
    /// One-line subtitle under the panel title.
    #[serde(default)]
    pub short: String,
    #[serde(default)]
    pub content: SectionContent,
}

/// Every field is optional; a section renders whatever it carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionContent {
    pub headline: Option<String>,
    pub sub_headline: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
    pub skills_top: Vec<String>,
    pub skills_technical: Vec<String>,
    pub skills_misc: Vec<String>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub certifications: Vec<String>,
    pub contact: Option<Contact>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub period: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
    pub address: Option<String>,
}

/// Call-to-action modal behind the sun.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub linkedin_url: String,
    /// Host-relative image path.
    pub portrait: String,
}

fn default_sun_label() -> String {
    "The Cosmic Dev".to_string()
}

impl PortfolioContent {
    /// Parse content from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The content shipped with the game.
    pub fn bundled() -> Result<Self, serde_json::Error> {
        Self::from_json(BUNDLED_JSON)
    }

    /// Look up a section by id. Unknown ids yield `None`.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_parses() {
        let content = PortfolioContent::bundled().unwrap();
        let ids: Vec<&str> = content.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["home", "skills", "experience", "education", "contact"]);
        assert_eq!(content.profile.linkedin_url, "https://www.linkedin.com/in/kushmane/");
        assert_eq!(content.sun_label, "The Cosmic Dev");
    }

    #[test]
    fn bundled_sections_carry_their_fields() {
        let content = PortfolioContent::bundled().unwrap();
        let home = &content.section("home").unwrap().content;
        assert_eq!(home.headline.as_deref(), Some("Pirapat Thananopparit"));
        assert_eq!(content.section("skills").unwrap().content.skills_top.len(), 5);
        let exp = &content.section("experience").unwrap().content.experience;
        assert_eq!(exp.len(), 3);
        assert_eq!(exp[0].company, "The Stock Exchange of Thailand");
        let contact = content.section("contact").unwrap().content.contact.as_ref().unwrap();
        assert_eq!(contact.email.as_deref(), Some("flow2dacode@gmail.com"));
    }

    #[test]
    fn parse_minimal_content() {
        let json = r#"{ "sections": [ { "id": "about", "name": "About" } ] }"#;
        let content = PortfolioContent::from_json(json).unwrap();
        assert_eq!(content.len(), 1);
        assert_eq!(content.sections[0].short, "");
        assert!(content.sections[0].content.experience.is_empty());
        assert_eq!(content.sun_label, "The Cosmic Dev");
    }

    #[test]
    fn unknown_ids_are_absent() {
        let content = PortfolioContent::bundled().unwrap();
        assert!(content.section("blog").is_none());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(PortfolioContent::from_json("{ \"sections\": 5 }").is_err());
    }
}
