use crate::utils::error::SiteError;
use crate::utils::validation::validate_range;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub tagline: String,
    pub summary: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub email_link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRating {
    pub name: String,
    pub proficiency: u8,
}

/// Ordered skill → proficiency mapping. Names are unique, values stay in
/// [0,100], insertion order is preserved so the chart renders stably.
/// Out-of-range or duplicate entries are rejected when the catalog loads,
/// never clamped.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<SkillRating>", into = "Vec<SkillRating>")]
pub struct SkillRatings {
    entries: Vec<SkillRating>,
}

impl SkillRatings {
    pub const MAX_PROFICIENCY: u8 = 100;

    pub fn new(entries: Vec<SkillRating>) -> Result<Self, SiteError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.name.trim().is_empty() {
                return Err(SiteError::InvalidContentError {
                    field: "skills".to_string(),
                    value: entry.name.clone(),
                    reason: "Skill name cannot be empty".to_string(),
                });
            }
            validate_range(
                &format!("skills.{}", entry.name),
                entry.proficiency,
                0,
                Self::MAX_PROFICIENCY,
            )?;
            if !seen.insert(entry.name.clone()) {
                return Err(SiteError::InvalidContentError {
                    field: "skills".to_string(),
                    value: entry.name.clone(),
                    reason: "Duplicate skill name".to_string(),
                });
            }
        }
        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillRating> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<SkillRating>> for SkillRatings {
    type Error = SiteError;

    fn try_from(entries: Vec<SkillRating>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<SkillRatings> for Vec<SkillRating> {
    fn from(ratings: SkillRatings) -> Self {
        ratings.entries
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub duration: String,
    pub position: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub results: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectGroup {
    pub title: String,
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub years: String,
    pub score: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub level: String,
}

/// Which resume file the site publishes. Resolves the historical pdf/docx
/// split by configuration instead of duplicating the whole page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeVariant {
    #[default]
    Pdf,
    Docx,
}

impl ResumeVariant {
    pub fn extension(&self) -> &'static str {
        match self {
            ResumeVariant::Pdf => "pdf",
            ResumeVariant::Docx => "docx",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ResumeVariant::Pdf => "application/pdf",
            ResumeVariant::Docx => "application/octet-stream",
        }
    }
}

impl FromStr for ResumeVariant {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pdf" => Ok(ResumeVariant::Pdf),
            "docx" => Ok(ResumeVariant::Docx),
            other => Err(SiteError::InvalidConfigValueError {
                field: "resume_format".to_string(),
                value: other.to_string(),
                reason: "Expected 'pdf' or 'docx'".to_string(),
            }),
        }
    }
}

/// The navigable sections of the page. Exactly one is active per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    Skills,
    Experience,
    Projects,
    Education,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Education,
        Section::Contact,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "🏠 Home",
            Section::Skills => "🛠 Skills",
            Section::Experience => "💼 Experience",
            Section::Projects => "🚀 Projects",
            Section::Education => "🎓 Education",
            Section::Contact => "📩 Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Home => "home",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Education => "education",
            Section::Contact => "contact",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Section {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "home" => Ok(Section::Home),
            "skills" => Ok(Section::Skills),
            "experience" => Ok(Section::Experience),
            "projects" => Ok(Section::Projects),
            "education" => Ok(Section::Education),
            "contact" => Ok(Section::Contact),
            other => Err(SiteError::InvalidConfigValueError {
                field: "section".to_string(),
                value: other.to_string(),
                reason: "Unknown section name".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MessageSubject {
    #[default]
    JobOpportunity,
    Collaboration,
    Question,
    Other,
}

impl fmt::Display for MessageSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MessageSubject::JobOpportunity => "Job Opportunity",
            MessageSubject::Collaboration => "Collaboration",
            MessageSubject::Question => "Question",
            MessageSubject::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: MessageSubject,
    pub message: String,
}

/// A fully resolved asset payload. Nothing is ever partially loaded: either
/// the whole payload is here, or the caller gets `Absent` with a reason.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetPayload {
    Json(serde_json::Value),
    Bytes(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssetResult {
    Present(AssetPayload),
    Absent { reason: String },
}

impl AssetResult {
    pub fn absent(reason: impl Into<String>) -> Self {
        AssetResult::Absent {
            reason: reason.into(),
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, AssetResult::Present(_))
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            AssetResult::Present(AssetPayload::Json(value)) => Some(value),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            AssetResult::Present(AssetPayload::Bytes(bytes)) => Some(bytes),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentCatalog {
    pub identity: Identity,
    pub contact: ContactInfo,
    pub social: SocialLinks,
    pub skills: SkillRatings,
    #[serde(default)]
    pub skill_groups: Vec<SkillGroup>,
    pub experience: Vec<ExperienceEntry>,
    pub project_groups: Vec<ProjectGroup>,
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub resume_variant: ResumeVariant,
    #[serde(default)]
    pub footer: String,
}
