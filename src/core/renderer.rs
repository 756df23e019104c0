use crate::core::chart::{chart_spec, ChartSpec};
use crate::core::resume::resume_handle;
use crate::domain::model::{AssetResult, ContactForm, ContentCatalog, Section};
use crate::domain::ports::MessageSender;
use crate::utils::validation::{validate_contact_form, FieldError, ValidationResult};
use std::fmt;

/// The three assets a page render may embed. Resolved by the caller through
/// `AssetFetcher`; the renderer itself performs no I/O.
#[derive(Debug, Clone, PartialEq)]
pub struct PageAssets {
    pub animation: AssetResult,
    pub portrait: AssetResult,
    pub resume: AssetResult,
}

impl PageAssets {
    /// All three assets absent with the same reason. The degraded page must
    /// still render completely.
    pub fn unavailable(reason: &str) -> Self {
        Self {
            animation: AssetResult::absent(reason),
            portrait: AssetResult::absent(reason),
            resume: AssetResult::absent(reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Heading { level: u8, text: String },
    Paragraph(String),
    Bullets(Vec<String>),
    Labeled { label: String, value: String },
    Link { label: String, href: String },
    Chart(ChartSpec),
    Animation(serde_json::Value),
    Portrait { size_bytes: usize },
    Download {
        filename: String,
        content_type: String,
        size_bytes: usize,
    },
    Notice(String),
    NavList { active: Section },
    Rule,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub section: Section,
    pub sidebar: Vec<Node>,
    pub body: Vec<Node>,
    pub footer: String,
}

/// Pure function of (catalog, active section, resolved assets) to the output
/// tree. Two calls with identical inputs produce identical pages, and the
/// page always renders fully no matter how many assets are absent.
pub fn render_page(catalog: &ContentCatalog, section: Section, assets: &PageAssets) -> Page {
    let body = match section {
        Section::Home => home_body(catalog, assets),
        Section::Skills => skills_body(catalog),
        Section::Experience => experience_body(catalog),
        Section::Projects => projects_body(catalog),
        Section::Education => education_body(catalog),
        Section::Contact => contact_body(catalog, assets),
    };

    Page {
        section,
        sidebar: sidebar(catalog, section, assets),
        body,
        footer: catalog.footer.clone(),
    }
}

fn sidebar(catalog: &ContentCatalog, active: Section, assets: &PageAssets) -> Vec<Node> {
    let mut nodes = vec![
        Node::Heading {
            level: 2,
            text: catalog.identity.name.clone(),
        },
        Node::Paragraph(catalog.identity.tagline.clone()),
    ];
    nodes.push(portrait_or_notice(assets));
    nodes.push(Node::Rule);
    nodes.push(Node::Labeled {
        label: "📧 Email".to_string(),
        value: catalog.contact.email.clone(),
    });
    nodes.push(Node::Labeled {
        label: "📞 Phone".to_string(),
        value: catalog.contact.phone.clone(),
    });
    nodes.push(Node::Labeled {
        label: "📍 Location".to_string(),
        value: catalog.contact.location.clone(),
    });
    nodes.push(Node::Rule);
    nodes.push(Node::Heading {
        level: 3,
        text: "Navigation".to_string(),
    });
    nodes.push(Node::NavList { active });
    nodes.push(Node::Rule);
    nodes.push(Node::Heading {
        level: 3,
        text: "📄 Resume Download".to_string(),
    });
    nodes.extend(resume_section(catalog, assets));
    nodes.push(Node::Rule);
    nodes.extend(social_links(catalog));
    nodes
}

fn portrait_or_notice(assets: &PageAssets) -> Node {
    match assets.portrait.as_bytes() {
        Some(bytes) => Node::Portrait {
            size_bytes: bytes.len(),
        },
        None => Node::Notice("Professional profile image coming soon".to_string()),
    }
}

// Shared by the sidebar and the contact section, same as the page always
// offered the download in both places.
fn resume_section(catalog: &ContentCatalog, assets: &PageAssets) -> Vec<Node> {
    match resume_handle(&catalog.identity, catalog.resume_variant, &assets.resume) {
        Some(handle) => vec![Node::Download {
            filename: handle.filename,
            content_type: handle.content_type.to_string(),
            size_bytes: handle.bytes.len(),
        }],
        None => vec![
            Node::Notice("Resume file could not be loaded automatically".to_string()),
            Node::Paragraph(format!(
                "Please contact me directly at {} for my resume",
                catalog.contact.email
            )),
        ],
    }
}

fn social_links(catalog: &ContentCatalog) -> Vec<Node> {
    vec![
        Node::Link {
            label: "GitHub".to_string(),
            href: catalog.social.github.clone(),
        },
        Node::Link {
            label: "LinkedIn".to_string(),
            href: catalog.social.linkedin.clone(),
        },
        Node::Link {
            label: "Email Me".to_string(),
            href: catalog.social.email_link.clone(),
        },
    ]
}

fn home_body(catalog: &ContentCatalog, assets: &PageAssets) -> Vec<Node> {
    let mut nodes = vec![
        Node::Heading {
            level: 1,
            text: format!("Hi, I'm {}", catalog.identity.name),
        },
        Node::Heading {
            level: 3,
            text: catalog.identity.tagline.clone(),
        },
        Node::Paragraph(catalog.identity.summary.clone()),
        Node::Bullets(catalog.identity.highlights.clone()),
    ];
    nodes.extend(social_links(catalog));

    // Decorative animation, with the portrait as fallback and a notice as
    // the fallback's fallback.
    match assets.animation.as_json() {
        Some(animation) => nodes.push(Node::Animation(animation.clone())),
        None => nodes.push(portrait_or_notice(assets)),
    }
    nodes
}

fn skills_body(catalog: &ContentCatalog) -> Vec<Node> {
    let mut nodes = vec![Node::Heading {
        level: 1,
        text: "🛠 Technical Skills".to_string(),
    }];
    for group in &catalog.skill_groups {
        nodes.push(Node::Heading {
            level: 3,
            text: group.title.clone(),
        });
        nodes.push(Node::Bullets(group.items.clone()));
    }
    nodes.push(Node::Rule);
    nodes.push(Node::Heading {
        level: 3,
        text: "📊 Skill Proficiency".to_string(),
    });
    nodes.push(Node::Chart(chart_spec(&catalog.skills)));
    nodes
}

fn experience_body(catalog: &ContentCatalog) -> Vec<Node> {
    let mut nodes = vec![Node::Heading {
        level: 1,
        text: "💼 Professional Experience".to_string(),
    }];
    for entry in &catalog.experience {
        nodes.push(Node::Heading {
            level: 3,
            text: format!(
                "🏢 {} | {} | {}",
                entry.company, entry.duration, entry.position
            ),
        });
        nodes.push(Node::Paragraph("Key Achievements:".to_string()));
        nodes.push(Node::Bullets(entry.achievements.clone()));
        nodes.push(Node::Paragraph("Technologies Used:".to_string()));
        nodes.push(Node::Bullets(entry.technologies.clone()));
    }
    nodes
}

fn projects_body(catalog: &ContentCatalog) -> Vec<Node> {
    let mut nodes = vec![Node::Heading {
        level: 1,
        text: "🚀 Projects".to_string(),
    }];
    for group in &catalog.project_groups {
        nodes.push(Node::Heading {
            level: 2,
            text: group.title.clone(),
        });
        for project in &group.projects {
            nodes.push(Node::Heading {
                level: 3,
                text: format!("📌 {}", project.title),
            });
            nodes.push(Node::Paragraph(project.description.clone()));
            nodes.push(Node::Paragraph("Tech Stack:".to_string()));
            nodes.push(Node::Bullets(project.tech_stack.clone()));
            if let Some(results) = &project.results {
                nodes.push(Node::Paragraph("Key Results:".to_string()));
                nodes.push(Node::Bullets(results.clone()));
            }
        }
    }
    nodes
}

fn education_body(catalog: &ContentCatalog) -> Vec<Node> {
    let mut nodes = vec![
        Node::Heading {
            level: 1,
            text: "🎓 Education".to_string(),
        },
        Node::Heading {
            level: 3,
            text: "📚 Academic Background".to_string(),
        },
    ];
    for entry in &catalog.education {
        nodes.push(Node::Paragraph(format!(
            "{} — {} ({}) | {}",
            entry.degree, entry.institution, entry.years, entry.score
        )));
    }
    if !catalog.languages.is_empty() {
        nodes.push(Node::Heading {
            level: 3,
            text: "🌍 Languages".to_string(),
        });
        nodes.push(Node::Bullets(
            catalog
                .languages
                .iter()
                .map(|language| format!("{} ({})", language.name, language.level))
                .collect(),
        ));
    }
    nodes
}

fn contact_body(catalog: &ContentCatalog, assets: &PageAssets) -> Vec<Node> {
    let mut nodes = vec![
        Node::Heading {
            level: 1,
            text: "📩 Get In Touch".to_string(),
        },
        Node::Heading {
            level: 3,
            text: "Contact Information".to_string(),
        },
        Node::Labeled {
            label: "📧 Email".to_string(),
            value: catalog.contact.email.clone(),
        },
        Node::Labeled {
            label: "📞 Phone".to_string(),
            value: catalog.contact.phone.clone(),
        },
        Node::Labeled {
            label: "📍 Location".to_string(),
            value: catalog.contact.location.clone(),
        },
        Node::Heading {
            level: 3,
            text: "Social".to_string(),
        },
    ];
    nodes.extend(social_links(catalog));
    nodes.push(Node::Heading {
        level: 3,
        text: "My Resume".to_string(),
    });
    nodes.extend(resume_section(catalog, assets));
    nodes.push(Node::Heading {
        level: 3,
        text: "Send Me a Message".to_string(),
    });
    nodes.push(Node::Bullets(vec![
        "Your Name*".to_string(),
        "Your Email*".to_string(),
        "Subject (defaults to Job Opportunity)".to_string(),
        "Your Message*".to_string(),
    ]));
    nodes
}

/// Outcome of a contact-form submission as the page reports it.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation passed and the collaborator accepted the message; the form
    /// is cleared.
    Sent { acknowledgement: String },
    /// Validation failed; the form keeps its values so the user can fix the
    /// flagged fields.
    Rejected { errors: Vec<FieldError> },
    /// The collaborator itself failed. Still not fatal to the page.
    Failed { message: String },
}

pub async fn submit_contact(form: &ContactForm, sender: &dyn MessageSender) -> SubmitOutcome {
    match validate_contact_form(form) {
        ValidationResult::Invalid(errors) => {
            tracing::debug!(count = errors.len(), "Contact form rejected");
            SubmitOutcome::Rejected { errors }
        }
        ValidationResult::Ok => match sender.send(form).await {
            Ok(()) => SubmitOutcome::Sent {
                acknowledgement: "Message sent successfully! I'll get back to you soon."
                    .to_string(),
            },
            Err(e) => {
                tracing::warn!(error = %e, "Message sender failed");
                SubmitOutcome::Failed {
                    message: e.to_string(),
                }
            }
        },
    }
}

// ---- plain-text writer ----

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.sidebar {
            write_node(f, node)?;
        }
        writeln!(f, "{}", "=".repeat(60))?;
        for node in &self.body {
            write_node(f, node)?;
        }
        writeln!(f, "{}", "-".repeat(60))?;
        writeln!(f, "{}", self.footer)
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node) -> fmt::Result {
    match node {
        Node::Heading { level, text } => {
            writeln!(f, "{} {}", "#".repeat(*level as usize), text)
        }
        Node::Paragraph(text) => writeln!(f, "{}", text),
        Node::Bullets(items) => {
            for item in items {
                writeln!(f, "- {}", item)?;
            }
            Ok(())
        }
        Node::Labeled { label, value } => writeln!(f, "{}: {}", label, value),
        Node::Link { label, href } => writeln!(f, "{} <{}>", label, href),
        Node::Chart(spec) => {
            for bar in &spec.bars {
                let width = (bar.value as usize * 30) / spec.axis_max.max(1) as usize;
                writeln!(f, "{:<28} {} {}", bar.label, "█".repeat(width), bar.text)?;
            }
            Ok(())
        }
        Node::Animation(_) => writeln!(f, "[animation]"),
        Node::Portrait { size_bytes } => writeln!(f, "[portrait image, {} bytes]", size_bytes),
        Node::Download {
            filename,
            content_type,
            size_bytes,
        } => writeln!(
            f,
            "[📄 download {} ({}, {} bytes)]",
            filename, content_type, size_bytes
        ),
        Node::Notice(text) => writeln!(f, "⚠ {}", text),
        Node::NavList { active } => {
            for section in Section::ALL {
                let marker = if section == *active { "▸" } else { " " };
                writeln!(f, "{} {}", marker, section.title())?;
            }
            Ok(())
        }
        Node::Rule => writeln!(f, "---"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sender::NoopSender;
    use crate::domain::catalog;
    use crate::domain::model::{AssetPayload, MessageSubject};
    use crate::utils::error::SiteError;
    use async_trait::async_trait;

    fn assets_all_present() -> PageAssets {
        PageAssets {
            animation: AssetResult::Present(AssetPayload::Json(serde_json::json!({"fr": 30}))),
            portrait: AssetResult::Present(AssetPayload::Bytes(vec![0u8; 16])),
            resume: AssetResult::Present(AssetPayload::Bytes(b"%PDF-1.4".to_vec())),
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let catalog = catalog::builtin();
        let assets = assets_all_present();
        let first = render_page(&catalog, Section::Home, &assets);
        let second = render_page(&catalog, Section::Home, &assets);
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_section_renders_with_all_assets_absent() {
        let catalog = catalog::builtin();
        let assets = PageAssets::unavailable("network down");
        for section in Section::ALL {
            let page = render_page(&catalog, section, &assets);
            assert!(!page.body.is_empty(), "empty body for {section}");
            assert!(!page.sidebar.is_empty());
            assert_eq!(page.footer, catalog.footer);
        }
    }

    #[test]
    fn test_skills_section_embeds_chart() {
        let catalog = catalog::builtin();
        let page = render_page(&catalog, Section::Skills, &assets_all_present());
        let chart = page.body.iter().find_map(|node| match node {
            Node::Chart(spec) => Some(spec),
            _ => None,
        });
        let chart = chart.expect("skills body should contain a chart");
        assert_eq!(chart.bars.len(), catalog.skills.len());
    }

    #[test]
    fn test_home_animation_falls_back_to_portrait_then_notice() {
        let catalog = catalog::builtin();

        let with_animation = render_page(&catalog, Section::Home, &assets_all_present());
        assert!(with_animation
            .body
            .iter()
            .any(|n| matches!(n, Node::Animation(_))));

        let mut assets = assets_all_present();
        assets.animation = AssetResult::absent("timed out");
        let with_portrait = render_page(&catalog, Section::Home, &assets);
        assert!(with_portrait
            .body
            .iter()
            .any(|n| matches!(n, Node::Portrait { .. })));

        assets.portrait = AssetResult::absent("missing file");
        let with_notice = render_page(&catalog, Section::Home, &assets);
        assert!(with_notice
            .body
            .iter()
            .any(|n| matches!(n, Node::Notice(_))));
    }

    #[test]
    fn test_absent_resume_renders_direct_contact_suggestion() {
        let catalog = catalog::builtin();
        let assets = PageAssets::unavailable("offline");
        let page = render_page(&catalog, Section::Contact, &assets);

        let suggestion = page.body.iter().any(|node| match node {
            Node::Paragraph(text) => text.contains(&catalog.contact.email),
            _ => false,
        });
        assert!(suggestion, "contact suggestion should name the email");
        assert!(!page.body.iter().any(|n| matches!(n, Node::Download { .. })));
    }

    #[test]
    fn test_present_resume_renders_download_with_variant_name() {
        let catalog = catalog::builtin();
        let page = render_page(&catalog, Section::Contact, &assets_all_present());
        let download = page.body.iter().find_map(|node| match node {
            Node::Download {
                filename,
                content_type,
                ..
            } => Some((filename.clone(), content_type.clone())),
            _ => None,
        });
        let (filename, content_type) = download.expect("download node missing");
        assert_eq!(filename, "Maya_Raghavan_Resume.pdf");
        assert_eq!(content_type, "application/pdf");
    }

    #[test]
    fn test_sidebar_marks_active_section() {
        let catalog = catalog::builtin();
        let page = render_page(&catalog, Section::Projects, &assets_all_present());
        assert!(page
            .sidebar
            .iter()
            .any(|n| matches!(n, Node::NavList { active } if *active == Section::Projects)));
    }

    #[test]
    fn test_text_writer_never_panics_and_includes_footer() {
        let catalog = catalog::builtin();
        for section in Section::ALL {
            let page = render_page(&catalog, section, &PageAssets::unavailable("down"));
            let text = page.to_string();
            assert!(text.contains(&catalog.footer));
        }
    }

    struct FailingSender;

    #[async_trait]
    impl MessageSender for FailingSender {
        async fn send(&self, _form: &ContactForm) -> crate::utils::error::Result<()> {
            Err(SiteError::DeliveryError {
                message: "smtp unreachable".to_string(),
            })
        }
    }

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Joe".to_string(),
            email: "joe@example.com".to_string(),
            subject: MessageSubject::Other,
            message: "hi".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_valid_form_reports_sent() {
        let outcome = submit_contact(&valid_form(), &NoopSender).await;
        assert!(matches!(outcome, SubmitOutcome::Sent { .. }));
    }

    #[tokio::test]
    async fn test_submit_invalid_form_keeps_field_errors() {
        let mut form = valid_form();
        form.name.clear();
        let outcome = submit_contact(&form, &NoopSender).await;
        match outcome {
            SubmitOutcome::Rejected { errors } => assert_eq!(errors.len(), 1),
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_sender_failure_is_reported_not_fatal() {
        let outcome = submit_contact(&valid_form(), &FailingSender).await;
        assert!(matches!(outcome, SubmitOutcome::Failed { .. }));
    }
}
