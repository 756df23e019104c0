use crate::domain::model::{
    ContactInfo, ContentCatalog, EducationEntry, ExperienceEntry, Identity, Language,
    ProjectEntry, ProjectGroup, ResumeVariant, SkillGroup, SkillRating, SkillRatings, SocialLinks,
};
use crate::utils::error::Result;
use crate::utils::validation::{validate_filled_string, Validate};
use chrono::Datelike;

impl Validate for ContentCatalog {
    fn validate(&self) -> Result<()> {
        validate_filled_string("identity.name", &self.identity.name)?;
        validate_filled_string("identity.tagline", &self.identity.tagline)?;
        validate_filled_string("contact.email", &self.contact.email)?;
        validate_filled_string("contact.phone", &self.contact.phone)?;
        validate_filled_string("contact.location", &self.contact.location)?;
        validate_filled_string("social.github", &self.social.github)?;
        validate_filled_string("social.linkedin", &self.social.linkedin)?;

        for entry in &self.experience {
            validate_filled_string("experience.company", &entry.company)?;
            validate_filled_string("experience.position", &entry.position)?;
        }
        for group in &self.project_groups {
            validate_filled_string("project_groups.title", &group.title)?;
            for project in &group.projects {
                validate_filled_string("projects.title", &project.title)?;
            }
        }
        for entry in &self.education {
            validate_filled_string("education.degree", &entry.degree)?;
            validate_filled_string("education.institution", &entry.institution)?;
        }

        Ok(())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The compiled-in sample catalog. A TOML profile can replace it wholesale;
/// the shape here is the contract.
pub fn builtin() -> ContentCatalog {
    // SkillRatings::new only fails on duplicates or out-of-range values, and
    // this literal data has neither.
    let skills = SkillRatings::new(vec![
        SkillRating {
            name: "Rust Programming".to_string(),
            proficiency: 92,
        },
        SkillRating {
            name: "Distributed Systems".to_string(),
            proficiency: 88,
        },
        SkillRating {
            name: "Cloud Infrastructure".to_string(),
            proficiency: 85,
        },
        SkillRating {
            name: "Data Engineering".to_string(),
            proficiency: 83,
        },
        SkillRating {
            name: "API Design".to_string(),
            proficiency: 87,
        },
        SkillRating {
            name: "Observability".to_string(),
            proficiency: 80,
        },
    ])
    .unwrap_or_default();

    ContentCatalog {
        identity: Identity {
            name: "Maya Raghavan".to_string(),
            tagline: "Backend Engineer | Cloud Platform Developer".to_string(),
            summary: "I am a backend engineer with a strong foundation in service design, \
                      deployment, and automation workflows. Passionate about building \
                      reliable systems and exploring new infrastructure tooling."
                .to_string(),
            highlights: strings(&[
                "Distributed Systems & Service Design",
                "Cloud Infrastructure (AWS)",
                "Data Pipelines",
                "Developer Tooling",
            ]),
        },
        contact: ContactInfo {
            email: "maya.raghavan@example.com".to_string(),
            phone: "+91 98400 12345".to_string(),
            location: "Chennai, India".to_string(),
        },
        social: SocialLinks {
            github: "https://github.com/mayaraghavan".to_string(),
            linkedin: "https://linkedin.com/in/maya-raghavan".to_string(),
            email_link: "mailto:maya.raghavan@example.com".to_string(),
        },
        skills,
        skill_groups: vec![
            SkillGroup {
                title: "🔧 Core Competencies".to_string(),
                items: strings(&[
                    "Rust (tokio, serde, axum)",
                    "Distributed Systems (consensus, queues)",
                    "Cloud Computing (AWS)",
                    "Relational Databases (PostgreSQL)",
                    "Networking & Protocol Design",
                ]),
            },
            SkillGroup {
                title: "🛠 Tools & Frameworks".to_string(),
                items: strings(&[
                    "Containers: Docker, Kubernetes",
                    "CI/CD: GitHub Actions",
                    "Observability: Prometheus, Grafana",
                    "Version Control: Git, GitHub",
                    "Cloud Services: AWS (EC2, S3, Lambda)",
                ]),
            },
        ],
        experience: vec![
            ExperienceEntry {
                company: "Northlake Systems".to_string(),
                duration: "2024-Present".to_string(),
                position: "Backend Engineer".to_string(),
                achievements: strings(&[
                    "Cut p99 API latency by 40% by rewriting the ingestion path in Rust",
                    "Built streaming pipelines processing 10K+ events per minute",
                    "Reduced infrastructure spend by 25% through workload consolidation",
                ]),
                technologies: strings(&[
                    "Rust",
                    "Tokio",
                    "PostgreSQL",
                    "Kafka",
                    "Docker",
                    "Kubernetes",
                ]),
            },
            ExperienceEntry {
                company: "HMI Engineering Services".to_string(),
                duration: "6 Months".to_string(),
                position: "Cloud Engineering Intern".to_string(),
                achievements: strings(&[
                    "Configured 5 EC2 instances with auto-scaling, reducing deployment time by 25%",
                    "Managed 3 S3 buckets with lifecycle policies saving $1,200/month in storage costs",
                    "Designed IAM roles that improved security compliance by 40%",
                    "Automated backup systems for RDS databases",
                ]),
                technologies: strings(&[
                    "AWS EC2",
                    "AWS S3",
                    "AWS IAM",
                    "AWS RDS",
                    "Terraform",
                    "CloudFormation",
                ]),
            },
        ],
        project_groups: vec![
            ProjectGroup {
                title: "🤖 Systems Projects".to_string(),
                projects: vec![
                    ProjectEntry {
                        title: "Queue-Backed Job Scheduler".to_string(),
                        description: "Built a priority job scheduler with at-least-once \
                                      delivery on top of PostgreSQL advisory locks."
                            .to_string(),
                        tech_stack: strings(&["Rust", "Tokio", "PostgreSQL", "Prometheus"]),
                        results: Some(strings(&[
                            "Sustained 5K jobs/minute on a single node",
                            "Zero lost jobs across rolling deploys",
                            "Adopted by three internal teams",
                        ])),
                    },
                    ProjectEntry {
                        title: "Log Compaction Service".to_string(),
                        description: "Designed a tiered-storage compactor that rewrites \
                                      append-only segments and prunes tombstones."
                            .to_string(),
                        tech_stack: strings(&["Rust", "S3", "Parquet", "Grafana"]),
                        results: Some(strings(&[
                            "Reduced cold-storage footprint by 60%",
                            "Compaction lag held under 2 minutes at peak",
                        ])),
                    },
                ],
            },
            ProjectGroup {
                title: "🌐 Web Applications".to_string(),
                projects: vec![
                    ProjectEntry {
                        title: "Smart Tax Calculator".to_string(),
                        description: "Income tax calculator with deduction support and PDF \
                                      export."
                            .to_string(),
                        tech_stack: strings(&["Rust", "Axum", "Askama"]),
                        results: Some(strings(&[
                            "5,000+ monthly active users",
                            "Reduced calculation errors by 95%",
                        ])),
                    },
                    ProjectEntry {
                        title: "Secure Auth Gateway".to_string(),
                        description: "Authentication gateway with OTP and role-based access \
                                      control."
                            .to_string(),
                        tech_stack: strings(&["Rust", "JWT", "Redis"]),
                        results: None,
                    },
                ],
            },
        ],
        education: vec![
            EducationEntry {
                degree: "Master of Computer Applications (MCA)".to_string(),
                institution: "Anna University, Chennai".to_string(),
                years: "2022 - 2024".to_string(),
                score: "GPA: 8.1/10.0".to_string(),
            },
            EducationEntry {
                degree: "B.Sc in Computer Science".to_string(),
                institution: "Madras Christian College".to_string(),
                years: "2019 - 2022".to_string(),
                score: "GPA: 7.6/10.0".to_string(),
            },
        ],
        languages: vec![
            Language {
                name: "English".to_string(),
                level: "Professional Proficiency".to_string(),
            },
            Language {
                name: "Tamil".to_string(),
                level: "Native Speaker".to_string(),
            },
            Language {
                name: "Hindi".to_string(),
                level: "Conversational".to_string(),
            },
        ],
        resume_variant: ResumeVariant::Pdf,
        footer: format!(
            "© {} Maya Raghavan | Made with ❤ & Rust",
            chrono::Utc::now().year()
        ),
    }
}
