use clap::Parser;
use folio::core::renderer::Node;
use folio::domain::catalog;
use folio::{
    render_page, AssetFetcher, AssetKind, CliConfig, PageAssets, ResumeVariant, Section, Session,
};
use httpmock::prelude::*;
use tempfile::TempDir;

async fn resolve_assets(config: &CliConfig, variant: ResumeVariant) -> PageAssets {
    let fetcher = AssetFetcher::from_config(config);
    PageAssets {
        animation: fetcher
            .fetch(&config.animation_chain(), AssetKind::Json)
            .await,
        portrait: fetcher
            .fetch(&config.portrait_chain(), AssetKind::Image)
            .await,
        resume: fetcher
            .fetch(&config.resume_chain(variant), AssetKind::Binary)
            .await,
    }
}

#[tokio::test]
async fn test_full_session_walk_with_remote_assets() {
    // Empty assets dir: every local source misses, remote mirrors serve.
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();

    let animation = server.mock(|when, then| {
        when.method(GET).path("/animation.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"v": "5.5.7", "layers": []}));
    });
    let resume = server.mock(|when, then| {
        when.method(GET).path("/resume.pdf");
        then.status(200).body("%PDF-1.4 resume bytes");
    });

    let animation_url = server.url("/animation.json");
    let resume_url = server.url("/resume.pdf");
    let config = CliConfig::parse_from([
        "folio",
        "--assets-dir",
        temp_dir.path().to_str().unwrap(),
        "--animation-url",
        animation_url.as_str(),
        "--resume-url",
        resume_url.as_str(),
        "--retry-attempts",
        "0",
    ]);

    let content = catalog::builtin();
    let assets = resolve_assets(&config, content.resume_variant).await;

    animation.assert();
    resume.assert();

    let mut session = Session::new();
    assert_eq!(session.current(), Section::Home);

    let home = render_page(&content, session.current(), &assets);
    assert!(home.body.iter().any(|n| matches!(n, Node::Animation(_))));

    for section in [
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Education,
        Section::Contact,
    ] {
        session.select(section);
        let page = render_page(&content, session.current(), &assets);
        assert_eq!(page.section, section);
        assert!(!page.body.is_empty());
    }

    // Contact section offers the resume under its fixed name and MIME type.
    session.select(Section::Contact);
    let contact = render_page(&content, session.current(), &assets);
    let download = contact.body.iter().find_map(|node| match node {
        Node::Download {
            filename,
            content_type,
            size_bytes,
        } => Some((filename.clone(), content_type.clone(), *size_bytes)),
        _ => None,
    });
    let (filename, content_type, size_bytes) = download.expect("download node missing");
    assert!(filename.ends_with("_Resume.pdf"));
    assert_eq!(content_type, "application/pdf");
    assert_eq!(size_bytes, "%PDF-1.4 resume bytes".len());
}

#[tokio::test]
async fn test_offline_session_degrades_but_always_renders() {
    let temp_dir = TempDir::new().unwrap();
    let config = CliConfig::parse_from([
        "folio",
        "--assets-dir",
        temp_dir.path().to_str().unwrap(),
        "--offline",
    ]);

    let content = catalog::builtin();
    let assets = resolve_assets(&config, content.resume_variant).await;
    assert!(!assets.animation.is_present());
    assert!(!assets.resume.is_present());

    let mut session = Session::new();
    for section in Section::ALL {
        session.select(section);
        let page = render_page(&content, session.current(), &assets);
        assert!(!page.body.is_empty(), "no body for {section}");

        // The text writer must also hold up with everything absent.
        let text = page.to_string();
        assert!(text.contains(&content.identity.name));
    }

    // Resume degradation points at direct contact instead of a download.
    session.select(Section::Contact);
    let contact = render_page(&content, session.current(), &assets);
    assert!(contact.body.iter().any(|node| match node {
        Node::Paragraph(text) => text.contains(&content.contact.email),
        _ => false,
    }));
}

#[tokio::test]
async fn test_local_resume_preferred_over_remote() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("resume.pdf"), b"%PDF-1.4 local copy").unwrap();

    let server = MockServer::start();
    let remote = server.mock(|when, then| {
        when.method(GET).path("/resume.pdf");
        then.status(200).body("%PDF-1.4 remote copy");
    });

    let resume_url = server.url("/resume.pdf");
    let config = CliConfig::parse_from([
        "folio",
        "--assets-dir",
        temp_dir.path().to_str().unwrap(),
        "--resume-url",
        resume_url.as_str(),
    ]);

    let fetcher = AssetFetcher::from_config(&config);
    let result = fetcher
        .fetch(&config.resume_chain(ResumeVariant::Pdf), AssetKind::Binary)
        .await;

    remote.assert_hits(0);
    assert_eq!(result.as_bytes().unwrap(), b"%PDF-1.4 local copy");
}

#[tokio::test]
async fn test_render_identical_across_repeated_session() {
    let temp_dir = TempDir::new().unwrap();
    let config = CliConfig::parse_from([
        "folio",
        "--assets-dir",
        temp_dir.path().to_str().unwrap(),
        "--offline",
    ]);

    let content = catalog::builtin();
    let assets = resolve_assets(&config, content.resume_variant).await;

    let first = render_page(&content, Section::Skills, &assets);
    let second = render_page(&content, Section::Skills, &assets);
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}
