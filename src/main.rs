use clap::Parser;
use folio::config::profile::load_profile;
use folio::core::resume::resume_handle;
use folio::domain::catalog;
use folio::domain::ports::Storage;
use folio::utils::{logger, validation::Validate};
use folio::{render_page, AssetFetcher, AssetKind, CliConfig, LocalStorage, PageAssets, Session};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting folio");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let mut content = match &config.profile {
        Some(path) => match load_profile(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::error!("❌ Failed to load profile: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        },
        None => catalog::builtin(),
    };
    if let Some(variant) = config.resume_format {
        content.resume_variant = variant;
    }
    let variant = content.resume_variant;

    // Assets are fetched once up front; the memo cache makes any further
    // fetch for the same chain free anyway.
    let fetcher = AssetFetcher::from_config(&config);
    tracing::info!("Resolving assets");
    let assets = PageAssets {
        animation: fetcher
            .fetch(&config.animation_chain(), AssetKind::Json)
            .await,
        portrait: fetcher
            .fetch(&config.portrait_chain(), AssetKind::Image)
            .await,
        resume: fetcher
            .fetch(&config.resume_chain(variant), AssetKind::Binary)
            .await,
    };

    let mut session = Session::new();
    println!("{}", render_page(&content, session.current(), &assets));
    for &section in &config.visit {
        session.select(section);
        println!("{}", render_page(&content, session.current(), &assets));
    }

    if let Some(dir) = &config.save_resume {
        match resume_handle(&content.identity, variant, &assets.resume) {
            Some(handle) => {
                let storage = LocalStorage::new(dir.display().to_string());
                storage.write_file(&handle.filename, &handle.bytes).await?;
                tracing::info!("📁 Resume saved to: {}/{}", dir.display(), handle.filename);
            }
            None => {
                tracing::warn!(
                    "Resume unavailable, nothing saved. Contact {} directly.",
                    content.contact.email
                );
            }
        }
    }

    Ok(())
}
