//! StockTaper preview
//!
//! Renders a design-system page, or the token stylesheet, to stdout.

use anyhow::Context;
use mimalloc::MiMalloc;
use tracing::info;

use stocktaper_design::config::AppConfig;
use stocktaper_design::content::StaticContentProvider;
use stocktaper_design::page::Page;
use stocktaper_design::{telemetry, tokens};

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenvy::dotenv();

    telemetry::init();

    let config = AppConfig::load().context("Configuration error")?;

    tokens::install(config.tokens()?)?;
    let tokens = tokens::registry();

    if config.output.stylesheet_only {
        print!("{}", tokens.css_variables());
        return Ok(());
    }

    let spec = config.page_spec()?;
    let page = match &config.content.manifest {
        Some(path) => {
            let provider = StaticContentProvider::from_path(path)
                .with_context(|| format!("Failed to load content manifest {path}"))?;
            Page::with_content(spec, &provider)?
        }
        None => Page::new(spec),
    };

    info!(
        name: "preview.rendered",
        title = %page.spec().title(),
        items = page.items().len(),
        "Page rendered"
    );

    println!("{}", page.render_document(tokens));
    Ok(())
}
