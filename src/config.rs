use std::collections::HashMap;

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::page::{DEFAULT_BACK_HREF, DEFAULT_BACK_LABEL, DEFAULT_COLUMNS, PageError, PageSpec};
use crate::tokens::{DesignTokens, TokenError};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Page title
    #[arg(long)]
    pub title: Option<String>,

    /// Page description
    #[arg(long)]
    pub description: Option<String>,

    /// Content section heading
    #[arg(long)]
    pub heading: Option<String>,

    /// Content section id (defaults to the heading, slugified)
    #[arg(long)]
    pub section: Option<String>,

    /// Back link target
    #[arg(long)]
    pub back_href: Option<String>,

    /// Content grid columns
    #[arg(long)]
    pub columns: Option<u8>,

    /// Content manifest (YAML or JSON)
    #[arg(long, env = "CONTENT_MANIFEST")]
    pub manifest: Option<String>,

    /// Print only the design token stylesheet
    #[arg(long)]
    pub stylesheet: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub page: PageConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub tokens: TokensConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PageConfig {
    pub title: Option<String>,
    pub description: Option<String>,
    pub heading: Option<String>,
    pub section: Option<String>,
    pub back_href: String,
    pub back_label: String,
    pub columns: u8,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ContentConfig {
    pub manifest: Option<String>,
}

/// Token value overrides, keyed by token name.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct TokensConfig {
    #[serde(default)]
    pub colors: HashMap<String, String>,
    #[serde(default)]
    pub radii: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub stylesheet_only: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    /// Layered load. Priority: CLI flag > `STOCKTAPER_` environment > config file > defaults.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("page.back_href", DEFAULT_BACK_HREF)?
            .set_default("page.back_label", DEFAULT_BACK_LABEL)?
            .set_default("page.columns", i64::from(DEFAULT_COLUMNS))?
            .set_default("output.stylesheet_only", false)?;

        if let Some(path) = &cli.config {
            builder = builder.add_source(File::with_name(path));
        }

        // E.g. STOCKTAPER_PAGE__TITLE=Research, STOCKTAPER_TOKENS__COLORS__INK=#000
        builder = builder.add_source(
            Environment::with_prefix("STOCKTAPER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let overrides = [
            ("page.title", cli.title),
            ("page.description", cli.description),
            ("page.heading", cli.heading),
            ("page.section", cli.section),
            ("page.back_href", cli.back_href),
            ("content.manifest", cli.manifest),
        ];
        for (key, value) in overrides {
            if let Some(value) = value {
                builder = builder.set_override(key, value)?;
            }
        }
        if let Some(columns) = cli.columns {
            builder = builder.set_override("page.columns", i64::from(columns))?;
        }
        if cli.stylesheet {
            builder = builder.set_override("output.stylesheet_only", true)?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }

    /// Page inputs described by this configuration.
    pub fn page_spec(&self) -> Result<PageSpec, PageError> {
        let page = &self.page;
        let mut builder = PageSpec::builder()
            .back_href(page.back_href.as_str())
            .back_label(page.back_label.as_str())
            .columns(page.columns);
        if let Some(title) = &page.title {
            builder = builder.title(title.as_str());
        }
        if let Some(description) = &page.description {
            builder = builder.description(description.as_str());
        }
        if let Some(heading) = &page.heading {
            builder = builder.heading(heading.as_str());
        }
        if let Some(section) = &page.section {
            builder = builder.section(section.as_str());
        }
        builder.build()
    }

    /// Built-in tokens with this configuration's overrides applied.
    pub fn tokens(&self) -> Result<DesignTokens, TokenError> {
        DesignTokens::default().with_overrides(&self.tokens.colors, &self.tokens.radii)
    }
}
