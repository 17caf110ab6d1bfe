//! webskin demo - Webhook Dashboard Generator
//!
//! Renders the sample webhook-management page with a chosen skin and writes
//! the complete HTML document to stdout or a file.
//!
//! Usage: `webskin [page.toml]`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use webskin::components::layout::{Column, Container, Row};
use webskin::components::widgets::{Button, NavItem, Navbar, NavbarType};
use webskin::document::HtmlDocument;
use webskin::{Framework, Skin};

/// Page configuration, loadable from a TOML file
#[derive(Debug, Deserialize)]
#[serde(default)]
struct PageConfig {
    title: String,
    skin: Skin,
    /// Optional JSON file with the webhook list
    webhooks: Option<PathBuf>,
    /// Output path; stdout when absent
    output: Option<PathBuf>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Webhooks Management".to_string(),
            skin: Skin::default(),
            webhooks: None,
            output: None,
        }
    }
}

/// A webhook entry shown on the dashboard
#[derive(Debug, Deserialize)]
struct Webhook {
    name: String,
    url: String,
    enabled: bool,
}

fn load_config(path: &Path) -> webskin::Result<PageConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

fn load_webhooks(path: &Path) -> webskin::Result<Vec<Webhook>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn sample_webhooks() -> Vec<Webhook> {
    vec![
        Webhook {
            name: "Gatsby".to_string(),
            url: "https://www.gatsbyjs.com/features/jamstack/".to_string(),
            enabled: true,
        },
        Webhook {
            name: "Netlify".to_string(),
            url: "https://www.netlify.com/hooks/deploy/".to_string(),
            enabled: false,
        },
        Webhook {
            name: "Blog".to_string(),
            url: "https://example.com/hooks/blog/".to_string(),
            enabled: false,
        },
    ]
}

/// Side navigation menu inside its own container
fn side_navigation(fw: &Framework) -> String {
    let nav = fw.widgets.navbar(
        &Navbar::new(vec![
            NavItem::new("Overview", "#").active(true),
            NavItem::new("API Tokens", "#"),
            NavItem::new("Webhooks", "#"),
        ])
        .navbar_type(NavbarType::Vertical),
    );
    fw.layout.container(&Container::new(nav).class("side-nav"))
}

/// Main content area: one row per webhook plus a create button
fn webhooks_management(fw: &Framework, webhooks: &[Webhook]) -> String {
    let rows: String = webhooks
        .iter()
        .map(|webhook| {
            let status = if webhook.enabled { "Enabled" } else { "Disabled" };
            let toggle = fw.widgets.button(
                &Button::new(if webhook.enabled { "Disable" } else { "Enable" })
                    .on_click(format!("toggleWebhook('{}')", webhook.name))
                    .class("toggle-button"),
            );
            let cells = format!(
                "{}{}{}{}",
                fw.layout
                    .column(&Column::new(webhook.name.as_str()).class("webhook-name")),
                fw.layout
                    .column(&Column::new(webhook.url.as_str()).class("webhook-url")),
                fw.layout.column(&Column::new(status).class("webhook-status")),
                toggle
            );
            let row_class = if webhook.enabled {
                "webhook-row enabled"
            } else {
                "webhook-row disabled"
            };
            fw.layout.row(&Row::new(cells).class(row_class))
        })
        .collect();
    let create = fw.widgets.button(
        &Button::new("Create new webhook")
            .on_click("openCreateNewWebhookModal()")
            .class("create-button"),
    );
    fw.layout.container(
        &Container::new(format!(
            "<h1>Webhooks</h1><p>Get POST changes notifications</p>{rows}{create}"
        ))
        .class("webhooks-management"),
    )
}

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            load_config(Path::new(&path)).with_context(|| format!("loading page config from {path}"))?
        }
        None => PageConfig::default(),
    };
    tracing::info!(title = %config.title, skin = ?config.skin, "rendering dashboard");

    let webhooks = match &config.webhooks {
        Some(path) => load_webhooks(path)
            .with_context(|| format!("loading webhooks from {}", path.display()))?,
        None => sample_webhooks(),
    };

    let framework = Framework::new(config.skin);
    let dashboard = format!(
        r#"<div class="dashboard">{}{}</div>"#,
        side_navigation(&framework),
        webhooks_management(&framework, &webhooks)
    );

    let head = format!(
        "{}{}",
        framework.document.meta_tags_default(),
        framework.document.title_tag(&config.title)
    );
    let page = framework.document.html_document(
        &HtmlDocument::new(dashboard)
            .head_tags(head)
            .script_tags(framework.skin().script_tags()),
    );

    match &config.output {
        Some(path) => {
            fs::write(path, &page).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = page.len(), "page written");
        }
        None => print!("{page}"),
    }

    Ok(())
}
