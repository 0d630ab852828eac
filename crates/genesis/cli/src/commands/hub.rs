//! Terminal rendering of the control hub

use super::Context;
use crate::error::{CliError, CliResult};
use crate::output::{print_single, OutputFormat};
use clap::Args;
use colored::*;
use genesis_nav::{NavigateOutcome, NavigationController, SectionCatalog, StaticLayout};
use genesis_site::{ControlHub, SiteContext, SiteStore, Theme};

/// Control hub options
#[derive(Debug, Args)]
pub struct HubArgs {
    /// Render the hub expanded (labels visible)
    #[arg(long)]
    pub expanded: bool,

    /// Active section id
    #[arg(long)]
    pub active: Option<String>,

    /// Theme (light, dark, system)
    #[arg(long, default_value = "system")]
    pub theme: Theme,
}

/// Render the side navigation as the site would show it
pub fn execute(args: HubArgs, ctx: &Context) -> CliResult<()> {
    let catalog = SectionCatalog::genesis();
    let layout = StaticLayout::uniform(catalog.ids(), 900.0, 0.0, 1000.0);
    let mut nav = NavigationController::new(catalog.clone(), layout);

    if let Some(active) = &args.active {
        if nav.navigate_to(active) == NavigateOutcome::Ignored {
            return Err(CliError::InvalidInput(format!("Unknown section: {}", active)));
        }
    }
    nav.toggle_expanded(args.expanded);

    let store = SiteStore::new(SiteContext::new(ctx.locale, args.theme));
    let snapshot = nav.snapshot();
    let hub = ControlHub::new(&catalog, &ctx.translations, store.context(), &snapshot);

    if ctx.format == OutputFormat::Json {
        return print_single(&serde_json::json!({
            "class": hub.css_class(),
            "entries": hub.entries(),
            "languages": hub.language_options(),
            "theme": {
                "icon": hub.theme_icon(),
                "label": hub.theme_button_label(),
            },
        }));
    }

    println!("{}", hub.css_class().dimmed());
    for entry in hub.entries() {
        let marker = if entry.active { "▶".cyan() } else { " ".normal() };
        if hub.labels_visible() {
            let label = if entry.active {
                entry.label.bold()
            } else {
                entry.label.normal()
            };
            println!("{} {} {}", marker, entry.icon, label);
        } else {
            println!("{} {}", marker, entry.icon);
        }
    }

    let languages: Vec<String> = hub
        .language_options()
        .into_iter()
        .map(|o| {
            if o.selected {
                format!("[{}]", o.name)
            } else {
                o.name.to_string()
            }
        })
        .collect();
    println!("\n{}", languages.join(" "));
    println!("{} {}", hub.theme_icon(), hub.theme_button_label());
    Ok(())
}
