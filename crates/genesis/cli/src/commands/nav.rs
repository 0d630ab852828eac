//! Section navigation commands

use super::Context;
use crate::error::{CliError, CliResult};
use crate::output::{print_output, print_single, print_success, print_warning};
use clap::{Args, Subcommand};
use genesis_nav::{
    DocumentLayout, NavigateOutcome, NavigationController, ScrollBehavior, SectionCatalog,
    StaticLayout,
};
use serde::Serialize;
use tabled::Tabled;

/// Navigation subcommands
#[derive(Subcommand)]
pub enum NavCommands {
    /// List the page sections in navigation order
    Sections,

    /// Replay scroll positions through the scroll spy
    Scroll {
        /// Scroll offsets in px, applied in order
        #[arg(required = true)]
        offsets: Vec<f64>,

        #[command(flatten)]
        page: PageGeometry,
    },

    /// Click a navigation entry and show the resulting state
    Goto {
        /// Section id (e.g. phase-2) or navigation key (e.g. innowacja)
        section: String,

        #[command(flatten)]
        page: PageGeometry,
    },
}

/// Simulated page dimensions
#[derive(Debug, Clone, Copy, Args)]
pub struct PageGeometry {
    /// Viewport height in px
    #[arg(long, default_value_t = 900.0)]
    pub viewport: f64,

    /// Height of the block above the first section in px
    #[arg(long, default_value_t = 0.0)]
    pub header: f64,

    /// Height of every section in px
    #[arg(long, default_value_t = 1000.0)]
    pub section_height: f64,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            viewport: 900.0,
            header: 0.0,
            section_height: 1000.0,
        }
    }
}

impl PageGeometry {
    fn controller(&self, catalog: &SectionCatalog) -> NavigationController<StaticLayout> {
        let layout =
            StaticLayout::uniform(catalog.ids(), self.viewport, self.header, self.section_height);
        NavigationController::new(catalog.clone(), layout).with_scroll_behavior(ScrollBehavior::Instant)
    }
}

#[derive(Debug, Serialize, Tabled)]
struct SectionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "")]
    icon: String,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Anchor")]
    anchor: String,
}

/// One replayed scroll position
#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct ScrollRow {
    #[tabled(rename = "Requested")]
    pub requested: f64,
    #[tabled(rename = "Offset")]
    pub offset: f64,
    #[tabled(rename = "Matched")]
    pub matched: String,
    #[tabled(rename = "Active")]
    pub active: String,
    #[tabled(rename = "Scroll-to-top")]
    pub show_scroll_top: bool,
}

/// Drive the scroll spy through `offsets` on a uniform page
pub fn replay(catalog: &SectionCatalog, page: PageGeometry, offsets: &[f64]) -> Vec<ScrollRow> {
    let mut ctrl = page.controller(catalog);
    offsets
        .iter()
        .map(|&requested| {
            ctrl.layout_mut().scroll_to(requested, ScrollBehavior::Instant);
            let reading = ctrl.refresh();
            ScrollRow {
                requested,
                offset: reading.scroll_offset,
                matched: reading
                    .matched
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                active: ctrl.active_section().to_string(),
                show_scroll_top: reading.show_scroll_top,
            }
        })
        .collect()
}

fn check_offsets(offsets: &[f64]) -> CliResult<()> {
    match offsets.iter().find(|o| !o.is_finite()) {
        Some(bad) => Err(CliError::InvalidInput(format!(
            "Scroll offset must be a finite number, got {}",
            bad
        ))),
        None => Ok(()),
    }
}

/// Execute a navigation command
pub fn execute(command: NavCommands, ctx: &Context) -> CliResult<()> {
    let catalog = SectionCatalog::genesis();

    match command {
        NavCommands::Sections => {
            let rows = catalog
                .iter()
                .map(|s| SectionRow {
                    id: s.id.to_string(),
                    icon: s.icon.clone(),
                    label: ctx.t(&s.label_key()),
                    anchor: s.id.anchor(),
                })
                .collect();
            print_output(rows, ctx.format)
        }

        NavCommands::Scroll { offsets, page } => {
            check_offsets(&offsets)?;
            print_output(replay(&catalog, page, &offsets), ctx.format)
        }

        NavCommands::Goto { section, page } => {
            let target = catalog
                .get(&section)
                .or_else(|| catalog.by_nav_key(&section))
                .map(|s| s.id.to_string())
                .ok_or_else(|| CliError::InvalidInput(format!("Unknown section: {}", section)))?;

            let mut ctrl = page.controller(&catalog);
            match ctrl.navigate_to(&target) {
                NavigateOutcome::Navigated => {
                    print_success(&format!(
                        "Scrolled to {} at {}px",
                        target,
                        ctrl.layout().scroll_offset()
                    ));
                }
                NavigateOutcome::Ignored => {
                    print_warning(&format!("{} is not on the page", target));
                }
            }
            print_single(&ctrl.snapshot())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_tracks_the_activation_line() {
        let catalog = SectionCatalog::genesis();
        let rows = replay(&catalog, PageGeometry::default(), &[0.0, 950.0, 1500.0]);

        assert_eq!(rows[0].active, "phase-0");
        assert!(!rows[0].show_scroll_top);
        // line at 1050 falls into the second section
        assert_eq!(rows[1].matched, "phase-1");
        assert!(rows[1].show_scroll_top);
        assert_eq!(rows[2].active, "phase-1");
    }

    #[test]
    fn replay_clamps_past_the_end() {
        let catalog = SectionCatalog::genesis();
        let rows = replay(&catalog, PageGeometry::default(), &[1_000_000.0]);
        // 7 sections of 1000px in a 900px viewport
        assert_eq!(rows[0].offset, 6100.0);
        assert_eq!(rows[0].active, "contact");
    }

    #[test]
    fn non_finite_offsets_are_rejected() {
        assert!(check_offsets(&[0.0, 950.0]).is_ok());
        assert!(matches!(
            check_offsets(&[0.0, f64::NAN]),
            Err(CliError::InvalidInput(_))
        ));
        assert!(check_offsets(&[f64::INFINITY]).is_err());
    }

    #[test]
    fn replay_keeps_position_on_nan() {
        let catalog = SectionCatalog::genesis();
        let rows = replay(&catalog, PageGeometry::default(), &[1500.0, f64::NAN]);
        assert_eq!(rows[1].offset, 1500.0);
        assert_eq!(rows[1].active, "phase-1");
    }
}
