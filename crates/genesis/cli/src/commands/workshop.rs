//! Workshop bug-simulation commands

use super::Context;
use crate::error::CliResult;
use crate::output::{print_error, print_output, print_success};
use clap::Subcommand;
use colored::*;
use genesis_site::{Clipboard, SiteError, SiteResult, Workshop};
use serde::Serialize;
use std::path::PathBuf;
use tabled::Tabled;

/// Workshop subcommands
#[derive(Subcommand)]
pub enum WorkshopCommands {
    /// Show the gallery component and how it renders
    Show {
        /// Show the version with the injected bug
        #[arg(long)]
        bug: bool,
    },

    /// Copy the gallery component code into a file
    Copy {
        /// Destination file
        path: PathBuf,

        /// Copy the version with the injected bug
        #[arg(long)]
        bug: bool,
    },
}

/// Clipboard stand-in for a terminal: writes the text to a file
struct FileClipboard(PathBuf);

impl Clipboard for FileClipboard {
    fn write_text(&mut self, text: &str) -> SiteResult<()> {
        std::fs::write(&self.0, text).map_err(|e| SiteError::Clipboard(e.to_string()))
    }
}

#[derive(Serialize, Tabled)]
struct GalleryRow {
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Columns")]
    columns: u8,
    #[tabled(rename = "Image classes")]
    classes: String,
}

fn workshop(bug: bool) -> Workshop {
    let mut workshop = Workshop::new();
    if bug {
        workshop.toggle();
    }
    workshop
}

/// Execute a workshop command
pub fn execute(command: WorkshopCommands, ctx: &Context) -> CliResult<()> {
    match command {
        WorkshopCommands::Show { bug } => {
            let workshop = workshop(bug);
            let gallery = workshop.gallery();
            print_output(
                vec![GalleryRow {
                    state: if workshop.is_bug_active() { "buggy" } else { "working" }.to_string(),
                    columns: gallery.grid_columns,
                    classes: gallery.image_classes.join(" "),
                }],
                ctx.format,
            )?;
            println!("\n{}", ctx.t("workshop.componentCode").bold());
            println!("{}", workshop.current_code());
            println!("\n[{}]", ctx.t(workshop.button_label_key()).cyan());
            Ok(())
        }

        WorkshopCommands::Copy { path, bug } => {
            let toast = workshop(bug).copy_code(&mut FileClipboard(path.clone()));
            let text = format!("{}: {}", ctx.t(toast.title_key), ctx.t(toast.description_key));
            if toast.destructive {
                print_error(&text);
                return Err(SiteError::Clipboard(format!("could not write {}", path.display())).into());
            }
            print_success(&text);
            println!("  {}", path.display().to_string().dimmed());
            Ok(())
        }
    }
}
