//! Contact form commands

use super::Context;
use crate::client::GenesisClient;
use crate::error::{CliError, CliResult};
use crate::output::{print_error, print_info, print_output, print_single, print_success};
use clap::Subcommand;
use colored::*;
use genesis_contact::{validate, ContactForm, ContactInput, FormOutcome, ProjectType, ValidationErrors};
use serde::Serialize;
use std::time::Duration;
use tabled::Tabled;

/// Contact subcommands
#[derive(Subcommand)]
pub enum ContactCommands {
    /// Validate a message and send it to the daemon
    Submit {
        /// Your name
        #[arg(long, default_value = "")]
        name: String,

        /// Reply address
        #[arg(long, default_value = "")]
        email: String,

        /// Project type (website, webapp, ecommerce, tutorial, other)
        #[arg(long, default_value = "")]
        project: String,

        /// Message body
        #[arg(long, default_value = "")]
        message: String,

        /// Only validate, do not send
        #[arg(long)]
        dry_run: bool,

        /// Request timeout in seconds
        #[arg(long, default_value_t = 30)]
        timeout_secs: u64,
    },

    /// List the accepted project types
    Projects,
}

#[derive(Serialize, Tabled)]
struct ProjectRow {
    #[tabled(rename = "Value")]
    value: &'static str,
    #[tabled(rename = "Label")]
    label: String,
}

/// Execute a contact command
pub async fn execute(command: ContactCommands, client: &GenesisClient, ctx: &Context) -> CliResult<()> {
    match command {
        ContactCommands::Submit {
            name,
            email,
            project,
            message,
            dry_run,
            timeout_secs,
        } => {
            let input = ContactInput::new(name, email, project, message);

            if dry_run {
                return match validate(&input) {
                    Ok(submission) => {
                        print_success("Submission is valid");
                        print_single(&submission)
                    }
                    Err(errors) => Err(report_violations(&errors, ctx)),
                };
            }

            let transport = client.contact_transport(Duration::from_secs(timeout_secs))?;
            let form = ContactForm::with_input(input);
            print_info(&format!("Sending to {}", transport.endpoint()));

            let outcome = form.submit(&transport).await;
            if let Some(notification) = form.take_notification() {
                let title = ctx.t(&notification.title_key);
                let description = ctx.t(&notification.description_key);
                match &outcome {
                    FormOutcome::Sent(_) => print_success(&format!("{}: {}", title, description)),
                    _ => print_error(&format!("{}: {}", title, description)),
                }
            }

            match outcome {
                FormOutcome::Sent(ack) => {
                    println!("  {}", ack.message.dimmed());
                    Ok(())
                }
                FormOutcome::Invalid(errors) => Err(report_violations(&errors, ctx)),
                FormOutcome::Failed(err) => {
                    if let Some(errors) = form.errors() {
                        report_violations(&errors, ctx);
                    }
                    Err(err.into())
                }
                FormOutcome::Busy => Err(CliError::InvalidInput(
                    "a submission is already pending".to_string(),
                )),
            }
        }

        ContactCommands::Projects => {
            let rows = ProjectType::ALL
                .iter()
                .map(|p| ProjectRow {
                    value: p.as_str(),
                    label: ctx.t(&p.label_key()),
                })
                .collect();
            print_output(rows, ctx.format)
        }
    }
}

fn report_violations(errors: &ValidationErrors, ctx: &Context) -> CliError {
    for violation in errors.iter() {
        let label = match violation.field() {
            Some(field) => ctx.t(&field.label_key()),
            None => "body".to_string(),
        };
        print_error(&format!("{}: {}", label.bold(), violation.message));
    }
    CliError::InvalidInput(format!("{} field(s) failed validation", errors.len()))
}
