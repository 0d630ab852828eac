//! Translation commands

use super::Context;
use crate::error::CliResult;
use crate::output::{print_output, print_single, print_warning, OutputFormat};
use clap::Subcommand;
use genesis_site::{Locale, TranslationDemo};
use serde::Serialize;
use tabled::Tabled;

/// Translation subcommands
#[derive(Subcommand)]
pub enum I18nCommands {
    /// Translate a dotted key in the selected language
    Translate {
        /// Key such as nav.iskra or contact.projectTypes.webapp
        key: String,
    },

    /// Look a key up in the demo table, in every language
    Lookup {
        /// Demo key; omit to list the known sample keys
        key: Option<String>,
    },

    /// List every key of the selected language
    Keys,

    /// List the supported languages
    Languages,
}

#[derive(Serialize, Tabled)]
struct LanguageRow {
    #[tabled(rename = "Code")]
    code: &'static str,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Selected")]
    selected: bool,
}

#[derive(Serialize, Tabled)]
struct TextRow {
    #[tabled(rename = "Language")]
    language: String,
    #[tabled(rename = "Text")]
    text: String,
}

#[derive(Serialize, Tabled)]
struct KeyRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Text")]
    text: String,
}

/// Execute a translation command
pub fn execute(command: I18nCommands, ctx: &Context) -> CliResult<()> {
    match command {
        I18nCommands::Translate { key } => {
            let text = ctx.translations.translate(ctx.locale, &key);
            if text == key {
                print_warning(&format!("No translation for {}", key));
            }
            match ctx.format {
                OutputFormat::Table => println!("{}", text),
                OutputFormat::Json => print_single(&serde_json::json!({
                    "locale": ctx.locale.code(),
                    "key": key,
                    "text": text,
                }))?,
            }
            Ok(())
        }

        I18nCommands::Lookup { key: None } => {
            let rows = TranslationDemo::sample_keys()
                .map(|key| KeyRow {
                    key: key.to_string(),
                    text: TranslationDemo::lookup(key).texts.get(ctx.locale).to_string(),
                })
                .collect();
            print_output(rows, ctx.format)
        }

        I18nCommands::Lookup { key: Some(key) } => {
            let mut demo = TranslationDemo::new();
            demo.set_key(key);
            let lookup = demo.current();
            if !lookup.found {
                print_warning(&format!("{} is not in the demo table", lookup.key));
            }
            let rows = Locale::ALL
                .into_iter()
                .map(|locale| TextRow {
                    language: ctx.t(&format!("translation.languages.{}", locale.code())),
                    text: lookup.texts.get(locale).to_string(),
                })
                .collect();
            print_output(rows, ctx.format)
        }

        I18nCommands::Keys => {
            let rows = ctx
                .translations
                .keys(ctx.locale)
                .into_iter()
                .map(|key| KeyRow {
                    text: ctx.t(&key),
                    key,
                })
                .collect();
            print_output(rows, ctx.format)
        }

        I18nCommands::Languages => {
            let rows = Locale::ALL
                .into_iter()
                .map(|locale| LanguageRow {
                    code: locale.code(),
                    name: locale.native_name(),
                    selected: locale == ctx.locale,
                })
                .collect();
            print_output(rows, ctx.format)
        }
    }
}
