//! formkit command line.
//!
//! Renders a single form element, or a whole JSON form document, to stdout.
//!
//! Usage:
//!   formkit input first_name --value John --attr required=required
//!   formkit select gender --selected male --option male=Male --option female=Female
//!   formkit render form.json

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use formkit::{
    Attributes, Config, CustomTypeRegistry, DEFAULT_BUTTON_TYPE, DEFAULT_BUTTON_VALUE,
    DEFAULT_INPUT_TYPE, FormDocument, LabelOptions, SelectOptions, builders,
};

/// Render HTML form markup.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Repeatable `--attr name=value` arguments.
#[derive(Args, Debug, Default)]
struct AttrArgs {
    /// Tag attribute, in order of appearance.
    #[arg(long = "attr", value_name = "NAME=VALUE", value_parser = parse_pair)]
    attrs: Vec<(String, String)>,
}

impl AttrArgs {
    fn attributes(&self) -> Attributes {
        self.attrs.iter().cloned().collect()
    }
}

/// Where the label's required marker goes.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum MarkerPosition {
    Before,
    After,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Opening form tag.
    Open {
        #[command(flatten)]
        attrs: AttrArgs,
    },

    /// Closing form tag.
    Close,

    /// Input field.
    Input {
        name: String,
        #[arg(long = "type", default_value = DEFAULT_INPUT_TYPE)]
        input_type: String,
        #[arg(long, default_value = "")]
        value: String,
        #[command(flatten)]
        attrs: AttrArgs,
    },

    /// Select field.
    Select {
        name: String,
        #[arg(long, default_value = "")]
        selected: String,
        /// Option, in order of appearance.
        #[arg(long = "option", value_name = "VALUE=TEXT", value_parser = parse_pair)]
        options: Vec<(String, String)>,
        #[command(flatten)]
        attrs: AttrArgs,
    },

    /// Textarea.
    Textarea {
        name: String,
        #[arg(long, default_value = "")]
        value: String,
        #[command(flatten)]
        attrs: AttrArgs,
    },

    /// Checkbox.
    Checkbox {
        name: String,
        value: String,
        #[arg(long)]
        checked: bool,
        #[command(flatten)]
        attrs: AttrArgs,
    },

    /// Radio button.
    Radio {
        name: String,
        value: String,
        #[arg(long)]
        checked: bool,
        #[command(flatten)]
        attrs: AttrArgs,
    },

    /// Button.
    Button {
        #[arg(long = "type", default_value = DEFAULT_BUTTON_TYPE)]
        button_type: String,
        #[arg(long, default_value = DEFAULT_BUTTON_VALUE)]
        value: String,
        #[command(flatten)]
        attrs: AttrArgs,
    },

    /// File upload input.
    File {
        name: String,
        #[command(flatten)]
        attrs: AttrArgs,
    },

    /// Password input.
    Password {
        name: String,
        #[command(flatten)]
        attrs: AttrArgs,
    },

    /// Email input.
    Email {
        name: String,
        #[arg(long, default_value = "")]
        value: String,
        #[command(flatten)]
        attrs: AttrArgs,
    },

    /// Label. The required marker defaults to FORMKIT_REQUIRED_HTML.
    Label {
        #[arg(value_name = "FOR")]
        for_id: String,
        #[arg(long, default_value = "")]
        text: String,
        #[arg(long)]
        required_html: Option<String>,
        #[arg(long, value_enum)]
        position: Option<MarkerPosition>,
        #[command(flatten)]
        attrs: AttrArgs,
    },

    /// JSON form document; `-` reads stdin.
    Render { path: PathBuf },
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))?;
    Ok((name.to_string(), value.to_string()))
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env().context("failed to load configuration")?;
    debug!(?config, "configuration loaded");

    let html = run(cli.command, &config)?;
    println!("{html}");
    Ok(())
}

fn run(command: Command, config: &Config) -> Result<String> {
    let html = match command {
        Command::Open { attrs } => builders::open(&attrs.attributes()),
        Command::Close => builders::close(),
        Command::Input {
            name,
            input_type,
            value,
            attrs,
        } => builders::input(&name, &input_type, &value, &attrs.attributes()),
        Command::Select {
            name,
            selected,
            options,
            attrs,
        } => {
            let options: SelectOptions = options.into_iter().collect();
            builders::select(&name, &selected, &options, &attrs.attributes())
        }
        Command::Textarea { name, value, attrs } => {
            builders::textarea(&name, &value, &attrs.attributes())
        }
        Command::Checkbox {
            name,
            value,
            checked,
            attrs,
        } => builders::checkbox(&name, &value, checked, &attrs.attributes()),
        Command::Radio {
            name,
            value,
            checked,
            attrs,
        } => builders::radio(&name, &value, checked, &attrs.attributes()),
        Command::Button {
            button_type,
            value,
            attrs,
        } => builders::button(&button_type, &value, &attrs.attributes()),
        Command::File { name, attrs } => builders::file(&name, &attrs.attributes()),
        Command::Password { name, attrs } => builders::password(&name, &attrs.attributes()),
        Command::Email { name, value, attrs } => {
            builders::email(&name, &value, &attrs.attributes())
        }
        Command::Label {
            for_id,
            text,
            required_html,
            position,
            attrs,
        } => {
            let defaults = config.label_options();
            let options = LabelOptions {
                required_html: required_html.unwrap_or(defaults.required_html),
                before_text: match position {
                    Some(MarkerPosition::Before) => true,
                    Some(MarkerPosition::After) => false,
                    None => defaults.before_text,
                },
            };
            builders::label_with(&for_id, &text, &attrs.attributes(), &options)
        }
        Command::Render { path } => {
            let json = read_document(&path)?;
            let document = FormDocument::from_json(&json)
                .with_context(|| format!("failed to parse {}", path.display()))?;
            // The CLI registers no renderers of its own.
            document.render(&CustomTypeRegistry::new())?
        }
    };
    Ok(html)
}

fn read_document(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut json = String::new();
        std::io::stdin()
            .read_to_string(&mut json)
            .context("failed to read form document from stdin")?;
        return Ok(json);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Logs go to stderr so stdout carries only markup.
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
