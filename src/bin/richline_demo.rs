use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use richline::{
    FormatOptions, Formatter, PrefixLogger, Record, Severity, TagTransform, Theme, Value,
};

#[derive(Parser)]
#[command(name = "richline-demo")]
#[command(about = "Render values and markup as styled terminal lines", long_about = None)]
struct Cli {
    /// Markup strings to render (prints the sample record when empty)
    markup: Vec<String>,

    /// Render a JSON document instead
    #[arg(long, conflicts_with = "markup")]
    json: Option<String>,

    /// YAML theme file overriding the built-in roles
    #[arg(long)]
    theme: Option<PathBuf>,

    /// How markup is turned into output
    #[arg(long, value_enum, default_value_t = Mode::Apply)]
    mode: Mode,

    /// Deepest nesting rendered before truncating
    #[arg(long, default_value_t = richline::format::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print diagnostics for malformed markup
    #[arg(long)]
    check: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Apply,
    Remove,
    Keep,
}

impl From<Mode> for TagTransform {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Apply => TagTransform::Apply,
            Mode::Remove => TagTransform::Remove,
            Mode::Keep => TagTransform::Keep,
        }
    }
}

fn sample() -> Value {
    Record::named("Person")
        .field("Name", "Ann Example")
        .field("Age", 30)
        .field(
            "Contacts",
            Value::mapping([
                ("email", Value::from("ann@example.com")),
                ("github", Value::from("https://github.com/ann")),
                ("telegram", Value::from("t.me/ann")),
                ("mobilePhone", Value::from(1234567890u64)),
            ]),
        )
        .field("Languages", vec!["Go", "Python", "Rust"])
        .field("Height", 1.9)
        .field("Notes", Value::Null)
        .field("IsAdmin", true)
        .field("IsBanned", false)
        .into()
}

fn run(cli: Cli) -> Result<()> {
    let theme = match &cli.theme {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("reading theme {}", path.display()))?;
            Theme::from_yaml(&source)?
        }
        None => Theme::default(),
    };

    let formatter = Formatter::new().with_theme(theme).with_options(
        FormatOptions::default()
            .with_transform(cli.mode.into())
            .with_max_depth(cli.max_depth),
    );
    theme_check(&formatter)?;
    let logger = PrefixLogger::new().with_formatter(formatter.clone());

    if let Some(json) = &cli.json {
        let document: serde_json::Value =
            serde_json::from_str(json).context("parsing --json document")?;
        let rendered = formatter.try_format(&Value::from(document))?;
        println!("{}", rendered);
        return Ok(());
    }

    if !cli.markup.is_empty() {
        for text in &cli.markup {
            if cli.check {
                let (_, diagnostics) = formatter.parser().parse_with_diagnostics(text);
                for diagnostic in diagnostics.iter() {
                    logger.log(Severity::Warning, &[Value::display(diagnostic)])?;
                }
            }
            formatter.print(&[Value::from(text.as_str())])?;
        }
        return Ok(());
    }

    formatter.print(&[sample()])?;
    logger.log(
        Severity::Error,
        &["Could not connect to the server, please try again later.".into()],
    )?;
    logger.log(
        Severity::Success,
        &["The data has been saved successfully.".into()],
    )?;
    logger.log(
        Severity::Warning,
        &["Operation timed out, please try again later.".into()],
    )?;
    logger.log(
        Severity::Info,
        &["The application is running in the debug mode.".into()],
    )?;
    logger.log(
        Severity::Debug,
        &["The value of the variable is".into(), 42.into()],
    )?;
    Ok(())
}

fn theme_check(formatter: &Formatter<'_>) -> Result<()> {
    formatter
        .theme()
        .validate(formatter.registry())
        .context("theme references styles the registry does not define")
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
