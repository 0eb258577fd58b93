use clap::{Parser, Subcommand};
use serde::Serialize;
use std::error::Error;
use std::io;
use std::path::PathBuf;
use steply_mask::config::{FieldConfig, ReportKind};
use steply_mask::input::{KeyOutcome, MaskEditor};
use steply_mask::mask::format::DEFAULT_MASK_CHAR;
use steply_mask::mask::{LiteralMode, MaskOutput, PatternCache, presets};
use steply_mask::terminal::{Terminal, TerminalEvent};
use steply_mask::validation::{
    Trigger, ValidationConfig, ValidationReporter, ValidatorRegistry, ValidityCallback,
};
use steply_mask::{MaskedInput, logging};

#[derive(Debug, Parser)]
#[command(name = "steply-mask", version, about = "Format text through input masks")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Format TEXT through a pattern and print raw and formatted values.
    Format {
        text: String,
        /// Pattern string or preset name (see `presets`).
        #[arg(short, long)]
        pattern: String,
        #[arg(long, default_value_t = DEFAULT_MASK_CHAR)]
        mask_char: char,
        /// Write the separator after a finished group right away.
        #[arg(long)]
        eager: bool,
        /// Validator key to run on the result.
        #[arg(long)]
        validator: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Print the placeholder of a pattern.
    Placeholder {
        #[arg(short, long)]
        pattern: String,
        #[arg(long, default_value_t = DEFAULT_MASK_CHAR)]
        mask_char: char,
    },
    /// List preset patterns.
    Presets,
    /// List built-in validator keys.
    Validators,
    /// Edit a masked value interactively.
    Edit {
        #[arg(short, long, conflicts_with = "config")]
        pattern: Option<String>,
        /// YAML field definition.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Serialize)]
struct FormatReport<'a> {
    #[serde(flatten)]
    output: &'a MaskOutput,
    complete: bool,
    valid: Option<bool>,
}

fn main() {
    logging::init();
    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Format {
            text,
            pattern,
            mask_char,
            eager,
            validator,
            json,
        } => {
            let literal_mode = if eager {
                LiteralMode::Eager
            } else {
                LiteralMode::Lazy
            };
            let input = MaskedInput::from_source(&mut PatternCache::new(), pattern.as_str())
                .with_mask_char(mask_char)
                .with_literal_mode(literal_mode);
            format_text(input, text.as_str(), validator, json)
        }
        Command::Placeholder { pattern, mask_char } => {
            let input = MaskedInput::from_source(&mut PatternCache::new(), pattern.as_str())
                .with_mask_char(mask_char);
            println!("{}", input.placeholder());
            Ok(())
        }
        Command::Presets => {
            for (name, pattern) in presets::all() {
                println!("{name:<20} {pattern}");
            }
            Ok(())
        }
        Command::Validators => {
            for key in ValidatorRegistry::default().keys() {
                println!("{key}");
            }
            Ok(())
        }
        Command::Edit { pattern, config } => {
            let field = match (pattern, config) {
                (_, Some(path)) => FieldConfig::load(&path)?,
                (Some(pattern), None) => FieldConfig::new(pattern),
                (None, None) => return Err("edit needs --pattern or --config".into()),
            };
            edit_field(&field)
        }
    }
}

fn format_text(
    mut input: MaskedInput,
    text: &str,
    validator: Option<String>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    if let Some(key) = validator {
        let config = ValidationConfig::key(key).with_trigger(Trigger::OnCommit);
        let reporter = ValidationReporter::new(config, &ValidatorRegistry::default());
        input = input.with_validation(reporter);
    }

    input.change(text);
    let report = FormatReport {
        output: input.output(),
        complete: input.is_complete(),
        valid: input.validation().and_then(|reporter| reporter.last_result()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("formatted: {}", report.output.formatted);
    println!("raw:       {}", report.output.raw.as_deref().unwrap_or("(none)"));
    println!("display:   {}", input.display());
    println!("complete:  {}", report.complete);
    if let Some(valid) = report.valid {
        println!("valid:     {}", valid);
    }
    Ok(())
}

fn edit_field(field: &FieldConfig) -> Result<(), Box<dyn Error>> {
    let report_as = field.validation.as_ref().map(|spec| spec.report_as);
    let callback: Option<ValidityCallback> = match report_as {
        Some(ReportKind::Callback) => Some(Box::new(|valid: bool| {
            tracing::info!(valid, "validity reported");
        })),
        _ => None,
    };
    let input = field.build_input(&mut PatternCache::new(), callback)?;
    let mut editor = MaskEditor::new(input);

    let mut terminal = Terminal::new();
    terminal.enter_raw_mode()?;
    let outcome = edit_loop(&mut terminal, &mut editor, field.label());
    terminal.finish_line()?;
    terminal.exit_raw_mode()?;

    if outcome? == KeyOutcome::Committed {
        let input = editor.into_input();
        println!("{}", serde_json::to_string_pretty(input.output())?);
    }
    Ok(())
}

fn edit_loop(
    terminal: &mut Terminal,
    editor: &mut MaskEditor,
    label: &str,
) -> io::Result<KeyOutcome> {
    let mut buf = String::new();
    loop {
        terminal.render_field(&editor.field_line(label, &mut buf))?;

        let TerminalEvent::Key(key) = terminal.read_event()? else {
            continue;
        };
        match editor.on_key(key) {
            KeyOutcome::Committed => {
                terminal.render_field(&editor.field_line(label, &mut buf))?;
                return Ok(KeyOutcome::Committed);
            }
            KeyOutcome::Exit => return Ok(KeyOutcome::Exit),
            KeyOutcome::Handled | KeyOutcome::Ignored => {}
        }
    }
}
