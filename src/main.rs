use clap::Parser;
use contact_form::terminal::{Terminal, TerminalEvent};
use contact_form::{App, Error, FormConfig, Result, SubmittedRecord};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "contact-form", version, about = "Fill in and submit a contact form")]
struct Cli {
    /// YAML file overriding the header, submit label and field labels/placeholders.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs here; filtered by CONTACT_FORM_LOG (default: info).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the submitted values as JSON on exit.
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = match &cli.config {
        Some(path) => FormConfig::load(path)?,
        None => FormConfig::default(),
    };

    let mut terminal = Terminal::new()?;
    terminal.enter_raw_mode()?;

    let mut app = App::new(config);
    let result = terminal
        .set_line_wrap(false)
        .map_err(Error::from)
        .and_then(|()| event_loop(&mut terminal, &mut app));
    let restored = terminal.restore();
    result?;
    restored?;

    if let Some(record) = app.state().submitted() {
        print_submission(record, cli.json)?;
    }
    Ok(())
}

fn event_loop(terminal: &mut Terminal, app: &mut App) -> Result<()> {
    let mut render_requested = true;

    loop {
        if render_requested {
            terminal.draw(&app.frame(terminal.size()))?;
            render_requested = false;
        }

        if terminal.poll(Duration::from_millis(100))? {
            match terminal.read_event()? {
                TerminalEvent::Key(key) => {
                    app.handle_key(key);
                    render_requested = true;
                }
                TerminalEvent::Resize(_) => {
                    render_requested = true;
                }
            }
        }

        if app.should_exit() {
            return Ok(());
        }
    }
}

fn print_submission(record: &SubmittedRecord, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(record).map_err(std::io::Error::other)?;
        println!("{}", out);
        return Ok(());
    }

    println!("First Name: {}", record.first_name());
    println!("Last Name: {}", record.last_name());
    println!("Email: {}", record.email());
    if let Some(message) = record.message() {
        println!("Message: {}", message);
    }
    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let filter =
        EnvFilter::try_from_env("CONTACT_FORM_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
