use std::fs::File;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use promptcraft_core::Session;
use promptcraft_prompts::assemble_prompt;
use promptcraft_service::{BlockingProvider, CompletionProvider, CompletionSettings};
use promptcraft_tui::app::App;
use promptcraft_tui::config::{Command, Config, GenerateArgs};
use promptcraft_tui::report;
use promptcraft_tui::terminal::setup_with_rollback;
use ratatui::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // A missing .env is fine; the environment may already carry the key.
    dotenv::dotenv().ok();
    let config = Config::parse();

    match config.command {
        Some(Command::Generate(ref args)) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .with_writer(io::stderr)
                .init();
            run_generate(&config, args)
        }
        None => {
            let log = File::create(&config.log_file)
                .with_context(|| format!("failed to open {}", config.log_file.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .with_writer(Mutex::new(log))
                .with_ansi(false)
                .init();
            run_tui(&config)
        }
    }
}

fn run_generate(config: &Config, args: &GenerateArgs) -> Result<()> {
    let request = args.request();
    request.validate()?;

    let mut stdout = io::stdout().lock();
    if args.dry_run {
        writeln!(stdout, "{}", assemble_prompt(&request))?;
        return Ok(());
    }

    let Some(provider) = config.provider() else {
        bail!("API key not configured. Set GOOGLE_API_KEY or add it to your .env file.");
    };
    let provider: Arc<dyn CompletionProvider> = provider;
    let provider = BlockingProvider::new(provider).context("failed to start async runtime")?;

    let settings = CompletionSettings {
        temperature: config.temperature(),
    };
    info!(model = ?provider.model_hint(), "generating prompt");
    let generation = provider
        .generate(&request, settings)
        .context("generation failed")?;

    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &generation.sections)?;
        writeln!(stdout)?;
    } else if args.template_only {
        match report::template_only(&generation.sections) {
            Some(template) => writeln!(stdout, "{template}")?,
            None => bail!("the reply contained no prompt template"),
        }
    } else {
        write!(
            stdout,
            "{}",
            report::render_plain(&generation.sections, &generation.response)
        )?;
    }
    Ok(())
}

fn run_tui(config: &Config) -> Result<()> {
    let provider = match config.provider() {
        Some(p) => {
            let p: Arc<dyn CompletionProvider> = p;
            Some(BlockingProvider::new(p).context("failed to start async runtime")?)
        }
        None => None,
    };
    let session = Session::default().with_temperature(config.temperature());
    info!(
        has_key = provider.is_some(),
        model = %config.model,
        "starting interactive session"
    );

    let mut terminal = setup_with_rollback(
        enable_raw_mode,
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        || {
            let raw = disable_raw_mode();
            let mut stdout = io::stdout();
            execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;
            raw
        },
    )
    .context("failed to set up the terminal")?;

    let result = event_loop(&mut terminal, App::new(provider, session));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e}");
    }

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        // The "Generating" overlay is on screen now; run the request.
        if app.is_generating() {
            app.run_generation();
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Ctrl+C always quits
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }
            // q quits unless we're in an input mode
            if key.code == KeyCode::Char('q') && !app.is_input_mode() {
                break;
            }
            app.handle_key(key);
        }
    }

    Ok(())
}
