//! replydesk CLI entry point.
//!
//! Drives the same state machine a graphical front end would: the key
//! prompt, generation and copy all go through `ReplyApp::dispatch`.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io::{BufRead, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use replydesk::app::{Action, ClipboardAction, CredentialAction, ReplyApp};
use replydesk::domain::{GenerationOutcome, Tone};
use replydesk::infra::app_config::{self, AppConfig};
use replydesk::infra::{
    CredentialStore, FileCredentialBackend, HttpGenerationService, SystemClipboard,
};

/// How long `generate --copy` keeps serving the reply on Linux, where the
/// clipboard content disappears with the process unless a clipboard manager
/// takes it over.
const CLIPBOARD_HOLD: Duration = Duration::from_secs(15);

#[derive(Parser, Debug)]
#[command(name = "replydesk")]
#[command(version)]
#[command(about = "Generate email replies with your own API key", long_about = None)]
struct Args {
    /// Base URL of the generation service (overrides the config file)
    #[arg(long, global = true)]
    service_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage the stored API key
    Key {
        #[command(subcommand)]
        action: KeyCommand,
    },

    /// Generate a reply to an email read from a file or stdin
    Generate {
        /// none, professional, casual, friendly, apologetic or enthusiastic
        #[arg(short, long, default_value = "none")]
        tone: Tone,

        /// Read the email from this file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Also copy the reply to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Show or change settings
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum KeyCommand {
    /// Store a key (prompts when omitted)
    Set { key: Option<String> },
    /// Forget the stored key
    Remove,
    /// Show whether a key is stored
    Status,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    Show,
    SetServiceUrl { url: String },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut config = app_config::load_config();
    if let Some(url) = args.service_url {
        config.service_url = url;
    }

    match args.command {
        Commands::Config { action } => run_config(config, action),
        Commands::Key { action } => {
            run_key(build_app(&config, SystemClipboard::default())?, action)
        }
        Commands::Generate { tone, file, copy } => {
            let clipboard = SystemClipboard::holding_for(CLIPBOARD_HOLD);
            run_generate(build_app(&config, clipboard)?, tone, file, copy).await
        }
    }
}

fn build_app(config: &AppConfig, clipboard: SystemClipboard) -> Result<ReplyApp> {
    let backend = FileCredentialBackend::default_location();
    log::debug!("Using credentials file {}", backend.path().display());
    let service = HttpGenerationService::new(config.generate_endpoint())?;
    log::debug!("Generation endpoint {}", service.endpoint());

    Ok(ReplyApp::new(
        CredentialStore::new(backend),
        Arc::new(service),
        Arc::new(clipboard),
    ))
}

fn run_config(config: AppConfig, action: ConfigCommand) -> Result<()> {
    match action {
        ConfigCommand::Show => {
            println!("service_url = {}", config.service_url);
            println!("endpoint    = {}", config.generate_endpoint());
            println!("data dir    = {}", app_config::app_data_dir().display());
        }
        ConfigCommand::SetServiceUrl { url } => {
            let config = AppConfig { service_url: url };
            app_config::save_config(&config).context("Failed to save config")?;
            println!("Service URL set to {}", config.service_url);
        }
    }
    Ok(())
}

fn run_key(mut app: ReplyApp, action: KeyCommand) -> Result<()> {
    match action {
        KeyCommand::Set { key } => {
            let key = match key {
                Some(key) => key,
                None => prompt_line("Enter your Gemini API key: ")?
                    .context("No API key entered")?,
            };
            save_key(&mut app, key)?;
        }
        KeyCommand::Remove => {
            app.dispatch(Action::Credential(CredentialAction::Remove));
            app.poll_action_messages();
            if let Some(message) = app.state.session.status_message.clone() {
                bail!(message);
            }
            println!("API key removed");
        }
        KeyCommand::Status => match &app.state.credential {
            Some(credential) => println!("API key set ({credential})"),
            None => println!("No API key set"),
        },
    }
    Ok(())
}

fn save_key(app: &mut ReplyApp, key: String) -> Result<()> {
    app.dispatch(Action::Credential(CredentialAction::EditDraft(key)));
    app.dispatch(Action::Credential(CredentialAction::Save));
    app.poll_action_messages();

    if let Some(message) = app.state.session.status_message.clone() {
        bail!(message);
    }
    if let Some(credential) = &app.state.credential {
        println!("API key saved ({credential})");
    }
    Ok(())
}

/// Keeps asking until a key is accepted, like the key prompt that cannot be
/// dismissed while no key exists.
fn prompt_for_key(app: &mut ReplyApp) -> Result<()> {
    eprintln!("This app uses your own Gemini API key. It is stored locally and only");
    eprintln!("sent to the generation service when generating replies.");
    eprintln!("Get one at https://aistudio.google.com/apikey");

    while app.state.session.modal_visible {
        let Some(key) = prompt_line("Enter your Gemini API key: ")? else {
            bail!("No API key entered");
        };
        app.dispatch(Action::Credential(CredentialAction::EditDraft(key)));
        app.dispatch(Action::Credential(CredentialAction::Save));
        app.poll_action_messages();
        if let Some(message) = &app.state.session.status_message {
            eprintln!("{message}");
        }
    }
    Ok(())
}

async fn run_generate(
    mut app: ReplyApp,
    tone: Tone,
    file: Option<PathBuf>,
    copy: bool,
) -> Result<()> {
    if app.state.session.modal_visible {
        if !std::io::stdin().is_terminal() {
            bail!("No API key set. Run `replydesk key set` first.");
        }
        prompt_for_key(&mut app)?;
    }

    let email = read_email(file.as_deref())?;
    let outcome = app.submit(email, tone).await?;

    match outcome {
        GenerationOutcome::Success { reply_text } => {
            println!("{reply_text}");
            if copy {
                if cfg!(target_os = "linux") {
                    eprintln!(
                        "Keeping the reply on the clipboard for up to {}s, paste it now.",
                        CLIPBOARD_HOLD.as_secs()
                    );
                }
                app.dispatch(Action::Clipboard(ClipboardAction::Copy));
                if app.state.session.copied {
                    eprintln!("Copied! ✓");
                }
            }
            Ok(())
        }
        GenerationOutcome::AuthRejected | GenerationOutcome::TransientFailure => {
            let message = app.state.session.error_message.clone().unwrap_or_default();
            if app.state.session.modal_visible {
                eprintln!("Run `replydesk key set` to enter a new key.");
            }
            bail!(message)
        }
    }
}

fn read_email(file: Option<&std::path::Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            if std::io::stdin().is_terminal() {
                eprintln!("Paste the email, then press Ctrl-D:");
            }
            let mut email = String::new();
            std::io::stdin()
                .read_to_string(&mut email)
                .context("Failed to read email from stdin")?;
            Ok(email)
        }
    }
}

/// Reads one line from stdin. `None` on end of input.
fn prompt_line(prompt: &str) -> Result<Option<String>> {
    eprint!("{prompt}");
    std::io::stderr().flush().ok();

    let mut line = String::new();
    let read = std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
