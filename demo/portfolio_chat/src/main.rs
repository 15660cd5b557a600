mod config;

use config::PortfolioChatConfig;
use folio_core::content::{projects, skills, CONTACT_EMAIL};
use folio_core::{ChatSession, ContactForm, FolioError, GenAiClient, PortfolioGateway};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::signal;
use tracing::{info, warn};

type InputLines = Lines<BufReader<Stdin>>;

const HELP: &str = "\
Commands:
  <text>             chat with the portfolio assistant
  /idea [a, b, ...]  generate a project idea (default stack from config)
  /draft             suggest a message for the contact form
  /contact           fill in and submit the contact form
  /projects          list portfolio projects
  /skills            list skills
  /transcript        print the chat transcript as JSON
  /help              show this help
  /quit              exit";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Chat(String),
    Idea(Option<Vec<String>>),
    Draft,
    Contact,
    Projects,
    Skills,
    Transcript,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Command::Empty;
        }
        if !line.starts_with('/') {
            return Command::Chat(line.to_string());
        }
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
        match cmd {
            "/idea" => {
                let stack: Vec<String> = rest
                    .split(',')
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect();
                Command::Idea((!stack.is_empty()).then_some(stack))
            }
            "/draft" => Command::Draft,
            "/contact" => Command::Contact,
            "/projects" => Command::Projects,
            "/skills" => Command::Skills,
            "/transcript" => Command::Transcript,
            "/help" => Command::Help,
            "/quit" | "/exit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Logging / tracing (stderr, so replies on stdout stay clean)
    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "warn,folio_core=info,portfolio_chat=info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cfg = PortfolioChatConfig::load();
    if cfg.llm.api_key.is_none() {
        warn!(target: "portfolio_chat", "GEMINI_API_KEY not set; every reply will be a fallback");
    }

    // One client for the whole process
    let client = GenAiClient::new(cfg.client_config())?;
    let gateway = PortfolioGateway::from_client(client).with_chat_temperature(cfg.llm.temperature);
    info!(target: "portfolio_chat", model = %cfg.llm.model, "Portfolio companion ready");

    let mut session = ChatSession::with_context(cfg.persona_context.clone());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if let Some(greeting) = session.last() {
        println!("assistant> {}", greeting.content);
    }
    println!("(type /help for commands)");

    loop {
        prompt("you> ");
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = signal::ctrl_c() => {
                info!(target: "portfolio_chat", "Shutting down...");
                break;
            }
        };
        let Some(line) = line else { break };

        match Command::parse(&line) {
            Command::Empty => {}
            Command::Chat(text) => {
                if let Some(reply) = session.send(&gateway, &text).await {
                    println!("assistant> {}", reply.value());
                }
            }
            Command::Idea(stack) => {
                let stack = stack.unwrap_or_else(|| cfg.idea_stack.clone());
                let idea = gateway.generate_idea(stack.as_slice()).await.into_inner();
                println!("idea> {}\n      {}", idea.title, idea.description);
            }
            Command::Draft => {
                let draft = gateway.draft_contact_message().await;
                println!("suggested message> {}", draft.value());
            }
            Command::Contact => run_contact_form(&mut lines).await?,
            Command::Projects => {
                for p in projects() {
                    println!("[{}] {} ({})\n    {}", p.id, p.title, p.tags.join(", "), p.description);
                }
            }
            Command::Skills => {
                let names: Vec<_> = skills().iter().map(|s| s.name).collect();
                println!("{}", names.join(" · "));
            }
            Command::Transcript => {
                println!("{}", serde_json::to_string_pretty(session.messages())?);
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
            Command::Unknown(cmd) => println!("unknown command {cmd}; try /help"),
        }
    }

    Ok(())
}

fn prompt(label: &str) {
    print!("{label}");
    std::io::stdout().flush().ok();
}

async fn ask(lines: &mut InputLines, label: &str) -> std::io::Result<Option<String>> {
    prompt(label);
    lines.next_line().await
}

async fn run_contact_form(lines: &mut InputLines) -> Result<(), Box<dyn std::error::Error>> {
    let mut form = ContactForm::default();
    println!("Contact ({CONTACT_EMAIL}). All fields are required.");

    for (label, field) in [
        ("name> ", &mut form.name),
        ("email> ", &mut form.email),
        ("subject> ", &mut form.subject),
        ("message> ", &mut form.message),
    ] {
        match ask(lines, label).await? {
            Some(v) => *field = v.trim().to_string(),
            None => return Ok(()),
        }
    }

    match form.submit() {
        Ok(receipt) => println!(
            "Message Received! Thanks {}, I'll get back to you within 24-48 business hours. ({})",
            receipt.submission.name,
            receipt.received_at.format("%Y-%m-%d %H:%M UTC")
        ),
        Err(FolioError::MissingField(field)) => println!("Please fill in the {field} field."),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
