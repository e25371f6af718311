//! CLI binary for wikitalk.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wikitalk::{Assistant, ChatSession, Language, Reply, WikiTalkConfig, WikiTalkError};

/// WikiTalk: ask Wikipedia questions in plain language.
#[derive(Parser)]
#[command(name = "wikitalk", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long, env = "WIKITALK_CONFIG")]
    config: Option<PathBuf>,

    /// Wikipedia language edition (en, bg, ru). Overrides the config file.
    #[arg(short, long)]
    lang: Option<Language>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// Ask a single question and print the answer.
    Ask {
        /// The question, e.g. "Who is Marie Curie?".
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Print the ranked results as JSON instead of a reply.
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive chat on stdin.
    Chat,

    /// List supported languages.
    Languages,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only answers.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wikitalk=info,wikitalk_search=warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => WikiTalkConfig::from_file(path)?,
        None => {
            let path = WikiTalkConfig::default_config_path();
            if path.exists() {
                WikiTalkConfig::from_file(&path)?
            } else {
                WikiTalkConfig::default()
            }
        }
    };
    if let Some(lang) = cli.lang {
        config.language = lang;
    }

    match cli.command.unwrap_or(Command::Chat) {
        Command::Ask { query, json } => run_ask(config, &query.join(" "), json).await,
        Command::Chat => run_chat(config).await,
        Command::Languages => {
            for lang in Language::all() {
                println!("{}  {}", lang.code(), lang.name());
            }
            Ok(())
        }
    }
}

async fn run_ask(config: WikiTalkConfig, query: &str, json: bool) -> anyhow::Result<()> {
    let assistant = Assistant::new(config)?;
    let language = assistant.language();

    if json {
        let results = assistant.lookup(query, language).await?;
        let output = serde_json::json!({
            "query": query,
            "language": language,
            "results": results,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let reply = assistant.ask(query).await?;
        print_reply(&reply, language);
    }
    Ok(())
}

async fn run_chat(config: WikiTalkConfig) -> anyhow::Result<()> {
    let mut assistant = Assistant::new(config)?;
    let mut session = ChatSession::new(assistant.language());

    let text = wikitalk::locale::strings(assistant.language());
    println!("WikiTalk v{}", env!("CARGO_PKG_VERSION"));
    println!("{}\n{}", text.welcome, text.welcome_sub);
    println!("Type /lang <code> to switch language, /quit to exit.\n");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}", chat_prompt(assistant.language()));
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();

        if input.is_empty() {
            continue;
        }
        if input == "/quit" || input == "/exit" {
            break;
        }
        if let Some(code) = input.strip_prefix("/lang") {
            match code.trim().parse::<Language>() {
                Ok(lang) => {
                    assistant.set_language(lang);
                    session.set_language(lang);
                    println!("{} ({})\n", lang.name(), lang.code());
                }
                Err(e) => println!("{e}\n"),
            }
            continue;
        }

        let language = assistant.language();
        session.push_user(input);
        eprintln!("{}", wikitalk::locale::strings(language).thinking);
        match assistant.ask(input).await {
            Ok(reply) => {
                print_reply(&reply, language);
                session.push_assistant(reply);
            }
            Err(WikiTalkError::Timeout(reason)) => println!("({reason})\n"),
            Err(e) => return Err(e.into()),
        }
    }

    tracing::debug!(
        messages = session.messages.len(),
        title = %session.title,
        language = %session.language,
        "chat ended"
    );
    Ok(())
}

/// Input prompt for the chat loop, in the active language.
fn chat_prompt(language: Language) -> String {
    format!("{} > ", wikitalk::locale::strings(language).prompt)
}

fn print_reply(reply: &Reply, language: Language) {
    println!("\n{}\n", reply.content);
    if !reply.sources.is_empty() {
        println!("{}:", wikitalk::locale::strings(language).sources_heading);
        for (i, source) in reply.sources.iter().enumerate() {
            println!("  [{}] {} - {}", i + 1, source.title, source.url);
        }
        println!();
    }
}
