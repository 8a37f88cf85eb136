use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use aura_contracts::brief::{CATEGORY_TRIGGERS, MOOD_TRIGGERS, PLATFORM_TRIGGERS, TONE_TRIGGERS};
use aura_contracts::chat::ChatRequest;
use aura_contracts::events::{ChatEvent, EventPayload, SessionLog};
use aura_contracts::stamp::{Stamper, SystemStamper};
use aura_engine::generate_agent_response;
use clap::{Parser, Subcommand};
use serde_json::{json, Value};

const BAD_REQUEST_MESSAGE: &str = "صيغة الطلب غير صحيحة.";

#[derive(Debug, Parser)]
#[command(name = "aura-rs", version, about = "Aura creative response engine CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run one engine invocation over a `{ "messages": [...] }` request.
    Respond(RespondArgs),
    /// List the recognized vocabulary per category.
    Vocab,
}

#[derive(Debug, Parser)]
struct RespondArgs {
    /// Request JSON file; stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,
    /// Append chat_request/chat_reply/chat_error events to this JSONL file.
    #[arg(long)]
    events: Option<PathBuf>,
    #[arg(long)]
    pretty: bool,
}

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("aura-rs error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Respond(args) => run_respond(args),
        Command::Vocab => {
            print_vocab();
            Ok(0)
        }
    }
}

fn run_respond(args: RespondArgs) -> Result<i32> {
    let stamper = SystemStamper;
    let raw = match args.input {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("failed reading {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let log = args
        .events
        .map(|path| SessionLog::new(path, stamper.next_id()));

    let request: ChatRequest = match serde_json::from_str(&raw) {
        Ok(request) => request,
        Err(err) => {
            record(
                &log,
                ChatEvent::Error,
                json!({ "kind": "bad_request", "detail": err.to_string() }),
            )?;
            emit(&json!({ "error": BAD_REQUEST_MESSAGE }), args.pretty)?;
            return Ok(2);
        }
    };
    record(
        &log,
        ChatEvent::Request,
        json!({ "turns": request.messages.len() }),
    )?;

    match generate_agent_response(request.messages, &stamper) {
        Ok(response) => {
            record(
                &log,
                ChatEvent::Reply,
                json!({
                    "suggestions": response.structured.suggestions.len(),
                    "moodboard": response.structured.moodboard.len(),
                    "deliverables": response.structured.deliverables.len(),
                }),
            )?;
            emit(&serde_json::to_value(&response)?, args.pretty)?;
            Ok(0)
        }
        Err(err) => {
            let kind = if err.is_validation() {
                "validation"
            } else {
                "internal"
            };
            record(
                &log,
                ChatEvent::Error,
                json!({ "kind": kind, "detail": err.to_string() }),
            )?;
            emit(&json!({ "error": err.user_message() }), args.pretty)?;
            Ok(if err.is_validation() { 2 } else { 1 })
        }
    }
}

fn record(log: &Option<SessionLog>, event: ChatEvent, payload: Value) -> Result<()> {
    if let Some(log) = log {
        let payload = payload
            .as_object()
            .cloned()
            .unwrap_or_else(EventPayload::new);
        log.record(event, payload)?;
    }
    Ok(())
}

fn emit(value: &Value, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}

fn print_vocab() {
    println!("deliverable categories:");
    for spec in CATEGORY_TRIGGERS {
        println!("  {}: {}", spec.value.slug(), spec.triggers.join(", "));
    }
    println!("platforms:");
    for spec in PLATFORM_TRIGGERS {
        println!("  {}: {}", spec.value.label(), spec.triggers.join(", "));
    }
    println!("tones:");
    for spec in TONE_TRIGGERS {
        println!("  {}: {}", spec.value.label(), spec.triggers.join(", "));
    }
    println!("color moods:");
    for spec in MOOD_TRIGGERS {
        println!("  {}: {}", spec.value.label(), spec.triggers.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::Cli;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
