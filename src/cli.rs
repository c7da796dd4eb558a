use crate::composer::Composer;
use crate::config::{Config, load_config};
use crate::model::{DeliveryStatus, FileHandle, Message};
use crate::pairing::PairingSession;
use crate::session::ChatSession;
use crate::store::ChatStore;
use crate::transport::SimulatedTransport;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "chatfront")]
#[command(about = "Conversation view-model demo for a WhatsApp Web style client")]
#[command(version = crate::VERSION)]
pub struct Cli {
    /// Path to a JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List conversations with their latest message previews
    Chats {
        /// Case-insensitive name filter
        #[arg(long, short = 'q')]
        query: Option<String>,
    },
    /// Show the message history of one conversation
    History {
        #[arg(long)]
        chat: String,
    },
    /// Send a message (optionally with an attachment) to a conversation
    Send {
        #[arg(long)]
        chat: String,
        #[arg(long, short = 'm', default_value = "")]
        message: String,
        /// Attachment as name:content-type, e.g. photo.png:image/png
        #[arg(long)]
        attach: Option<String>,
    },
    /// Clear a conversation's history
    Clear {
        #[arg(long)]
        chat: String,
    },
    /// Mute or unmute a conversation
    Mute {
        #[arg(long)]
        chat: String,
        #[arg(long)]
        undo: bool,
    },
    /// Show a simulated QR pairing token
    Pair,
    /// Show store status
    Status,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let store = build_store(&config);

    match cli.command {
        Commands::Chats { query } => cmd_chats(&store, query.as_deref()).await,
        Commands::History { chat } => cmd_history(&store, &chat).await,
        Commands::Send {
            chat,
            message,
            attach,
        } => cmd_send(&store, &config, &chat, &message, attach.as_deref()).await,
        Commands::Clear { chat } => cmd_clear(&store, &chat).await,
        Commands::Mute { chat, undo } => cmd_mute(&store, &chat, undo).await,
        Commands::Pair => cmd_pair(&config),
        Commands::Status => cmd_status(&store).await,
    }
}

fn build_store(config: &Config) -> Arc<ChatStore> {
    if config.load_sample_data {
        Arc::new(ChatStore::with_sample_data())
    } else {
        Arc::new(ChatStore::new())
    }
}

async fn cmd_chats(store: &Arc<ChatStore>, query: Option<&str>) -> Result<()> {
    if let Some(query) = query {
        for chat in store.search(query).await {
            println!("{}  {} ({})", chat.id, chat.name, chat.status);
        }
        return Ok(());
    }
    for entry in store.chat_list().await {
        let muted = if entry.conversation.muted { " 🔇" } else { "" };
        let preview = entry.preview.unwrap_or_else(|| "(no messages)".to_string());
        println!(
            "{}  {}{}  —  {}",
            entry.conversation.id, entry.conversation.name, muted, preview
        );
    }
    Ok(())
}

async fn cmd_history(store: &Arc<ChatStore>, chat: &str) -> Result<()> {
    let mut session = ChatSession::new(Arc::clone(store));
    let Some(conversation) = session.select(chat).await else {
        println!("No such conversation: {}", chat);
        return Ok(());
    };
    println!("{} — {}", conversation.name, conversation.status);
    let messages = session.messages().await;
    if messages.is_empty() {
        println!("No messages yet in this chat.");
        return Ok(());
    }
    for msg in &messages {
        print_message(msg);
    }
    Ok(())
}

async fn cmd_send(
    store: &Arc<ChatStore>,
    config: &Config,
    chat: &str,
    message: &str,
    attach: Option<&str>,
) -> Result<()> {
    let mut session = ChatSession::new(Arc::clone(store));
    let _ = session.select(chat).await;

    let attachment = attach.map(parse_attachment).transpose()?;
    let composer = Composer::with_transport(
        Arc::clone(store),
        Arc::new(SimulatedTransport::new(config.send_latency())),
    );

    match composer
        .submit(session.active_id(), message, attachment)
        .await?
    {
        Some(submission) => {
            println!("Sending…");
            submission.settled().await;
            for msg in session.messages().await {
                print_message(&msg);
            }
        }
        None => println!("Nothing sent."),
    }
    Ok(())
}

async fn cmd_clear(store: &Arc<ChatStore>, chat: &str) -> Result<()> {
    let removed = store.clear(chat).await;
    println!("Removed {} messages from {}", removed, chat);
    Ok(())
}

async fn cmd_mute(store: &Arc<ChatStore>, chat: &str, undo: bool) -> Result<()> {
    if store.set_muted(chat, !undo).await {
        println!("{} {}", if undo { "Unmuted" } else { "Muted" }, chat);
    } else {
        println!("No such conversation: {}", chat);
    }
    Ok(())
}

fn cmd_pair(config: &Config) -> Result<()> {
    let session = PairingSession::with_ttl(config.pairing_ttl());
    println!("Scan to link a device (simulated):");
    println!("  {}", session.qr_payload());
    println!("  expires in {}s", session.seconds_remaining());
    Ok(())
}

async fn cmd_status(store: &Arc<ChatStore>) -> Result<()> {
    println!("{} chatfront v{}", crate::LOGO, crate::VERSION);
    println!("conversations: {}", store.conversations().await.len());
    println!("messages:      {}", store.message_count().await);
    Ok(())
}

/// Parse `name:content-type` into an attachment handle. The byte size is
/// unknown for a simulated attachment, so it is reported as zero.
fn parse_attachment(raw: &str) -> Result<FileHandle> {
    let (name, content_type) = raw
        .rsplit_once(':')
        .with_context(|| format!("expected name:content-type, got {}", raw))?;
    Ok(FileHandle {
        handle: format!("local://{}", name),
        content_type: content_type.to_string(),
        name: name.to_string(),
        size: 0,
    })
}

fn print_message(msg: &Message) {
    let direction = if msg.is_outbound() { "→" } else { "←" };
    let sender = msg
        .sender_name
        .as_deref()
        .map(|s| format!("{}: ", s))
        .unwrap_or_default();
    let body = match (&msg.content, &msg.media) {
        (Some(text), Some(media)) => format!("{} [{}]", text, media.kind.label()),
        (Some(text), None) => text.clone(),
        (None, Some(media)) => format!("[{}]", media.kind.label()),
        (None, None) => String::new(),
    };
    let status = match msg.status {
        Some(DeliveryStatus::Sending) => " ⏳",
        Some(DeliveryStatus::Sent) => " ✓",
        Some(DeliveryStatus::Delivered) => " ✓✓",
        Some(DeliveryStatus::Read) => " ✓✓ (read)",
        None => "",
    };
    println!(
        "[{}] {} {}{}{}",
        msg.display_time(),
        direction,
        sender,
        body,
        status
    );
}
