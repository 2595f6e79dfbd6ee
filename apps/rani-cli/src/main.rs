//! RANI CLI - interactive terminal front-end
//!
//! A line-based loop over the core's retrieve/generate capability. The
//! conversation log lives for the process lifetime.

use anyhow::Result;
use rani_core::guard::filter_spam;
use rani_core::{ChatEngine, ConversationLog, GeminiClient, RaniConfig};
use std::io::{BufRead, Write};
use std::sync::Arc;

const EXIT_KEYWORDS: [&str; 3] = ["keluar", "exit", "quit"];

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rani_core=warn".parse()?),
        )
        .init();

    let config = RaniConfig::from_env()?;
    let provider = Arc::new(GeminiClient::new(&config.api_key));

    println!("{}", "=".repeat(65));
    println!("\u{1F4AC} RANI - Asisten Layanan Informasi Pengadilan Agama Medan (CLI)");
    println!("Ketik 'keluar' untuk berhenti.");
    println!("{}", "=".repeat(65));

    // Index build is the slow part of startup; any failure here is fatal
    let engine = ChatEngine::from_config(provider, &config).await?;

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let mut log = ConversationLog::new();

    loop {
        print!("\n\u{1F464} Kamu: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!("\n\u{1F44B} Input ditutup. Sampai jumpa!");
            break;
        };
        let input = line?.trim().to_string();

        if input.is_empty() {
            continue;
        }
        if EXIT_KEYWORDS.contains(&input.to_lowercase().as_str()) {
            println!("\u{1F44B} Sampai jumpa lagi!");
            break;
        }
        if !filter_spam(&input) {
            println!("\u{1FAE3} Hmm, pertanyaannya terlalu pendek atau tidak pantas. Coba lagi ya!");
            continue;
        }

        log.push_user(&input);
        println!("\u{1F916} RANI sedang berpikir...\n");

        let reply = engine.answer(&input, log.turns()).await;
        println!("\u{1FA84} RANI: {}\n", reply.jawaban);
        log.push_assistant(&reply.jawaban);
    }

    Ok(())
}
