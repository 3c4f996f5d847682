//! Interactive console loop for talking to the bot without a server.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use rehacchi_core::Result;
use rehacchi_reply::Utterance;
use rehacchi_runtime::TalkPipeline;

/// Which rendering of each utterance the console shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplMode {
    Text,
    Voice,
}

/// Prompt, read, reply, repeat. Ends on EOF or an exit command.
pub async fn run(pipeline: &TalkPipeline, mode: ReplMode) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    loop {
        let waiting = pipeline.waiting();
        if let Some(prompt) = spoken_slot(&waiting, mode) {
            println!("れはっち > {}", prompt);
        }
        print!("YOU > ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim().to_string();
        if line == "exit" || line == "quit" {
            break;
        }
        for utterance in pipeline.respond(&line).await {
            if let Some(spoken) = spoken_slot(&utterance, mode) {
                println!("れはっち > {}", spoken);
            }
            if let Some(link) = link_slot(&utterance, mode) {
                println!("れはっち > {}", link);
            }
        }
    }
    Ok(())
}

fn spoken_slot(utterance: &Utterance, mode: ReplMode) -> Option<&String> {
    match mode {
        ReplMode::Text => utterance.text.as_ref(),
        ReplMode::Voice => utterance.voice.as_ref(),
    }
}

fn link_slot(utterance: &Utterance, mode: ReplMode) -> Option<&String> {
    match mode {
        ReplMode::Text => utterance.text_link.as_ref(),
        ReplMode::Voice => utterance.voice_link.as_ref(),
    }
}
