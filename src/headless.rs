use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::runtime::Handle;

use crate::common::{ChatMessage, Sender, SimulatorEvent};
use crate::simulator::{ChatSession, SimulatorSettings};

/// Runs a windowless conversation and prints the transcript to stdout.
///
/// Uses `messages` when given, otherwise reads stdin one line at a time.
pub async fn run(settings: &SimulatorSettings, messages: Vec<String>, json: bool) -> io::Result<()> {
    let mut session = ChatSession::new(Handle::current(), settings);
    let mut stdout = io::stdout();

    if messages.is_empty() {
        let stdin = BufReader::new(tokio::io::stdin());
        converse_lines(&mut session, stdin, json, &mut stdout).await?;
    } else {
        converse(&mut session, messages, json, &mut stdout).await?;
    }

    log::info!("Conversation finished with {} messages", session.messages().len());
    Ok(())
}

/// Submits each input and waits for its reply before sending the next one.
pub async fn converse<W: Write>(
    session: &mut ChatSession,
    inputs: Vec<String>,
    json: bool,
    out: &mut W,
) -> io::Result<()> {
    for text in inputs {
        exchange(session, &text, json, out).await?;
    }
    Ok(())
}

/// Like [`converse`], but answers each line as soon as it is read.
pub async fn converse_lines<R, W>(
    session: &mut ChatSession,
    reader: R,
    json: bool,
    out: &mut W,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        exchange(session, &line, json, out).await?;
    }
    Ok(())
}

async fn exchange<W: Write>(
    session: &mut ChatSession,
    text: &str,
    json: bool,
    out: &mut W,
) -> io::Result<()> {
    if !session.submit(text) {
        log::debug!("Skipping blank input");
        return Ok(());
    }
    if let Some(sent) = session.messages().last() {
        write_message(out, sent, json)?;
    }
    out.flush()?;

    while session.has_pending_replies() {
        // The session owns a sender, so the channel stays open while it lives.
        let Some(event) = session.next_event().await else {
            break;
        };
        match event {
            SimulatorEvent::ComposingStarted => {
                if !json {
                    writeln!(out, "  ... contato digitando")?;
                }
            }
            SimulatorEvent::ReplyReady(reply) => write_message(out, &reply, json)?,
        }
        out.flush()?;
    }
    Ok(())
}

fn write_message<W: Write>(out: &mut W, message: &ChatMessage, json: bool) -> io::Result<()> {
    if json {
        let line = serde_json::to_string(message)?;
        return writeln!(out, "{line}");
    }

    let who = match message.sender {
        Sender::Me => "eu",
        Sender::Contact => "contato",
    };
    writeln!(
        out,
        "[{}] {who}: {}",
        message.timestamp.with_timezone(&chrono::Local).format("%H:%M:%S"),
        message.text
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::io::AsyncWriteExt;

    use super::*;

    fn fast_session() -> ChatSession {
        let settings = SimulatorSettings {
            compose_delay: Duration::from_millis(5),
            reply_delay: Duration::from_millis(5),
            canned_replies: vec!["Todos os serviços operacionais".to_string()],
        };
        ChatSession::new(Handle::current(), &settings)
    }

    #[tokio::test]
    async fn text_transcript_alternates_speakers() {
        let mut session = fast_session();
        let mut out = Vec::new();
        converse(
            &mut session,
            vec!["teste".to_string(), "  ".to_string(), "de novo".to_string()],
            false,
            &mut out,
        )
        .await
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].ends_with("eu: teste"));
        assert_eq!(lines[1], "  ... contato digitando");
        assert!(lines[2].ends_with("contato: Todos os serviços operacionais"));
        assert!(lines[3].ends_with("eu: de novo"));
        assert_eq!(session.messages().len(), 4);
    }

    #[tokio::test]
    async fn json_transcript_is_one_message_per_line() {
        let mut session = fast_session();
        let mut out = Vec::new();
        converse(&mut session, vec!["oi".to_string()], true, &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let messages: Vec<ChatMessage> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, Sender::Me);
        assert_eq!(messages[1].sender, Sender::Contact);
        assert!(!session.is_composing());
    }

    #[tokio::test]
    async fn lines_are_answered_before_input_ends() {
        let mut session = fast_session();
        let (mut writer, reader) = tokio::io::duplex(64);
        writer.write_all(b"teste\n").await.unwrap();

        // The writer stays open, so the stream never reaches EOF.
        let mut out = Vec::new();
        let finished = tokio::time::timeout(
            Duration::from_millis(300),
            converse_lines(&mut session, BufReader::new(reader), false, &mut out),
        )
        .await;
        assert!(finished.is_err(), "conversation should still be waiting for input");

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("eu: teste"));
        assert!(lines[2].ends_with("contato: Todos os serviços operacionais"));
        drop(writer);
    }

    #[tokio::test]
    async fn line_input_skips_blank_lines() {
        let mut session = fast_session();
        let mut out = Vec::new();
        converse_lines(&mut session, &b"oi\n\n   \ntchau\n"[..], true, &mut out)
            .await
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 4);
        assert_eq!(session.messages().len(), 4);
    }
}
