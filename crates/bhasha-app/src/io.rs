use bhasha_core::language::{find_language, supported_languages};
use bhasha_core::session::SessionSnapshot;
use bhasha_core::types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

/// Line-oriented stand-in for the UI collaborator: plain lines become
/// input text plus a translate trigger, `:` commands drive the other
/// session operations, and snapshots render as they arrive.
pub async fn console_io(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    if atty::is(atty::Stream::Stdin) {
        println!("bhasha: type text to translate, :help for commands");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut renderer = ConsoleRenderer::default();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            event = app_to_ui_rx.recv() => {
                if let AppEvent::StateChanged(snapshot) = event? {
                    renderer.render(&snapshot);
                }
            }
            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        if !handle_line(line.trim(), &ui_to_app_tx).await? {
                            break;
                        }
                    }
                    None => break, // stdin closed
                }
            }
        }
    }

    ui_to_app_tx.send(AppEvent::Shutdown).await.ok();
    Ok(())
}

async fn handle_line(line: &str, tx: &AsyncSender<AppEvent>) -> anyhow::Result<bool> {
    match line {
        "" => {}
        ":quit" | ":q" => return Ok(false),
        ":swap" => tx.send(AppEvent::SwapLanguages).await?,
        ":langs" => {
            for language in supported_languages() {
                println!("  {}  {}", language.code, language.name);
            }
        }
        ":help" => {
            println!("  :from <code>   set source language");
            println!("  :to <code>     set target language");
            println!("  :swap          swap languages and re-translate");
            println!("  :langs         list supported languages");
            println!("  :quit          exit");
        }
        _ if line.starts_with(":from ") || line.starts_with(":to ") => {
            let (command, code) = line.split_once(' ').expect("checked prefix");
            match find_language(code.trim()) {
                Some(language) => {
                    let event = if command == ":from" {
                        AppEvent::SetSourceLanguage(language.clone())
                    } else {
                        AppEvent::SetTargetLanguage(language.clone())
                    };
                    tx.send(event).await?;
                }
                None => println!("unknown language code: {}", code.trim()),
            }
        }
        _ if line.starts_with(':') => println!("unknown command: {line}"),
        text => {
            tx.send(AppEvent::SetInputText(text.to_string())).await?;
            tx.send(AppEvent::Translate).await?;
        }
    }
    Ok(true)
}

/// Prints state transitions rather than every snapshot, so typing and
/// language changes stay quiet until an attempt completes.
#[derive(Default)]
struct ConsoleRenderer {
    in_flight: bool,
    last_error: Option<String>,
}

impl ConsoleRenderer {
    fn render(&mut self, snapshot: &SessionSnapshot) {
        if snapshot.is_loading {
            if !self.in_flight {
                println!("translating…");
            }
            self.in_flight = true;
            return;
        }

        let finished = std::mem::replace(&mut self.in_flight, false);

        if let Some(error) = &snapshot.error {
            if finished || self.last_error.as_deref() != Some(error.message.as_str()) {
                println!("error: {}", error.message);
            }
            self.last_error = Some(error.message.clone());
            return;
        }
        self.last_error = None;

        if finished && !snapshot.translated_text.is_empty() {
            println!(
                "[{} {}] {}",
                snapshot.target_language.code,
                snapshot.target_language.name,
                snapshot.translated_text
            );
            if snapshot.dropped_chunks > 0 {
                println!("note: {} chunk(s) failed and were dropped", snapshot.dropped_chunks);
            }
        }
    }
}
