//! Line-oriented REPL driving a [`Session`] over stdin/stdout
//!
//! Stdin arrives a line at a time, so the keystroke-level editor is replaced
//! by two conventions: a line ending in TAB asks for suggestions, and a line
//! holding only ESC cancels the contact dialog.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use termfolio::ansi::Styler;
use termfolio::error::Result;
use termfolio::{deliver, AppMode, Effect, MessageSender, OutboundMessage, SendOutcome, Session};

const ESCAPE: &str = "\x1b";
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Repl {
    session: Session,
    sender: Arc<dyn MessageSender>,
    styler: Styler,
    /// Id of the first output line not yet written to stdout
    printed: u64,
    pending: Vec<JoinHandle<()>>,
}

impl Repl {
    pub fn new(session: Session, sender: Arc<dyn MessageSender>, styler: Styler) -> Self {
        Self {
            session,
            sender,
            styler,
            printed: 0,
            pending: Vec::new(),
        }
    }

    pub async fn run(mut self) -> Result<()> {
        let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel::<SendOutcome>();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        self.flush();
        self.show_prompt()?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        debug!("stdin closed");
                        break;
                    };
                    if self.handle_line(&line, &outcome_tx) == Flow::Exit {
                        self.flush();
                        break;
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    if self.session.interrupt() {
                        debug!("Ctrl+C outside the contact dialog, exiting");
                        break;
                    }
                    println!();
                }
                Some(outcome) = outcome_rx.recv() => {
                    // Move past the prompt the outcome interrupted
                    println!();
                    self.session.complete_send(outcome);
                }
            }
            self.flush();
            self.show_prompt()?;
        }

        println!();
        self.shutdown().await;
        Ok(())
    }

    fn handle_line(&mut self, raw: &str, outcome_tx: &mpsc::UnboundedSender<SendOutcome>) -> Flow {
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        if line.trim() == ESCAPE {
            if self.session.state().is_wizard() {
                self.session.interrupt();
            }
            return Flow::Continue;
        }

        if let Some(head) = line.strip_suffix('\t') {
            self.print_suggestions(head);
            return Flow::Continue;
        }

        let before = self.session.output().next_id();
        let effects = self.session.submit(line);

        let output = self.session.output();
        let cleared = output.next_id() > before && !output.lines().any(|l| l.id == before);
        if cleared {
            self.clear_screen();
        }

        let mut flow = Flow::Continue;
        for effect in effects {
            match effect {
                Effect::OpenUrl(url) => {
                    info!("Open requested: {}", url);
                    self.note(&format!("[open] {}", url));
                }
                Effect::Download { path, file_name } => {
                    info!("Download requested: {} as {}", path, file_name);
                    self.note(&format!("[download] {} <- {}", file_name, path));
                }
                Effect::SwitchMode(AppMode::Gui) => {
                    info!("Leaving the CLI for the graphical view");
                    flow = Flow::Exit;
                }
                Effect::SwitchMode(AppMode::Cli) => {}
                Effect::SendMessage(message) => self.spawn_send(message, outcome_tx.clone()),
                other => debug!("Ignoring effect handled by the session: {:?}", other),
            }
        }
        flow
    }

    fn spawn_send(&mut self, message: OutboundMessage, outcome_tx: mpsc::UnboundedSender<SendOutcome>) {
        let sender = Arc::clone(&self.sender);
        let handle = tokio::spawn(async move {
            let outcome = deliver(sender.as_ref(), &message).await;
            if outcome_tx.send(outcome).is_err() {
                warn!("Send finished after the session ended");
            }
        });
        self.pending.retain(|h| !h.is_finished());
        self.pending.push(handle);
    }

    fn print_suggestions(&mut self, head: &str) {
        let result = self.session.suggest(head, head.len());
        if result.is_empty() {
            self.note("(no suggestions)");
            return;
        }
        for (i, item) in result.suggestions.iter().enumerate() {
            println!("{}", self.styler.suggestion(item, i == 0));
        }
    }

    /// Write output lines the session produced since the last flush
    fn flush(&mut self) {
        let output = self.session.output();
        for line in output.since(self.printed) {
            println!("{}", self.styler.line(&line.text));
        }
        self.printed = output.next_id();
    }

    fn note(&self, text: &str) {
        if self.styler.is_enabled() {
            println!("{}", termfolio::ansi::paint(text, None, &[termfolio::ansi::TextAttribute::Dim]));
        } else {
            println!("{}", text);
        }
    }

    fn clear_screen(&self) {
        if self.styler.is_enabled() {
            print!("{}", CLEAR_SCREEN);
        }
    }

    fn show_prompt(&self) -> Result<()> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{}", self.styler.prompt(&self.session.prompt_label()))?;
        stdout.flush()?;
        Ok(())
    }

    /// Give in-flight sends a chance to finish before exiting
    async fn shutdown(&mut self) {
        let pending: Vec<_> = self.pending.drain(..).filter(|h| !h.is_finished()).collect();
        if pending.is_empty() {
            return;
        }
        info!("Waiting for {} message send(s) to finish", pending.len());
        let grace = Duration::from_secs(self.session.config().outbound.timeout_secs + 1);
        if tokio::time::timeout(grace, futures::future::join_all(pending))
            .await
            .is_err()
        {
            warn!("Gave up waiting for message sends");
        }
    }
}
