//! Outbound Message Sender
//!
//! The contact dialog hands its collected fields to a [`MessageSender`].
//! Delivery is a single asynchronous attempt that reports success or
//! failure only; nothing here retries.

use crate::config::OutboundConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::AsyncWriteExt;

/// A message composed by the contact dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Result of one delivery attempt, posted back into the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Sent,
    Failed { reason: String },
}

impl SendOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SendOutcome::Sent)
    }
}

impl From<Result<()>> for SendOutcome {
    fn from(result: Result<()>) -> Self {
        match result {
            Ok(()) => SendOutcome::Sent,
            Err(e) => SendOutcome::Failed {
                reason: e.to_string(),
            },
        }
    }
}

/// Delivery backend for outbound messages
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Deliver one message
    ///
    /// # Errors
    /// Returns an error when the transport fails or rejects the message
    async fn send(&self, message: &OutboundMessage) -> Result<()>;

    /// Short backend name for logs
    fn name(&self) -> &str;
}

/// Posts `{name, email, message}` as JSON to a webhook
pub struct WebhookSender {
    client: reqwest::Client,
    endpoint: String,
}

impl WebhookSender {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::OutboundFailed {
                reason: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl MessageSender for WebhookSender {
    async fn send(&self, message: &OutboundMessage) -> Result<()> {
        let response = self.client.post(&self.endpoint).json(message).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::OutboundFailed {
                reason: format!("endpoint responded with {}", status),
            });
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "webhook"
    }
}

#[derive(Serialize)]
struct OutboxRecord<'a> {
    sent_at: String,
    #[serde(flatten)]
    message: &'a OutboundMessage,
}

/// Appends each message as one JSON line to a local file
pub struct OutboxSender {
    path: PathBuf,
}

impl OutboxSender {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl MessageSender for OutboxSender {
    async fn send(&self, message: &OutboundMessage) -> Result<()> {
        let record = OutboxRecord {
            sent_at: chrono::Utc::now().to_rfc3339(),
            message,
        };
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    fn name(&self) -> &str {
        "outbox"
    }
}

/// Used when no transport is configured; every send fails
pub struct UnconfiguredSender;

#[async_trait]
impl MessageSender for UnconfiguredSender {
    async fn send(&self, _message: &OutboundMessage) -> Result<()> {
        Err(Error::OutboundNotConfigured)
    }

    fn name(&self) -> &str {
        "unconfigured"
    }
}

/// Records messages in memory and answers with a fixed outcome
#[derive(Default)]
pub struct MemorySender {
    sent: Mutex<Vec<OutboundMessage>>,
    fail: bool,
}

impl MemorySender {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sender whose every attempt fails after recording the message
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl MessageSender for MemorySender {
    async fn send(&self, message: &OutboundMessage) -> Result<()> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(message.clone());
        }
        if self.fail {
            return Err(Error::OutboundFailed {
                reason: "rejected by memory sender".to_string(),
            });
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// Pick the sender for a configuration: webhook, then outbox, else none
pub fn sender_from_config(config: &OutboundConfig) -> Result<Arc<dyn MessageSender>> {
    if let Some(endpoint) = &config.endpoint {
        let sender = WebhookSender::new(endpoint.clone(), Duration::from_secs(config.timeout_secs))?;
        return Ok(Arc::new(sender));
    }
    if let Some(path) = &config.outbox_path {
        return Ok(Arc::new(OutboxSender::new(path.clone())));
    }
    warn!("No outbound transport configured; contact messages will fail");
    Ok(Arc::new(UnconfiguredSender))
}

/// Run one delivery attempt and fold it into an outcome
pub async fn deliver(sender: &dyn MessageSender, message: &OutboundMessage) -> SendOutcome {
    info!("Sending contact message via {}", sender.name());
    let outcome = SendOutcome::from(sender.send(message).await);
    match &outcome {
        SendOutcome::Sent => info!("Contact message delivered via {}", sender.name()),
        SendOutcome::Failed { reason } => {
            error!("Contact message via {} failed: {}", sender.name(), reason)
        }
    }
    outcome
}
