//! Integration Tests for the Contact Dialog
//!
//! Walk the dialog through a session, deliver the finished message through a
//! real sender on the tokio runtime and feed the outcome back.

#[path = "../test_utils/fixtures.rs"]
mod fixtures;

use fixtures::{run, test_session};
use termfolio::outbound::{MemorySender, OutboxSender};
use termfolio::wizard::{BUSY_MESSAGE, FAILURE_MESSAGE};
use termfolio::{deliver, Effect, OutboundMessage, Session, WizardState};

/// Fill the dialog and return the message the session asked to send
fn complete_dialog(session: &mut Session) -> OutboundMessage {
    assert!(session.submit("portfolio dev contact").is_empty());
    session.submit("Grace");
    session.submit("grace@example.com");
    let mut effects = session.submit("Let's build something");
    match effects.pop() {
        Some(Effect::SendMessage(message)) => message,
        other => panic!("expected a send request, got {:?}", other),
    }
}

#[test]
fn test_dialog_prompts_and_echoes() {
    let mut session = test_session();
    assert_eq!(
        run(&mut session, "portfolio dev contact"),
        vec!["Press Esc or Ctrl+C to cancel."]
    );
    assert_eq!(session.prompt_label(), "Name: ");
    assert!(session.state().is_wizard());

    assert_eq!(run(&mut session, "  Grace  "), vec!["Name: Grace"]);
    assert_eq!(session.prompt_label(), "Email: ");
    assert_eq!(run(&mut session, "grace@example.com"), vec!["Email: grace@example.com"]);
    assert_eq!(session.prompt_label(), "Message: ");
    assert_eq!(
        run(&mut session, "Hello there"),
        vec!["Message: Hello there", "Sending..."]
    );
    assert_eq!(session.wizard().state(), WizardState::Sending);
}

#[test]
fn test_dialog_rejects_invalid_values() {
    let mut session = test_session();
    session.submit("portfolio dev contact");

    assert_eq!(
        run(&mut session, "   "),
        vec!["Name cannot be empty. Please enter your name:"]
    );
    let long_name = "x".repeat(101);
    assert_eq!(
        run(&mut session, &long_name),
        vec!["Name is too long (max 100 characters). Please try again:"]
    );
    assert_eq!(session.wizard().state(), WizardState::CollectingName);

    session.submit("Grace");
    assert_eq!(
        run(&mut session, ""),
        vec!["Email cannot be empty. Please enter your email:"]
    );
    assert_eq!(
        run(&mut session, "grace@localhost"),
        vec!["Invalid email format. Please enter a valid email:"]
    );
    assert_eq!(session.wizard().draft().email, "");

    session.submit("grace@example.com");
    assert_eq!(
        run(&mut session, ""),
        vec!["Message cannot be empty. Please enter your message:"]
    );
    assert_eq!(session.wizard().state(), WizardState::CollectingMessage);
}

#[test]
fn test_dialog_input_is_not_dispatched() {
    let mut session = test_session();
    session.submit("portfolio dev contact");
    let effects = session.submit("exit");
    assert!(effects.is_empty());
    assert_eq!(session.wizard().draft().name, "exit");
    assert!(session.suggest("por", 3).is_empty());
}

#[test]
fn test_cancel_returns_to_normal_mode() {
    let mut session = test_session();
    session.submit("portfolio dev contact");
    session.submit("Grace");
    assert!(session.cancel_wizard());
    assert_eq!(session.output().texts().last().copied(), Some("^C"));
    assert_eq!(session.prompt_label(), "guest@portfolio:~$ ");
    assert!(session.wizard().draft().name.is_empty());

    // A fresh dialog starts over
    session.submit("portfolio dev contact");
    assert_eq!(session.prompt_label(), "Name: ");
}

#[test]
fn test_interrupt_cancels_collecting_dialog() {
    let mut session = test_session();
    session.submit("portfolio dev contact");
    assert!(!session.interrupt());
    assert_eq!(session.output().texts().last().copied(), Some("^C"));
    assert!(!session.state().is_wizard());

    // Outside the dialog an interrupt ends the session
    assert!(session.interrupt());
}

#[test]
fn test_interrupt_while_sending_keeps_session() {
    let mut session = test_session();
    let message = complete_dialog(&mut session);
    assert_eq!(session.wizard().state(), WizardState::Sending);

    assert!(!session.interrupt());
    assert_eq!(session.output().texts().last().copied(), Some(BUSY_MESSAGE));
    assert_eq!(session.wizard().state(), WizardState::Sending);

    let outcome = tokio_test::block_on(deliver(&MemorySender::new(), &message));
    session.complete_send(outcome);
    assert_eq!(session.wizard().state(), WizardState::Idle);
}

#[tokio::test]
async fn test_successful_delivery() {
    let mut session = test_session();
    let message = complete_dialog(&mut session);
    assert_eq!(message.name, "Grace");
    assert_eq!(message.email, "grace@example.com");

    // Sending cannot be cancelled and further input waits
    assert!(!session.cancel_wizard());
    assert_eq!(run(&mut session, "hello?"), vec![BUSY_MESSAGE]);

    let sender = MemorySender::new();
    let outcome = deliver(&sender, &message).await;
    assert!(outcome.is_sent());
    assert_eq!(sender.sent(), vec![message]);

    let start = session.output().next_id();
    session.complete_send(outcome);
    let report: Vec<String> = session.output().since(start).map(|l| l.text.clone()).collect();
    assert_eq!(
        report,
        vec![
            "From: Grace <grace@example.com>",
            "Message: Let's build something",
            "Status: Sent successfully! ✓",
        ]
    );
    assert_eq!(session.wizard().state(), WizardState::Idle);
    assert_eq!(session.prompt_label(), "guest@portfolio:~$ ");
}

#[tokio::test]
async fn test_failed_delivery() {
    let mut session = test_session();
    let message = complete_dialog(&mut session);

    let outcome = deliver(&MemorySender::failing(), &message).await;
    assert!(!outcome.is_sent());
    session.complete_send(outcome);

    assert_eq!(session.output().texts().last().copied(), Some(FAILURE_MESSAGE));
    assert_eq!(session.wizard().state(), WizardState::Idle);
}

#[tokio::test]
async fn test_outbox_delivery_appends_json_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("outbox.jsonl");
    let sender = OutboxSender::new(path.clone());

    let mut session = test_session();
    let message = complete_dialog(&mut session);
    assert!(deliver(&sender, &message).await.is_sent());
    assert!(deliver(&sender, &message).await.is_sent());

    let written = std::fs::read_to_string(&path).unwrap();
    let records: Vec<serde_json::Value> = written
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["name"], "Grace");
    assert_eq!(records[0]["email"], "grace@example.com");
    assert!(records[0]["sent_at"].is_string());
}

#[test]
fn test_history_keeps_accepted_dialog_values() {
    let mut session = test_session();
    session.submit("portfolio dev contact");
    session.submit("");
    session.submit("Grace");
    let entries: Vec<&str> = session.history().entries().collect();
    assert_eq!(entries, vec!["Grace", "portfolio dev contact"]);
}

#[test]
fn test_unconfigured_transport_reports_failure() {
    let mut session = test_session();
    let message = complete_dialog(&mut session);

    let sender = termfolio::sender_from_config(&Default::default()).unwrap();
    assert_eq!(sender.name(), "unconfigured");
    let outcome = tokio_test::block_on(deliver(sender.as_ref(), &message));
    session.complete_send(outcome);
    assert_eq!(session.output().texts().last().copied(), Some(FAILURE_MESSAGE));
}
