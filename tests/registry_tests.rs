// Unit tests for the process-wide session registry
//
// These tests verify the at-most-one-session-per-identifier invariant
// and the lookup/broadcast accessors.

use scribe_relay::protocol::ClientMessage;
use scribe_relay::session::{SessionRegistry, SessionState};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};

fn handle_parts() -> (
    watch::Receiver<SessionState>,
    mpsc::Sender<ClientMessage>,
    mpsc::Receiver<ClientMessage>,
) {
    let (state_tx, state_rx) = watch::channel(SessionState::Connecting);
    drop(state_tx);
    let (tx, rx) = mpsc::channel(8);
    (state_rx, tx, rx)
}

#[tokio::test]
async fn test_concurrent_registration_has_single_winner() {
    let registry = Arc::new(SessionRegistry::new());

    let mut tasks = Vec::new();
    for _ in 0..16 {
        let registry = Arc::clone(&registry);
        tasks.push(tokio::spawn(async move {
            let (state_rx, tx, _rx) = handle_parts();
            registry.register("contested", state_rx, tx).await.is_ok()
        }));
    }

    let mut winners = 0;
    for task in tasks {
        if task.await.unwrap() {
            winners += 1;
        }
    }
    assert_eq!(winners, 1);
    assert_eq!(registry.len().await, 1);
}

#[tokio::test]
async fn test_identifier_reusable_only_after_deregister() {
    let registry = SessionRegistry::new();

    let (state_rx, tx, _rx) = handle_parts();
    registry.register("abc", state_rx, tx).await.unwrap();

    let (state_rx, tx, _rx2) = handle_parts();
    assert!(registry.register("abc", state_rx, tx).await.is_err());

    registry.deregister("abc").await;

    let (state_rx, tx, _rx3) = handle_parts();
    assert!(registry.register("abc", state_rx, tx).await.is_ok());
}

#[tokio::test]
async fn test_deregister_unknown_is_a_no_op() {
    let registry = SessionRegistry::new();
    registry.deregister("ghost").await;
    assert!(registry.is_empty().await);
}

#[tokio::test]
async fn test_snapshot_reports_current_state() {
    let registry = SessionRegistry::new();

    let (state_tx, state_rx) = watch::channel(SessionState::Connecting);
    let (tx, _rx) = mpsc::channel(8);
    registry.register("abc", state_rx, tx).await.unwrap();

    state_tx.send_replace(SessionState::Streaming);
    let snapshot = registry.snapshot("abc").await.unwrap();
    assert_eq!(snapshot.state, SessionState::Streaming);

    assert!(registry.snapshot("ghost").await.is_none());
}

#[tokio::test]
async fn test_send_to_delivers_or_reports_absence() {
    let registry = SessionRegistry::new();

    let (state_rx, tx, mut rx) = handle_parts();
    registry.register("abc", state_rx, tx).await.unwrap();

    assert!(
        registry
            .send_to("abc", ClientMessage::Status("ping".to_string()))
            .await
    );
    assert!(matches!(rx.recv().await, Some(ClientMessage::Status(_))));

    assert!(
        !registry
            .send_to("ghost", ClientMessage::Status("ping".to_string()))
            .await
    );
}
