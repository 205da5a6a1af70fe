//! End-to-end scenarios driving each demonstration through the public API

use patterns_lab::adapter::{CatalogAdapter, CatalogClient, CatalogService};
use patterns_lab::builder::{BuildPlan, Computer};
use patterns_lab::command::{
    Command, Light, LightOffCommand, LightOnCommand, RemoteControl, UndoOutcome,
};
use patterns_lab::decorator::{BasicNotification, Notification, Urgent, WithIcon};
use patterns_lab::factory::{Button, Theme, Toggle};
use patterns_lab::memento::{History, TextEditor};
use patterns_lab::proxy::{AccessError, ContentAccess, ContentProxy};
use patterns_lab::state::{ConnectionState, NetworkConnection};
use rand::Rng;

/// The canonical remote-control walkthrough: on, off, undo both
#[test]
fn test_remote_walkthrough() {
    let mut light = Light::new("living room");
    let mut remote = RemoteControl::new();
    assert!(!light.is_on());

    remote
        .set_command(Box::new(LightOnCommand::new()), &mut light)
        .unwrap();
    assert!(light.is_on());

    remote
        .set_command(Box::new(LightOffCommand::new()), &mut light)
        .unwrap();
    assert!(!light.is_on());

    // First undo inverts the off command
    let outcome = remote.press_undo(&mut light).unwrap();
    assert_eq!(outcome, UndoOutcome::Undone("Turn light off".to_string()));
    assert!(light.is_on());

    // Second undo inverts the on command
    let outcome = remote.press_undo(&mut light).unwrap();
    assert_eq!(outcome, UndoOutcome::Undone("Turn light on".to_string()));
    assert!(!light.is_on());

    // Both history entries consumed
    assert_eq!(remote.history_len(), 0);
}

#[test]
fn test_fresh_remote_has_nothing_to_undo() {
    let mut light = Light::new("living room");
    let mut remote = RemoteControl::new();

    let outcome = remote.press_undo(&mut light).unwrap();
    assert_eq!(outcome, UndoOutcome::NothingToUndo);
    assert!(!light.is_on());
}

/// Any sequence of N commands followed by N undos restores the initial state
#[test]
fn test_random_command_sequences_round_trip() {
    let mut rng = rand::thread_rng();

    for _ in 0..50 {
        let mut light = Light::new("bedroom");
        let mut remote = RemoteControl::new();
        let steps = rng.gen_range(1..=20);

        for _ in 0..steps {
            let command: Box<dyn Command> = if rng.gen_bool(0.5) {
                Box::new(LightOnCommand::new())
            } else {
                Box::new(LightOffCommand::new())
            };
            remote.set_command(command, &mut light).unwrap();
        }

        for _ in 0..steps {
            let outcome = remote.press_undo(&mut light).unwrap();
            assert!(matches!(outcome, UndoOutcome::Undone(_)));
        }

        assert!(!light.is_on());
        assert_eq!(
            remote.press_undo(&mut light).unwrap(),
            UndoOutcome::NothingToUndo
        );
    }
}

#[test]
fn test_editor_walkthrough() {
    let mut editor = TextEditor::new();
    let mut history = History::new();

    editor.append("First Line\n");
    history.backup(&editor);

    editor.append("Second Line\n");
    history.backup(&editor);

    editor.append("Third Line\n");
    assert_eq!(editor.content(), "First Line\nSecond Line\nThird Line\n");

    assert!(history.undo(&mut editor));
    assert_eq!(editor.content(), "First Line\nSecond Line\n");
}

#[test]
fn test_connection_walkthrough() {
    let mut connection = NetworkConnection::new();
    assert_eq!(connection.state(), ConnectionState::Disconnected);

    let up = connection.connect();
    assert_eq!(up.len(), 2);
    assert_eq!(up[0].to, ConnectionState::Connecting);
    assert_eq!(up[1].to, ConnectionState::Connected);
    assert_eq!(connection.state(), ConnectionState::Connected);

    let down = connection.disconnect();
    assert_eq!(down.len(), 1);
    assert_eq!(connection.state(), ConnectionState::Disconnected);
}

#[test]
fn test_theme_families_stay_consistent() {
    let light = Theme::Light.factory();
    assert_eq!(light.create_button().render(), "light-themed button");
    assert_eq!(light.create_toggle().render(), "light-themed toggle");

    let dark = Theme::Dark.factory();
    assert_eq!(dark.create_button().render(), "dark-themed button");
    assert_eq!(dark.create_toggle().render(), "dark-themed toggle");
}

#[test]
fn test_build_plans_produce_shippable_configs() {
    let gaming = BuildPlan::Gaming.construct();
    assert_eq!(gaming.summary(), "Computer with 1TB HDD and 16GB RAM");

    let json = serde_json::to_string(&gaming).unwrap();
    let decoded: Computer = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, gaming);

    let office = BuildPlan::Office.construct();
    assert_eq!(office.summary(), "Computer with 500GB HDD and 8GB RAM");
}

#[test]
fn test_catalog_reaches_legacy_client_through_adapter() {
    let payload = r#"[{"name":"Apple"},{"name":"Banana"}]"#;
    let service = CatalogService::from_json(payload).unwrap();
    let client = CatalogClient::new(Box::new(CatalogAdapter::new(service)));

    assert_eq!(client.listing(), "Available products: Apple, Banana");
}

#[test]
fn test_notification_dressing() {
    let notification = WithIcon::new(
        Box::new(Urgent::new(Box::new(BasicNotification::new(
            "Basic Notification",
        )))),
        '🔔',
    );

    assert_eq!(notification.render(), "Urgent: Basic Notification [🔔]");
}

#[test]
fn test_proxy_auth_flow() {
    let mut proxy = ContentProxy::new();

    assert_eq!(proxy.access(), Err(AccessError::NotAuthenticated));
    assert!(!proxy.instantiated());

    proxy.sign_in("alice");
    assert_eq!(proxy.access(), Ok("secured content granted".to_string()));
    assert!(proxy.instantiated());
}
