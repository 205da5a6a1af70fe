use patterns_lab::adapter::{CatalogAdapter, CatalogClient, CatalogService};
use patterns_lab::builder::BuildPlan;
use patterns_lab::command::{Command, Light, LightOffCommand, LightOnCommand, RemoteControl, UndoOutcome};
use patterns_lab::decorator::{BasicNotification, Notification, Urgent, WithIcon};
use patterns_lab::factory::{Button, Theme, Toggle};
use patterns_lab::memento::{History, TextEditor};
use patterns_lab::proxy::{ContentAccess, ContentProxy};
use patterns_lab::state::NetworkConnection;

fn main() {
    println!("=== Patterns Lab ===\n");

    command_demo();
    memento_demo();
    state_demo();
    factory_demo();
    builder_demo();
    adapter_demo();
    decorator_demo();
    proxy_demo();
}

fn on_off(on: bool) -> &'static str {
    if on { "on" } else { "off" }
}

fn command_demo() {
    println!("--- Command: smart-home remote ---");

    let mut light = Light::new("living room");
    let mut remote = RemoteControl::new();

    let steps: Vec<Box<dyn Command>> = vec![
        Box::new(LightOnCommand::new()),
        Box::new(LightOffCommand::new()),
    ];

    for command in steps {
        let label = command.label();
        if let Err(err) = remote.set_command(command, &mut light) {
            eprintln!("ERROR: {err}");
            return;
        }
        println!("{label} -> light is {}", on_off(light.is_on()));
    }

    while let Ok(UndoOutcome::Undone(label)) = remote.press_undo(&mut light) {
        println!("undo '{label}' -> light is {}", on_off(light.is_on()));
    }
    println!("nothing left to undo\n");
}

fn memento_demo() {
    println!("--- Memento: text editor ---");

    let mut editor = TextEditor::new();
    let mut history = History::new();

    editor.append("First Line\n");
    history.backup(&editor);

    editor.append("Second Line\n");
    history.backup(&editor);

    editor.append("Third Line\n");

    println!("current content:\n{}", editor.content());
    history.undo(&mut editor);
    println!("after undo:\n{}", editor.content());
}

fn state_demo() {
    println!("--- State: network connection ---");

    let mut connection = NetworkConnection::new();
    for transition in connection.connect() {
        println!("{:?} -> {:?}", transition.from, transition.to);
    }
    for transition in connection.disconnect() {
        println!("{:?} -> {:?}", transition.from, transition.to);
    }
    println!();
}

fn factory_demo() {
    println!("--- Abstract Factory: themed widgets ---");

    for theme in [Theme::Light, Theme::Dark] {
        let factory = theme.factory();
        println!("{}", factory.create_button().render());
        println!("{}", factory.create_toggle().render());
    }
    println!();
}

fn builder_demo() {
    println!("--- Builder: computer configurator ---");

    for plan in [BuildPlan::Gaming, BuildPlan::Office] {
        println!("{plan:?}: {}", plan.construct().summary());
    }
    println!();
}

fn adapter_demo() {
    println!("--- Adapter: product catalog ---");

    let payload = r#"[{"name":"Apple"},{"name":"Banana"}]"#;
    let service = match CatalogService::from_json(payload) {
        Ok(service) => service,
        Err(err) => {
            eprintln!("ERROR: {err}");
            return;
        }
    };

    let client = CatalogClient::new(Box::new(CatalogAdapter::new(service)));
    println!("{}\n", client.listing());
}

fn decorator_demo() {
    println!("--- Decorator: notification dressing ---");

    let basic = BasicNotification::new("Basic Notification");
    println!("{}", basic.render());

    let urgent = Urgent::new(Box::new(basic));
    println!("{}", urgent.render());

    let with_icon = WithIcon::new(Box::new(urgent), '🔔');
    println!("{}\n", with_icon.render());
}

fn proxy_demo() {
    println!("--- Proxy: secured content ---");

    let mut proxy = ContentProxy::new();
    match proxy.access() {
        Ok(body) => println!("{body}"),
        Err(err) => println!("{err}"),
    }

    proxy.sign_in("alice");
    match proxy.access() {
        Ok(body) => println!("{body}"),
        Err(err) => println!("{err}"),
    }
}
