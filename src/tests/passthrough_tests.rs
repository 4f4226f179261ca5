//! Pass-through bindings: each call must forward the documented command name
//! and argument shape unchanged.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::json;

use crate::app::App;
use crate::callback::LocalHandlerRegistry;
use crate::dialog::{FileDialogBuilder, MessageDialogBuilder, MessageDialogKind};
use crate::os::{Os, Platform};
use crate::positioner::{Position, Positioner};
use crate::process::Process;
use crate::tests::support::FakeDispatcher;
use crate::window::{LogicalSize, PhysicalPosition, PhysicalSize, Size, Window};

#[tokio::test]
async fn test_app_metadata_queries() {
    let dispatcher = Arc::new(FakeDispatcher::new());
    dispatcher.respond_with("plugin:app|version", json!("1.2.3"));
    dispatcher.respond_with("plugin:app|name", json!("demo"));
    dispatcher.respond_with("plugin:app|tauri_version", json!("2.0.0"));

    let app = App::new(dispatcher.clone());
    assert_eq!(app.version().await.unwrap(), "1.2.3");
    assert_eq!(app.name().await.unwrap(), "demo");
    assert_eq!(app.tauri_version().await.unwrap(), "2.0.0");
}

#[tokio::test]
async fn test_app_visibility_commands() {
    let dispatcher = Arc::new(FakeDispatcher::new());
    let app = App::new(dispatcher.clone());

    app.show().await.unwrap();
    app.hide().await.unwrap();

    let commands: Vec<String> = dispatcher.calls().into_iter().map(|(name, _)| name).collect();
    assert_eq!(commands, vec!["plugin:app|show", "plugin:app|hide"]);
}

#[tokio::test]
async fn test_process_exit_carries_code() {
    let dispatcher = Arc::new(FakeDispatcher::new());
    let process = Process::new(dispatcher.clone());

    process.exit(3).await.unwrap();
    assert_eq!(
        dispatcher.calls_for("plugin:process|exit"),
        vec![json!({ "code": 3 })]
    );

    process.relaunch().await.unwrap();
    assert_eq!(dispatcher.calls_for("plugin:process|restart").len(), 1);
}

#[tokio::test]
async fn test_positioner_encodes_position_as_integer() {
    let dispatcher = Arc::new(FakeDispatcher::new());
    let positioner = Positioner::new(dispatcher.clone());

    positioner.move_window(Position::TrayCenter).await.unwrap();
    assert_eq!(
        dispatcher.calls_for("plugin:positioner|move_window"),
        vec![json!({ "position": 13 })]
    );
}

#[tokio::test]
async fn test_os_queries_decode_typed_values() {
    let dispatcher = Arc::new(FakeDispatcher::new());
    dispatcher.respond_with("plugin:os|platform", json!("linux"));
    dispatcher.respond_with("plugin:os|hostname", json!("workstation"));
    dispatcher.respond_with("plugin:os|locale", json!(null));

    let os = Os::new(dispatcher.clone());
    assert_eq!(os.platform().await.unwrap(), Platform::Linux);
    assert_eq!(os.hostname().await.unwrap(), "workstation");
    assert_eq!(os.locale().await.unwrap(), None);
}

#[tokio::test]
async fn test_os_query_failure_surfaces_diagnostic() {
    let dispatcher = Arc::new(FakeDispatcher::new());
    dispatcher.fail_with("plugin:os|arch", "os scope not allowed");

    let os = Os::new(dispatcher);
    let err = os.arch().await.unwrap_err();
    assert!(err.to_string().contains("os scope not allowed"));
}

#[tokio::test]
async fn test_message_dialog_forwards_labels_and_kind() {
    let dispatcher = Arc::new(FakeDispatcher::new());
    dispatcher.respond_with("plugin:dialog|ask", json!(true));

    let mut builder = MessageDialogBuilder::new();
    builder
        .set_title("Replace file?")
        .set_kind(MessageDialogKind::Warning)
        .set_ok_label("Replace")
        .set_cancel_label("Keep both");

    assert!(builder.ask(&*dispatcher, "A file with that name exists").await.unwrap());
    assert_eq!(
        dispatcher.calls_for("plugin:dialog|ask"),
        vec![json!({
            "message": "A file with that name exists",
            "title": "Replace file?",
            "kind": "warning",
            "okButtonLabel": "Replace",
            "cancelButtonLabel": "Keep both",
        })]
    );
}

#[tokio::test]
async fn test_file_dialog_pick_file_round_trip() {
    let dispatcher = Arc::new(FakeDispatcher::new());
    dispatcher.respond_with("plugin:dialog|open", json!("/home/user/notes.txt"));

    let mut builder = FileDialogBuilder::new(dispatcher.clone());
    builder
        .set_title("Open notes")
        .set_default_path(Path::new("/home/user"))
        .add_filter("Text", &["txt", "md"]);

    let picked = builder.pick_file().await.unwrap();
    assert_eq!(picked, Some(PathBuf::from("/home/user/notes.txt")));

    let args = &dispatcher.calls_for("plugin:dialog|open")[0];
    assert_eq!(args["defaultPath"], json!("/home/user"));
    assert_eq!(args["multiple"], json!(false));
    assert_eq!(args["directory"], json!(false));
    assert_eq!(
        args["filters"],
        json!([{ "name": "Text", "extensions": ["txt", "md"] }])
    );
}

#[tokio::test]
async fn test_file_dialog_cancelled_save_is_none() {
    let dispatcher = Arc::new(FakeDispatcher::new());

    let builder = FileDialogBuilder::new(dispatcher.clone());
    assert_eq!(builder.save().await.unwrap(), None);
    assert_eq!(dispatcher.calls_for("plugin:dialog|save").len(), 1);
}

#[tokio::test]
async fn test_window_queries_carry_the_label() {
    let dispatcher = Arc::new(FakeDispatcher::new());
    dispatcher.respond_with(
        "plugin:window|inner_size",
        json!({ "width": 800, "height": 600 }),
    );

    let window = window_for(&dispatcher, "main");
    let size = window.inner_size().await.unwrap();
    assert_eq!(size, PhysicalSize { width: 800, height: 600 });
    assert_eq!(
        dispatcher.calls_for("plugin:window|inner_size"),
        vec![json!({ "label": "main" })]
    );
}

#[tokio::test]
async fn test_window_setters_wrap_the_value() {
    let dispatcher = Arc::new(FakeDispatcher::new());
    let window = window_for(&dispatcher, "settings");

    window.set_title("Preferences").await.unwrap();
    assert_eq!(
        dispatcher.calls_for("plugin:window|set_title"),
        vec![json!({ "label": "settings", "value": "Preferences" })]
    );

    window
        .set_position(PhysicalPosition { x: 120, y: 80 })
        .await
        .unwrap();
    assert_eq!(
        dispatcher.calls_for("plugin:window|set_position"),
        vec![json!({
            "label": "settings",
            "value": { "Physical": { "x": 120, "y": 80 } },
        })]
    );

    window
        .set_min_size(Some(Size::Logical(LogicalSize { width: 320.0, height: 240.0 })))
        .await
        .unwrap();
    assert_eq!(
        dispatcher.calls_for("plugin:window|set_min_size"),
        vec![json!({
            "label": "settings",
            "value": { "Logical": { "width": 320.0, "height": 240.0 } },
        })]
    );
}

#[tokio::test]
async fn test_window_events_are_scoped_to_the_window() {
    let dispatcher = Arc::new(FakeDispatcher::new());
    dispatcher.respond_with("plugin:event|listen", json!(21));

    let window = window_for(&dispatcher, "main");
    let subscription = window.listen("resized", |_| {}).await.unwrap();
    assert_eq!(subscription.id(), 21);
    assert_eq!(
        dispatcher.calls_for("plugin:event|listen")[0]["target"],
        json!({ "kind": "WebviewWindow", "label": "main" })
    );

    window.emit("refresh", json!(null)).await.unwrap();
    assert_eq!(
        dispatcher.calls_for("plugin:event|emit")[0]["target"],
        json!({ "kind": "WebviewWindow", "label": "main" })
    );
}

fn window_for(dispatcher: &Arc<FakeDispatcher>, label: &str) -> Window {
    Window::new(
        label,
        dispatcher.clone(),
        Arc::new(LocalHandlerRegistry::new()),
    )
}
