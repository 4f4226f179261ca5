//! Native dialog bindings: message boxes and file pickers.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;

use crate::dispatcher::{request, request_unit, Dispatcher};
use crate::Result;

/// Severity of a message dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageDialogKind {
    #[default]
    Info,
    Warning,
    Error,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MessageArgs<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    kind: MessageDialogKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    ok_button_label: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cancel_button_label: Option<&'a str>,
}

/// Builder for message, ask and confirm dialogs.
#[derive(Default)]
pub struct MessageDialogBuilder {
    title: Option<String>,
    kind: MessageDialogKind,
    ok_label: Option<String>,
    cancel_label: Option<String>,
}

impl MessageDialogBuilder {
    /// Create a builder with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dialog title
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// Set the dialog severity
    pub fn set_kind(&mut self, kind: MessageDialogKind) -> &mut Self {
        self.kind = kind;
        self
    }

    /// Set the label of the confirming button
    pub fn set_ok_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.ok_label = Some(label.into());
        self
    }

    /// Set the label of the dismissing button
    pub fn set_cancel_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.cancel_label = Some(label.into());
        self
    }

    fn args<'a>(&'a self, message: &'a str) -> MessageArgs<'a> {
        MessageArgs {
            message,
            title: self.title.as_deref(),
            kind: self.kind,
            ok_button_label: self.ok_label.as_deref(),
            cancel_button_label: self.cancel_label.as_deref(),
        }
    }

    /// Show a message dialog with a single confirming button
    pub async fn message(&self, dispatcher: &dyn Dispatcher, message: &str) -> Result<()> {
        request_unit(dispatcher, "plugin:dialog|message", &self.args(message)).await
    }

    /// Show a yes/no question dialog
    pub async fn ask(&self, dispatcher: &dyn Dispatcher, message: &str) -> Result<bool> {
        request(dispatcher, "plugin:dialog|ask", &self.args(message)).await
    }

    /// Show an ok/cancel confirmation dialog
    pub async fn confirm(&self, dispatcher: &dyn Dispatcher, message: &str) -> Result<bool> {
        request(dispatcher, "plugin:dialog|confirm", &self.args(message)).await
    }
}

#[derive(Serialize)]
struct DialogFilter<'a> {
    name: &'a str,
    extensions: &'a [&'a str],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OpenArgs<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    default_path: Option<&'a std::path::Path>,
    filters: Vec<DialogFilter<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    multiple: bool,
    directory: bool,
    recursive: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveArgs<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    default_path: Option<&'a std::path::Path>,
    filters: Vec<DialogFilter<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
}

/// Builder for open and save file dialogs.
pub struct FileDialogBuilder<'a> {
    dispatcher: Arc<dyn Dispatcher>,
    default_path: Option<&'a std::path::Path>,
    filters: Vec<(&'a str, &'a [&'a str])>,
    title: Option<&'a str>,
    recursive: bool,
}

impl<'a> FileDialogBuilder<'a> {
    /// Create a builder over the given dispatcher
    pub fn new(dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self {
            dispatcher,
            default_path: None,
            filters: Vec::new(),
            title: None,
            recursive: false,
        }
    }

    /// Set the initial directory or file path
    pub fn set_default_path(&mut self, default_path: &'a std::path::Path) -> &mut Self {
        self.default_path = Some(default_path);
        self
    }

    /// Whether directory selection descends into subdirectories
    pub fn set_recursive(&mut self, recursive: bool) -> &mut Self {
        self.recursive = recursive;
        self
    }

    /// Set the dialog title
    pub fn set_title(&mut self, title: &'a str) -> &mut Self {
        self.title = Some(title);
        self
    }

    /// Add an extension filter, e.g. `("Image", &["png", "jpeg"])`
    pub fn add_filter(&mut self, name: &'a str, extensions: &'a [&'a str]) -> &mut Self {
        self.filters.push((name, extensions));
        self
    }

    fn open_args(&self, multiple: bool, directory: bool) -> OpenArgs<'a> {
        OpenArgs {
            default_path: self.default_path,
            filters: self
                .filters
                .iter()
                .map(|&(name, extensions)| DialogFilter { name, extensions })
                .collect(),
            title: self.title,
            multiple,
            directory,
            recursive: self.recursive,
        }
    }

    /// Pick a single file, `None` if the user cancelled
    pub async fn pick_file(&self) -> Result<Option<PathBuf>> {
        request(&*self.dispatcher, "plugin:dialog|open", &self.open_args(false, false)).await
    }

    /// Pick one or more files, `None` if the user cancelled
    pub async fn pick_files(&self) -> Result<Option<Vec<PathBuf>>> {
        request(&*self.dispatcher, "plugin:dialog|open", &self.open_args(true, false)).await
    }

    /// Pick a single directory, `None` if the user cancelled
    pub async fn pick_folder(&self) -> Result<Option<PathBuf>> {
        request(&*self.dispatcher, "plugin:dialog|open", &self.open_args(false, true)).await
    }

    /// Pick one or more directories, `None` if the user cancelled
    pub async fn pick_folders(&self) -> Result<Option<Vec<PathBuf>>> {
        request(&*self.dispatcher, "plugin:dialog|open", &self.open_args(true, true)).await
    }

    /// Pick a path to save to, `None` if the user cancelled
    pub async fn save(&self) -> Result<Option<PathBuf>> {
        request(
            &*self.dispatcher,
            "plugin:dialog|save",
            &SaveArgs {
                default_path: self.default_path,
                filters: self
                    .filters
                    .iter()
                    .map(|&(name, extensions)| DialogFilter { name, extensions })
                    .collect(),
                title: self.title,
            },
        )
        .await
    }
}
