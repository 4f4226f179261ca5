//! Operating-system information bindings.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dispatcher::{request, Dispatcher};
use crate::Result;

/// CPU architecture the application was compiled for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    X86,
    #[serde(rename = "x86_64")]
    X86_64,
    Arm,
    Aarch64,
    Mips,
    Mips64,
    Powerpc,
    Powerpc64,
    Riscv64,
    S390x,
    Sparc64,
}

/// Operating-system platform, set at compile time on the host side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    Macos,
    Ios,
    Freebsd,
    Dragonfly,
    Netbsd,
    Openbsd,
    Solaris,
    Android,
    Windows,
}

/// Coarse operating-system kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OsKind {
    Linux,
    Macos,
    Windows,
    Ios,
    Android,
}

/// Operating-system family.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Unix,
    Windows,
}

/// Client for the host's OS information commands.
pub struct Os {
    dispatcher: Arc<dyn Dispatcher>,
}

impl Os {
    /// Create a client over the given dispatcher
    pub fn new(dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// CPU architecture the application was compiled for
    pub async fn arch(&self) -> Result<Arch> {
        request(&*self.dispatcher, "plugin:os|arch", &Value::Null).await
    }

    /// Operating-system platform
    pub async fn platform(&self) -> Result<Platform> {
        request(&*self.dispatcher, "plugin:os|platform", &Value::Null).await
    }

    /// Operating-system family
    pub async fn family(&self) -> Result<Family> {
        request(&*self.dispatcher, "plugin:os|family", &Value::Null).await
    }

    /// Coarse operating-system kind
    pub async fn kind(&self) -> Result<OsKind> {
        request(&*self.dispatcher, "plugin:os|os_type", &Value::Null).await
    }

    /// Kernel version string
    pub async fn version(&self) -> Result<String> {
        request(&*self.dispatcher, "plugin:os|version", &Value::Null).await
    }

    /// System locale
    pub async fn locale(&self) -> Result<Option<String>> {
        request(&*self.dispatcher, "plugin:os|locale", &Value::Null).await
    }

    /// Executable file extension ("exe" on Windows, empty elsewhere)
    pub async fn exe_extension(&self) -> Result<String> {
        request(&*self.dispatcher, "plugin:os|exe_extension", &Value::Null).await
    }

    /// System hostname
    pub async fn hostname(&self) -> Result<String> {
        request(&*self.dispatcher, "plugin:os|hostname", &Value::Null).await
    }
}
