//! Sender type tags
//!
//! Identifies the backend kind behind a sender for diagnostics. Carries no
//! behavior; dispatch always goes through the [`Sender`](super::Sender) trait.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SenderType {
    #[default]
    Custom,
    Systemd,
    Native,
    JsonConsole,
    JsonFile,
    Syslog,
    Internal,
    File,
    Slack,
    Xmpp,
    Bootstrap,
}

impl SenderType {
    pub const ALL: [SenderType; 11] = [
        SenderType::Custom,
        SenderType::Systemd,
        SenderType::Native,
        SenderType::JsonConsole,
        SenderType::JsonFile,
        SenderType::Syslog,
        SenderType::Internal,
        SenderType::File,
        SenderType::Slack,
        SenderType::Xmpp,
        SenderType::Bootstrap,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            SenderType::Custom => "custom",
            SenderType::Systemd => "systemd",
            SenderType::Native => "native",
            SenderType::JsonConsole => "json-console",
            SenderType::JsonFile => "json-file",
            SenderType::Syslog => "syslog",
            SenderType::Internal => "internal",
            SenderType::File => "file",
            SenderType::Slack => "slack",
            SenderType::Xmpp => "xmpp",
            SenderType::Bootstrap => "bootstrap",
        }
    }
}

impl fmt::Display for SenderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for SenderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        SenderType::ALL
            .iter()
            .copied()
            .find(|t| t.to_str() == wanted)
            .ok_or_else(|| format!("Invalid sender type: '{}'", s))
    }
}
