use colored::Colorize;
use itertools::Itertools;
use serde::Serialize;
use std::fmt::{Debug, Display};

use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per resource listing its set fields.
    Text,
    Json,
    Debug,
}

impl OutputFormat {
    pub fn render<T>(&self, items: &[T]) -> Result<String>
    where
        T: Display + Debug + Serialize,
    {
        Ok(match self {
            OutputFormat::Text => items.iter().join("\n"),
            OutputFormat::Json => serde_json::to_string_pretty(items)?,
            OutputFormat::Debug => format!("{:#?}", items),
        })
    }
}

/// What the service answered to a request sent with the dry-run flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "Outcome", content = "Message")]
pub enum DryRunOutcome {
    /// `DryRunOperation`: the caller holds the permissions for the action.
    Permitted,
    /// `UnauthorizedOperation`, with the service's message.
    Denied(String),
    /// The call went through, the dry-run flag was not honored.
    Executed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DryRunReport {
    pub action: &'static str,
    #[serde(flatten)]
    pub outcome: DryRunOutcome,
}

impl Display for DryRunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.outcome {
            DryRunOutcome::Permitted => {
                write!(f, "{}: {}", self.action, "permitted".green())
            }
            DryRunOutcome::Denied(msg) => {
                write!(f, "{}: {} ({})", self.action, "denied".red(), msg)
            }
            DryRunOutcome::Executed => write!(
                f,
                "{}: {}",
                self.action,
                "executed, dry-run flag was ignored".yellow()
            ),
        }
    }
}
