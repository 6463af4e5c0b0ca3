//! Liveness report value object.

use super::{ActionName, AgentId, AgentIdentity, Capabilities, ReportDetail, ReportId};
use chrono::{DateTime, SecondsFormat, Utc};
use mockable::Clock;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// A single liveness report, built per call and discarded after sending.
///
/// The agent identifier is copied from an [`AgentIdentity`], so a payload
/// always names the agent that built it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPayload {
    report_id: ReportId,
    agent_id: AgentId,
    method: ActionName,
    timestamp: DateTime<Utc>,
    tools: BTreeSet<String>,
    channels: BTreeSet<String>,
}

impl ReportPayload {
    /// Builds a report for `method` from the agent's identity and a
    /// capability snapshot.
    #[must_use]
    pub fn new(
        identity: &AgentIdentity,
        capabilities: &Capabilities,
        method: ActionName,
        clock: &impl Clock,
    ) -> Self {
        Self {
            report_id: ReportId::new(),
            agent_id: identity.agent_id().clone(),
            method,
            timestamp: clock.utc(),
            tools: capabilities.tools().clone(),
            channels: capabilities.channels().clone(),
        }
    }

    /// Returns the report identifier.
    #[must_use]
    pub const fn report_id(&self) -> ReportId {
        self.report_id
    }

    /// Returns the reporting agent's identifier.
    #[must_use]
    pub const fn agent_id(&self) -> &AgentId {
        &self.agent_id
    }

    /// Returns the reported action name.
    #[must_use]
    pub const fn method(&self) -> &ActionName {
        &self.method
    }

    /// Returns when the report was built.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the tools declared when the report was built.
    #[must_use]
    pub const fn tools(&self) -> &BTreeSet<String> {
        &self.tools
    }

    /// Returns the channels declared when the report was built.
    #[must_use]
    pub const fn channels(&self) -> &BTreeSet<String> {
        &self.channels
    }

    /// Renders the JSON request body for the given detail level.
    ///
    /// [`ReportDetail::Minimal`] yields exactly
    /// `{"agent_id": ..., "method": ...}`.
    #[must_use]
    pub fn to_wire(&self, detail: ReportDetail) -> Value {
        let mut body = Map::new();
        body.insert(
            "agent_id".to_owned(),
            Value::String(self.agent_id.as_str().to_owned()),
        );
        body.insert(
            "method".to_owned(),
            Value::String(self.method.as_str().to_owned()),
        );

        if detail.includes_capabilities() {
            body.insert("tools".to_owned(), string_array(&self.tools));
            body.insert("channels".to_owned(), string_array(&self.channels));
        }

        if detail.includes_metadata() {
            body.insert(
                "timestamp".to_owned(),
                Value::String(self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)),
            );
            body.insert(
                "report_id".to_owned(),
                Value::String(self.report_id.to_string()),
            );
        }

        Value::Object(body)
    }
}

fn string_array(values: &BTreeSet<String>) -> Value {
    Value::Array(values.iter().cloned().map(Value::String).collect())
}
