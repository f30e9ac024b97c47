//! Task and delegation envelope types.

use serde::{Deserialize, Serialize};

/// A unit of work submitted for delegation.
///
/// The capability selector is carried as a raw string: tasks arrive over the
/// wire, and an unrecognized tag has to surface as a structured "no agents"
/// outcome rather than a deserialization error. Everything besides the
/// selector is opaque to the supervisor; only the chosen agent interprets
/// `action` and `data`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Task {
    /// Required capability tag (snake_case)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capability: Option<String>,

    /// Agent-specific operation to perform
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    /// Parameters for the chosen action, agent-specific
    #[serde(default)]
    pub data: serde_json::Value,
}

impl Task {
    pub fn new(capability: impl Into<String>) -> Self {
        Self {
            capability: Some(capability.into()),
            action: None,
            data: serde_json::Value::Null,
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }
}

/// The structured success/failure wrapper returned by task delegation.
///
/// Delegation never surfaces agent failures as errors to its caller: a
/// missing agent or a failed execution both come back as an envelope with
/// `success: false`. Only malformed tasks (no capability selector at all)
/// are rejected before an envelope exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelegationOutcome {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DelegationOutcome {
    /// Successful execution by the named agent.
    pub fn completed(
        agent_id: impl Into<String>,
        agent_name: impl Into<String>,
        result: serde_json::Value,
    ) -> Self {
        Self {
            success: true,
            agent_id: Some(agent_id.into()),
            agent_name: Some(agent_name.into()),
            result: Some(result),
            error: None,
        }
    }

    /// No registered agent offers the requested capability.
    pub fn no_agents(capability: &str) -> Self {
        Self {
            success: false,
            agent_id: None,
            agent_name: None,
            result: None,
            error: Some(format!(
                "No agents available for capability: {capability}"
            )),
        }
    }

    /// The chosen agent's execution failed.
    pub fn failed(agent_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            agent_id: Some(agent_id.into()),
            agent_name: None,
            result: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_builder() {
        let task = Task::new("financial_reporting")
            .with_action("generate_report")
            .with_data(json!({"report_type": "quarterly"}));

        assert_eq!(task.capability.as_deref(), Some("financial_reporting"));
        assert_eq!(task.action.as_deref(), Some("generate_report"));
        assert_eq!(task.data["report_type"], "quarterly");
    }

    #[test]
    fn test_task_deserializes_bare_object() {
        let task: Task = serde_json::from_str("{}").unwrap();
        assert!(task.capability.is_none());
        assert!(task.action.is_none());
        assert!(task.data.is_null());
    }

    #[test]
    fn test_completed_envelope_shape() {
        let outcome = DelegationOutcome::completed("id-1", "CFO Manager", json!({"ok": true}));
        let value = serde_json::to_value(&outcome).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["agent_id"], "id-1");
        assert_eq!(value["agent_name"], "CFO Manager");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_no_agents_envelope_names_the_selector() {
        let outcome = DelegationOutcome::no_agents("nonexistent_capability_xyz");
        assert!(!outcome.success);
        assert!(outcome
            .error
            .as_deref()
            .unwrap()
            .contains("nonexistent_capability_xyz"));
        assert!(outcome.agent_id.is_none());
    }

    #[test]
    fn test_failed_envelope_keeps_agent_id() {
        let outcome = DelegationOutcome::failed("id-2", "boom");
        assert!(!outcome.success);
        assert_eq!(outcome.agent_id.as_deref(), Some("id-2"));
        assert_eq!(outcome.error.as_deref(), Some("boom"));
        assert!(outcome.result.is_none());
    }
}
