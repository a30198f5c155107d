//! Audit trace models.
//!
//! Every calculation rule records an [`AuditStep`] describing its input,
//! output and reasoning, so a salary figure can be explained line by line.

use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag data that was accepted but looks unusual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

/// The complete audit trace for a salary calculation.
///
/// # Example
///
/// ```
/// use hr_payroll::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 12,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

impl AuditTrace {
    /// Finds the step recorded by the given rule.
    pub fn step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|s| s.rule_id == rule_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_step(step_number: u32, rule_id: &str) -> AuditStep {
        AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: "Test Rule".to_string(),
            input: serde_json::json!({"a": 1}),
            output: serde_json::json!({"b": 2}),
            reasoning: "because".to_string(),
        }
    }

    #[test]
    fn test_step_lookup_by_rule_id() {
        let trace = AuditTrace {
            steps: vec![create_step(1, "first"), create_step(2, "second")],
            warnings: vec![],
            duration_us: 0,
        };
        assert_eq!(trace.step("second").unwrap().step_number, 2);
        assert!(trace.step("missing").is_none());
    }

    #[test]
    fn test_serialize_audit_step() {
        let json = serde_json::to_string(&create_step(3, "deduction")).unwrap();
        assert!(json.contains("\"step_number\":3"));
        assert!(json.contains("\"rule_id\":\"deduction\""));
        assert!(json.contains("\"input\":{\"a\":1}"));
    }
}
