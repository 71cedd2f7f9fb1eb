//! Ordered bridge invocations and their execution.

use crate::bridge::{Bridge, Invocation, InvocationOutcome};
use crate::error::Result;

/// One step of a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// The bridge call.
    pub invocation: Invocation,

    /// Whether a non-zero exit is expected and never counts as a failure.
    pub tolerate_failure: bool,
}

/// Bridge invocations to issue, in order, for one device operation.
///
/// Every step runs regardless of how earlier steps ended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    steps: Vec<Step>,
}

impl Plan {
    /// Create an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plan consisting of a single invocation.
    pub fn single(invocation: Invocation) -> Self {
        Self::new().then(invocation)
    }

    /// Append a step whose failure is reported.
    pub fn then(mut self, invocation: Invocation) -> Self {
        self.steps.push(Step {
            invocation,
            tolerate_failure: false,
        });
        self
    }

    /// Append a step whose failure is expected and ignored.
    pub fn then_tolerating_failure(mut self, invocation: Invocation) -> Self {
        self.steps.push(Step {
            invocation,
            tolerate_failure: true,
        });
        self
    }

    /// Steps in execution order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Render the plan as a shell script, one command line per step.
    pub fn script(&self) -> String {
        self.steps
            .iter()
            .map(|step| step.invocation.command_line())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Run every step through `bridge`.
    ///
    /// Stops early only if the bridge itself cannot be started.
    pub fn execute(&self, bridge: &mut dyn Bridge) -> Result<PlanReport> {
        let mut report = PlanReport::default();

        for step in &self.steps {
            let outcome = bridge.invoke(&step.invocation)?;
            // Untolerated failures reach the user through the UI; the log
            // only records them.
            if !outcome.success {
                tracing::debug!(
                    "Exited with code {:?} ({}): {}",
                    outcome.exit_code,
                    if step.tolerate_failure { "ignored" } else { "reported" },
                    step.invocation
                );
            }
            report.steps.push(StepReport {
                command: step.invocation.command_line(),
                outcome,
                tolerated: step.tolerate_failure,
            });
        }

        Ok(report)
    }
}

/// How a single step ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// Rendered command line.
    pub command: String,

    /// Process outcome.
    pub outcome: InvocationOutcome,

    /// Whether a failure of this step is ignored.
    pub tolerated: bool,
}

/// How every step of a plan ended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanReport {
    /// One entry per executed step, in order.
    pub steps: Vec<StepReport>,
}

impl PlanReport {
    /// The last step that failed and whose failure is not tolerated.
    pub fn failure(&self) -> Option<&StepReport> {
        self.steps
            .iter()
            .rev()
            .find(|step| !step.outcome.success && !step.tolerated)
    }
}
