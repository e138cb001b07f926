use crate::convert::to_result_set;
use crate::error::PolicyError;
use crate::source::Policy;
use tracing::debug;
use wfguard_types::{Document, ResultSet};

/// Evaluate a bound query with a document as `input`.
///
/// Implementations hold no state between calls besides what was prepared up
/// front, so evaluations are independent of each other.
pub trait Evaluate {
    fn query(&self) -> &str;

    fn evaluate(&self, document: &Document) -> Result<ResultSet, PolicyError>;
}

/// A policy parsed into a Rego engine with a query bound to it.
///
/// Immutable after [`PreparedQuery::prepare`]; each evaluation runs on a clone
/// of the prepared engine.
#[derive(Clone)]
pub struct PreparedQuery {
    engine: regorus::Engine,
    policy_name: String,
    query: String,
}

impl PreparedQuery {
    /// Parse the policy and bind `query`.
    ///
    /// Only policy parse errors fail here. A builtin that errors at evaluation
    /// time makes its expression undefined, so the rule does not fire.
    pub fn prepare(policy: &Policy, query: &str) -> Result<Self, PolicyError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(PolicyError::EmptyQuery);
        }

        let prepare_err = |message: String| PolicyError::Prepare {
            policy: policy.name.clone(),
            query: query.to_string(),
            message,
        };

        let mut engine = regorus::Engine::new();
        engine.set_strict_builtin_errors(false);
        engine
            .add_policy(policy.name.clone(), policy.text.clone())
            .map_err(|err| prepare_err(format!("{err:#}")))?;

        // Input-dependent failures belong to the document that triggers them.
        let mut dry_run = engine.clone();
        dry_run.set_input(regorus::Value::new_object());
        if let Err(err) = dry_run.eval_query(query.to_string(), false) {
            let error = format!("{err:#}");
            debug!(
                policy = %policy.name,
                query,
                error = %error,
                "dry run against empty input failed"
            );
        }

        debug!(policy = %policy.name, query, "prepared policy query");
        Ok(Self {
            engine,
            policy_name: policy.name.clone(),
            query: query.to_string(),
        })
    }

    pub fn policy_name(&self) -> &str {
        &self.policy_name
    }
}

impl Evaluate for PreparedQuery {
    fn query(&self) -> &str {
        &self.query
    }

    fn evaluate(&self, document: &Document) -> Result<ResultSet, PolicyError> {
        let eval_err = |message: String| PolicyError::Evaluate {
            query: self.query.clone(),
            message,
        };

        let input = regorus::Value::from_json_str(&document.to_input_json().to_string())
            .map_err(|err| eval_err(format!("bind input: {err:#}")))?;

        let mut engine = self.engine.clone();
        engine.set_input(input);
        let results = engine
            .eval_query(self.query.clone(), false)
            .map_err(|err| eval_err(format!("{err:#}")))?;

        let set = to_result_set(results);
        debug!(document = %document.path, entries = set.entries.len(), "evaluated document");
        Ok(set)
    }
}
