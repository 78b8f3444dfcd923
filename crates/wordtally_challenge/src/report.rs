use std::any::Any;
use std::panic::catch_unwind;

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::checks::{contract_checks, ContractCheck};
use crate::registry::{incorrect_implementations, Factory};

/// Which checks an implementation failed. An empty list means the
/// checklist let it through.
#[derive(Debug, Clone, Serialize)]
pub struct ImplementationReport {
    pub name: String,
    pub failed_checks: Vec<String>,
}

impl ImplementationReport {
    pub fn is_caught(&self) -> bool {
        !self.failed_checks.is_empty()
    }
}

/// Runs the whole checklist against one factory.
pub fn evaluate(name: &str, factory: Factory) -> ImplementationReport {
    let checks = contract_checks();
    let total = checks.len();
    let mut failed_checks = Vec::new();
    for check in checks {
        if let Err(err) = run_shielded(&check, factory) {
            log::debug!("{name}: check {} failed: {err:#}", check.name);
            failed_checks.push(check.name.to_string());
        }
    }
    log::info!("{name}: {} of {total} checks failed", failed_checks.len());
    ImplementationReport {
        name: name.to_string(),
        failed_checks,
    }
}

/// Runs the checklist against every registered implementation.
pub fn evaluate_registry() -> Vec<ImplementationReport> {
    incorrect_implementations()
        .into_iter()
        .map(|implementation| evaluate(implementation.name, implementation.factory))
        .collect()
}

/// Pretty-printed JSON summary of a set of reports.
pub fn reports_to_json(reports: &[ImplementationReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

/// A panicking implementation fails the check instead of tearing down the
/// evaluation.
fn run_shielded(check: &ContractCheck, factory: Factory) -> Result<()> {
    let run = check.run;
    match catch_unwind(move || run(factory)) {
        Ok(result) => result,
        Err(payload) => Err(anyhow!(
            "implementation panicked: {}",
            panic_message(payload.as_ref())
        )),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
