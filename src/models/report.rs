use serde::{Deserialize, Serialize};
use crate::errors::ReportsError;

/// Moderation state of a report on the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    /// Awaiting an administrator's decision.
    Pending,
    /// Report upheld.
    Valid,
    /// Report dismissed.
    Rejected,
}

impl ReportStatus {
    /// Only `Valid` and `Rejected` can be submitted as a processing decision.
    pub fn is_decision(&self) -> bool {
        matches!(self, ReportStatus::Valid | ReportStatus::Rejected)
    }
}

/// Body accepted by `POST {base}/process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRequest {
    pub report_id: i64,
    pub status: ReportStatus,
}

impl ProcessRequest {
    pub fn new(report_id: i64, status: ReportStatus) -> Result<Self, ReportsError> {
        if !status.is_decision() {
            return Err(ReportsError::Config(format!(
                "{:?} is not a processing decision, expected Valid or Rejected",
                status
            )));
        }
        Ok(Self { report_id, status })
    }
}
