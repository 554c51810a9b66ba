//! Status change with confirmation and revert-on-cancel.

/// Confirmed status of one outbound record's selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSelection {
    pub record_id: String,
    /// Last value the user confirmed (or the page was rendered with)
    pub confirmed: Option<String>,
}

/// What to do with the selector after the user answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusDecision {
    Submit { record_id: String, status: String },
    Revert { to: String },
}

impl StatusSelection {
    pub fn new(record_id: impl Into<String>, confirmed: Option<String>) -> Self {
        Self {
            record_id: record_id.into(),
            confirmed: confirmed.filter(|s| !s.is_empty()),
        }
    }

    /// Apply the user's answer for `picked`.
    ///
    /// Declining keeps the state and reverts to the confirmed value, or to
    /// `picked` itself when nothing was ever confirmed.
    pub fn decide(&self, picked: &str, accepted: bool) -> (StatusSelection, StatusDecision) {
        if accepted {
            let next = StatusSelection {
                record_id: self.record_id.clone(),
                confirmed: Some(picked.to_string()),
            };
            let decision = StatusDecision::Submit {
                record_id: self.record_id.clone(),
                status: picked.to_string(),
            };
            (next, decision)
        } else {
            let to = self.confirmed.clone().unwrap_or_else(|| picked.to_string());
            (self.clone(), StatusDecision::Revert { to })
        }
    }
}
