use serde::Serialize;

/// One extracurricular activity. The activity name is the directory key and
/// is not part of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    /// Signup order; emails are unique within one activity.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(description: &str, schedule: &str, max_participants: usize) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    pub fn spots_left(&self) -> usize {
        self.max_participants.saturating_sub(self.participants.len())
    }
}
