/// Which reference list of a day record an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefList {
    /// `jira`: issues worked on today
    Today,
    /// `next_jira`: issues planned for the next working day
    Next,
}

impl RefList {
    pub fn from_flag(for_next: bool) -> Self {
        if for_next { RefList::Next } else { RefList::Today }
    }

    /// Field name in the data document
    pub fn key(&self) -> &'static str {
        match self {
            RefList::Today => "jira",
            RefList::Next => "next_jira",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RefList::Today => "today's Jira",
            RefList::Next => "next Jira",
        }
    }
}
