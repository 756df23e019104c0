use crate::domain::model::Section;

/// Per-session navigation state. One value per session threaded through
/// render calls — never a process-wide singleton, so concurrent sessions
/// cannot interfere. The only transition is an explicit `select`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    current: Section,
}

impl Session {
    pub fn new() -> Self {
        Self {
            current: Section::Home,
        }
    }

    pub fn current(&self) -> Section {
        self.current
    }

    pub fn select(&mut self, section: Section) {
        if section != self.current {
            tracing::debug!(from = %self.current, to = %section, "Section selected");
        }
        self.current = section;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_at_home() {
        assert_eq!(Session::new().current(), Section::Home);
    }

    #[test]
    fn test_select_transitions_and_returns() {
        let mut session = Session::new();
        session.select(Section::Contact);
        assert_eq!(session.current(), Section::Contact);
        session.select(Section::Home);
        assert_eq!(session.current(), Section::Home);
    }

    #[test]
    fn test_reselecting_current_section_is_a_no_op() {
        let mut session = Session::new();
        session.select(Section::Skills);
        session.select(Section::Skills);
        assert_eq!(session.current(), Section::Skills);
    }

    #[test]
    fn test_no_transition_without_selection() {
        let session = Session::new();
        // Nothing mutates the section besides select().
        assert_eq!(session.current(), Section::Home);
    }
}
