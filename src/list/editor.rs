use crate::model::task::Task;

/// Modal editing session for the create/edit dialog.
///
/// Holds the draft being edited. The draft is a detached copy; nothing
/// touches the collection until the session is committed.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    draft: Option<Task>,
    is_edit: bool,
}

impl EditSession {
    /// Start a create session with a blank draft.
    pub fn open_create(&mut self) {
        self.draft = Some(Task::draft());
        self.is_edit = false;
    }

    /// Start an edit session seeded from an existing task.
    pub fn open_edit(&mut self, task: &Task) {
        self.draft = Some(task.clone());
        self.is_edit = true;
    }

    /// End the session, handing back the draft if one was open.
    pub fn close(&mut self) -> Option<Task> {
        self.is_edit = false;
        self.draft.take()
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    /// True when the open session edits an existing task rather than
    /// creating a new one.
    pub fn is_edit(&self) -> bool {
        self.is_edit
    }

    pub fn draft(&self) -> Option<&Task> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut Task> {
        self.draft.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_session_opens_blank_draft() {
        let mut session = EditSession::default();
        assert!(!session.is_open());

        session.open_create();
        assert!(session.is_open());
        assert!(!session.is_edit());
        let draft = session.draft().unwrap();
        assert_eq!(draft.id, 0);
        assert_eq!(draft.content, "");
        assert!(!draft.done);
    }

    #[test]
    fn edit_session_copies_task() {
        let mut task = Task::new(3, "tidy desk");
        task.done = true;
        let mut session = EditSession::default();
        session.open_edit(&task);

        assert!(session.is_edit());
        assert_eq!(session.draft(), Some(&task));

        // Mutating the draft leaves the source untouched
        session.draft_mut().unwrap().content = "tidy desk and shelf".to_string();
        assert_eq!(task.content, "tidy desk");
    }

    #[test]
    fn close_returns_draft_and_resets() {
        let mut session = EditSession::default();
        session.open_edit(&Task::new(1, "x"));

        let draft = session.close();
        assert_eq!(draft.map(|d| d.id), Some(1));
        assert!(!session.is_open());
        assert!(!session.is_edit());
        assert_eq!(session.close(), None);
    }
}
