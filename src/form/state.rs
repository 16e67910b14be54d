use crate::{
    constants::{MAX_ROSTER_SIZE, NO_CONTACT_SELECTED},
    errors::RosterError,
    form::draft::{Mode, Snapshot, TeamDraft},
    shapes::team::TeamEntry,
};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseAction {
    CloseNow,
    ConfirmationRequired,
}

/// Field-change notification published to subscribers after every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    NameChanged,
    LogoChanged,
    EmailChanged,
    ContactNumberChanged,
    RosterChanged,
}

/// Pending confirmation for a roster removal. Any roster mutation issued
/// between request and confirmation invalidates the ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteTicket {
    index: usize,
    generation: u64,
}

/// Tracks live edits for one team editing session and answers whether the
/// user changed anything since the session opened or was last reset.
pub struct FormState {
    mode: Mode,
    team_id: Option<Uuid>,
    draft: TeamDraft,
    snapshot: Snapshot,
    generation: u64,
    pending_delete: Option<DeleteTicket>,
    subscribers: Vec<Box<dyn FnMut(FormEvent) + Send>>,
}

impl FormState {
    pub fn new_create() -> Self {
        let draft = TeamDraft::empty();
        let snapshot = Snapshot::of(&draft);
        FormState {
            mode: Mode::Create,
            team_id: None,
            draft,
            snapshot,
            generation: 0,
            pending_delete: None,
            subscribers: Vec::new(),
        }
    }

    pub fn new_edit(team: &TeamEntry) -> Self {
        let draft = TeamDraft::from_entry(team);
        let snapshot = Snapshot::of(&draft);
        FormState {
            mode: Mode::Edit,
            team_id: Some(team.id),
            draft,
            snapshot,
            generation: 0,
            pending_delete: None,
            subscribers: Vec::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn team_id(&self) -> Option<Uuid> {
        self.team_id
    }

    pub fn draft(&self) -> &TeamDraft {
        &self.draft
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(FormEvent) + Send + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
        self.publish(FormEvent::NameChanged);
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.draft.email = email.into();
        self.publish(FormEvent::EmailChanged);
    }

    pub fn set_contact_number(&mut self, contact_number: impl Into<String>) {
        self.draft.contact_number = contact_number.into();
        self.publish(FormEvent::ContactNumberChanged);
    }

    pub fn set_logo(&mut self, logo: Option<String>) {
        self.draft.logo = logo;
        self.publish(FormEvent::LogoChanged);
    }

    pub fn set_roster(&mut self, roster: Vec<String>) -> Result<(), RosterError> {
        if roster.len() > MAX_ROSTER_SIZE {
            return Err(RosterError::Full);
        }
        self.draft.roster = roster;
        self.touch_roster();
        Ok(())
    }

    /// Appends a player, rejecting before mutation once the cap is reached.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<(), RosterError> {
        if self.draft.roster.len() >= MAX_ROSTER_SIZE {
            return Err(RosterError::Full);
        }
        self.draft.roster.push(name.into());
        self.touch_roster();
        Ok(())
    }

    pub fn request_delete(&mut self, index: usize) -> Result<DeleteTicket, RosterError> {
        if index >= self.draft.roster.len() {
            return Err(RosterError::OutOfBounds(index));
        }
        let ticket = DeleteTicket {
            index,
            generation: self.generation,
        };
        self.pending_delete = Some(ticket);
        Ok(ticket)
    }

    pub fn confirm_delete(&mut self, ticket: DeleteTicket) -> Result<String, RosterError> {
        if self.pending_delete != Some(ticket) || ticket.generation != self.generation {
            return Err(RosterError::StaleTicket);
        }
        self.pending_delete = None;
        let removed = self.draft.roster.remove(ticket.index);
        self.touch_roster();
        Ok(removed)
    }

    pub fn cancel_delete(&mut self, ticket: DeleteTicket) {
        if self.pending_delete == Some(ticket) {
            self.pending_delete = None;
        }
    }

    pub fn is_dirty(&self) -> bool {
        match self.mode {
            Mode::Create => {
                !self.draft.name.is_empty()
                    || self.draft.logo.is_some()
                    || !self.draft.roster.is_empty()
                    || self.draft.contact_number != NO_CONTACT_SELECTED
            }
            Mode::Edit => {
                self.draft.name != self.snapshot.name()
                    || self.draft.logo.as_deref() != self.snapshot.logo()
                    || self.draft.roster != self.snapshot.roster()
                    || self.contact_number_changed()
            }
        }
    }

    // The sentinel is an "unset" marker, not a value: when the loaded team
    // had no contact, only a real number counts as a change.
    fn contact_number_changed(&self) -> bool {
        let current = &self.draft.contact_number;
        if self.snapshot.contact_number() == NO_CONTACT_SELECTED {
            !current.is_empty() && current != NO_CONTACT_SELECTED
        } else {
            current != self.snapshot.contact_number()
        }
    }

    /// Restores the draft to the snapshot and clears any pending delete.
    pub fn reset(&mut self) {
        self.draft = self.snapshot.restore();
        self.pending_delete = None;
        self.generation += 1;
    }

    pub fn attempt_close(&self) -> CloseAction {
        if self.is_dirty() {
            CloseAction::ConfirmationRequired
        } else {
            CloseAction::CloseNow
        }
    }

    pub fn discard_and_close(&mut self) {
        self.reset();
    }

    fn touch_roster(&mut self) {
        self.generation += 1;
        self.pending_delete = None;
        self.publish(FormEvent::RosterChanged);
    }

    fn publish(&mut self, event: FormEvent) {
        for subscriber in self.subscribers.iter_mut() {
            subscriber(event);
        }
    }
}
