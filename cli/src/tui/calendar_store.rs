// SPDX-FileCopyrightText: 2026 postcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, path::PathBuf, rc::Rc};

use chrono::{Days, Local, NaiveDate};
use postcal_core::{
    ContentEntry, ContentStore, EntryDraft, ViewMode, add_months, date_key, export_csv,
    month_grid, new_entry_id, period_label, week_start,
};

use crate::tui::dispatcher::{Action, Dispatcher};

/// Which overlay is currently open on top of the calendar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    #[default]
    None,

    /// The add/edit form; add when `editing` is None, edit otherwise.
    Form,

    /// Read-only detail panel for one entry.
    Detail,

    /// Explicit confirmation step before a delete.
    ConfirmDelete,
}

/// All calendar state: the entry collection plus anchor date, view mode,
/// modal state, form draft and selection. Mutated only through dispatched
/// [`Action`]s, every mutation of the collection saves the snapshot.
pub struct CalendarStore {
    pub content: ContentStore,
    pub export_dir: PathBuf,
    pub today: NaiveDate,
    pub anchor: NaiveDate,
    pub view: ViewMode,
    pub modal: Modal,
    pub draft: EntryDraft,

    /// Id of the entry the form edits; None means the form inserts.
    pub editing: Option<String>,

    /// Id shown in the detail modal and targeted by delete.
    pub detail: Option<String>,

    /// Index into [`CalendarStore::visible_ids`] for keyboard selection.
    pub selected: usize,

    /// One-line status message shown in the header.
    pub notice: Option<String>,
}

impl CalendarStore {
    pub fn new(content: ContentStore, export_dir: PathBuf) -> Self {
        let today = Local::now().date_naive();
        Self::new_at(content, export_dir, today)
    }

    /// Like [`CalendarStore::new`] with an explicit current date, for tests.
    pub fn new_at(content: ContentStore, export_dir: PathBuf, today: NaiveDate) -> Self {
        Self {
            content,
            export_dir,
            today,
            anchor: today,
            view: ViewMode::Month,
            modal: Modal::None,
            draft: EntryDraft::default(),
            editing: None,
            detail: None,
            selected: 0,
            notice: None,
        }
    }

    /// The navigation bar label for the displayed period.
    pub fn period_label(&self) -> String {
        period_label(self.view, self.anchor)
    }

    /// Ids of the entries inside the displayed period, in insertion order.
    /// Selection moves over this list.
    pub fn visible_ids(&self) -> Vec<String> {
        let keys: Vec<String> = match self.view {
            ViewMode::Month => {
                use chrono::Datelike;
                month_grid(self.anchor.year(), self.anchor.month())
                    .into_iter()
                    .map(date_key)
                    .collect()
            }
            ViewMode::Week => {
                let start = week_start(self.anchor);
                (0..7).map(|i| date_key(start + Days::new(i))).collect()
            }
        };
        self.content
            .entries()
            .iter()
            .filter(|e| keys.contains(&e.date))
            .map(|e| e.id.clone())
            .collect()
    }

    /// The entry currently under the selection cursor.
    pub fn selected_id(&self) -> Option<String> {
        self.visible_ids().get(self.selected).cloned()
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| {
            that.borrow_mut().apply(action);
        }));
        dispatcher.register(callback);
    }

    /// Applies one action. This is the whole state machine of the
    /// controller; key handlers never mutate state directly.
    pub fn apply(&mut self, action: &Action) {
        match action {
            Action::SwitchView(view) => {
                self.view = *view;
                self.clamp_selection();
            }
            Action::NavPrev => self.navigate(-1),
            Action::NavNext => self.navigate(1),
            Action::NavToday => {
                self.today = Local::now().date_naive();
                self.anchor = self.today;
                self.clamp_selection();
            }
            Action::SelectNext => self.move_selection(1),
            Action::SelectPrev => self.move_selection(-1),
            Action::OpenAdd => {
                self.draft = EntryDraft::default_at(self.today);
                self.editing = None;
                self.notice = None;
                self.modal = Modal::Form;
            }
            Action::OpenDetail => {
                // stale selections no-op
                if let Some(id) = self.selected_id()
                    && self.content.find(&id).is_some()
                {
                    self.detail = Some(id);
                    self.modal = Modal::Detail;
                }
            }
            Action::OpenEditFromDetail => match self.detail_entry() {
                Some(entry) => {
                    self.draft = EntryDraft::from_entry(&entry);
                    self.editing = Some(entry.id);
                    self.notice = None;
                    self.modal = Modal::Form;
                }
                None => self.close_all_modals(),
            },
            Action::CloseModal => self.close_modal(),
            Action::UpdateTitle(v) => self.draft.title = v.clone(),
            Action::UpdateDate(v) => self.draft.date = v.clone(),
            Action::UpdateTime(v) => self.draft.time = v.clone(),
            Action::UpdatePlatform(v) => self.draft.platform = *v,
            Action::UpdateKind(v) => self.draft.kind = *v,
            Action::UpdateDescription(v) => self.draft.description = v.clone(),
            Action::SubmitChanges => self.submit_form(),
            Action::RequestDelete => {
                if self.modal == Modal::Detail && self.detail.is_some() {
                    self.modal = Modal::ConfirmDelete;
                }
            }
            Action::ConfirmDelete => self.confirm_delete(),
            Action::ExportCsv => self.export(),
        }
    }

    fn navigate(&mut self, direction: i32) {
        self.anchor = match self.view {
            ViewMode::Month => add_months(self.anchor, direction),
            ViewMode::Week => {
                let days = Days::new(7);
                match direction >= 0 {
                    true => self.anchor + days,
                    false => self.anchor - days,
                }
            }
        };
        self.clamp_selection();
    }

    fn move_selection(&mut self, offset: isize) {
        let len = self.visible_ids().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let len = len as isize;
        self.selected = ((self.selected as isize + offset).rem_euclid(len)) as usize;
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_ids().len();
        if self.selected >= len {
            self.selected = 0;
        }
    }

    fn detail_entry(&self) -> Option<ContentEntry> {
        let id = self.detail.as_deref()?;
        self.content.find(id).cloned()
    }

    fn close_modal(&mut self) {
        match self.modal {
            // cancelling the confirmation returns to the detail panel
            Modal::ConfirmDelete if self.detail_entry().is_some() => self.modal = Modal::Detail,
            _ => self.close_all_modals(),
        }
    }

    fn close_all_modals(&mut self) {
        self.modal = Modal::None;
        self.editing = None;
        self.detail = None;
    }

    fn submit_form(&mut self) {
        if self.modal != Modal::Form {
            return;
        }
        if let Err(msg) = self.draft.validate() {
            self.notice = Some(msg.to_string());
            return; // keep the form open
        }

        let draft = std::mem::take(&mut self.draft);
        match self.editing.take() {
            Some(id) => {
                let entry = draft.into_entry(id.clone());
                if !self.content.update(&id, entry) {
                    tracing::warn!(id, "edited entry vanished, ignoring submit");
                }
            }
            None => self.content.add(draft.into_entry(new_entry_id())),
        }
        self.persist();
        self.close_all_modals();
    }

    fn confirm_delete(&mut self) {
        if self.modal != Modal::ConfirmDelete {
            return;
        }
        if let Some(id) = self.detail.take()
            && self.content.remove(&id)
        {
            self.persist();
        }
        self.close_all_modals();
        self.clamp_selection();
    }

    fn export(&mut self) {
        match export_csv(self.content.entries(), &self.export_dir, self.today) {
            Ok(Some(path)) => self.notice = Some(format!("Exported to {}", path.display())),
            Ok(None) => self.notice = Some("No content to export!".to_string()),
            Err(e) => {
                tracing::error!("csv export failed: {e}");
                self.notice = Some(format!("Export failed: {e}"));
            }
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.content.save() {
            tracing::error!("failed to save snapshot: {e}");
            self.notice = Some(format!("Save failed: {e}"));
        }
    }
}
