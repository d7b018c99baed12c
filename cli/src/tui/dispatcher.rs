// SPDX-FileCopyrightText: 2026 postcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use postcal_core::{ContentType, Platform, ViewMode};

type Callback = Rc<RefCell<dyn FnMut(&Action)>>;

pub struct Dispatcher {
    subscribers: Vec<Callback>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub fn register(&mut self, callback: Callback) {
        self.subscribers.push(callback);
    }

    pub fn dispatch(&mut self, action: &Action) {
        for sub in &self.subscribers {
            (sub.borrow_mut())(action);
        }
    }
}

/// Every user intention the calendar reacts to. Key handlers only dispatch
/// actions; all state changes happen in the store's action handler.
#[derive(Debug, Clone)]
pub enum Action {
    SwitchView(ViewMode),
    NavPrev,
    NavNext,
    NavToday,
    SelectNext,
    SelectPrev,
    OpenAdd,
    OpenDetail,
    OpenEditFromDetail,
    CloseModal,
    UpdateTitle(String),
    UpdateDate(String),
    UpdateTime(String),
    UpdatePlatform(Platform),
    UpdateKind(ContentType),
    UpdateDescription(String),
    SubmitChanges,
    RequestDelete,
    ConfirmDelete,
    ExportCsv,
}
