// SPDX-FileCopyrightText: 2026 postcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use postcal_core::{ContentType, Platform};

use crate::tui::calendar_store::CalendarStore;
use crate::tui::component_form::{Access, Form, Input, RadioGroup};
use crate::tui::dispatcher::{Action, Dispatcher};

/// The add/edit form: title, date, time, platform, type, description.
/// The same form serves both modes; the store knows whether a submit
/// inserts or updates.
pub fn new_entry_form() -> Form<CalendarStore> {
    Form::new(vec![
        Box::new(new_title()),
        Box::new(new_date()),
        Box::new(new_time()),
        Box::new(new_platform()),
        Box::new(new_kind()),
        Box::new(new_description()),
    ])
}

macro_rules! new_input {
    ($fn: ident, $title:expr, $acc: ident, $field: ident, $action: ident) => {
        fn $fn() -> Input<CalendarStore, $acc> {
            Input::new($title.to_string())
        }

        struct $acc;

        impl Access<CalendarStore, String> for $acc {
            fn get(store: &RefCell<CalendarStore>) -> String {
                store.borrow().draft.$field.clone()
            }

            fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
                dispatcher.dispatch(&Action::$action(value));
                true
            }
        }
    };
}

new_input!(new_title, "Title", TitleAccess, title, UpdateTitle);
new_input!(new_date, "Date (YYYY-MM-DD)", DateAccess, date, UpdateDate);
new_input!(new_time, "Time (HH:MM)", TimeAccess, time, UpdateTime);
new_input!(
    new_description,
    "Description",
    DescriptionAccess,
    description,
    UpdateDescription
);

fn new_platform() -> RadioGroup<CalendarStore, Platform, PlatformAccess> {
    let values = Platform::ALL.to_vec();
    let options = values.iter().map(|p| p.display_name().to_string()).collect();
    RadioGroup::new("Platform".to_string(), values, options)
}

struct PlatformAccess;

impl Access<CalendarStore, Platform> for PlatformAccess {
    fn get(store: &RefCell<CalendarStore>) -> Platform {
        store.borrow().draft.platform
    }

    fn set(dispatcher: &mut Dispatcher, value: Platform) -> bool {
        dispatcher.dispatch(&Action::UpdatePlatform(value));
        true
    }
}

fn new_kind() -> RadioGroup<CalendarStore, ContentType, KindAccess> {
    let values = ContentType::ALL.to_vec();
    let options = values.iter().map(|k| k.display_name().to_string()).collect();
    RadioGroup::new("Content type".to_string(), values, options)
}

struct KindAccess;

impl Access<CalendarStore, ContentType> for KindAccess {
    fn get(store: &RefCell<CalendarStore>) -> ContentType {
        store.borrow().draft.kind
    }

    fn set(dispatcher: &mut Dispatcher, value: ContentType) -> bool {
        dispatcher.dispatch(&Action::UpdateKind(value));
        true
    }
}
