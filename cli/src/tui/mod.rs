// SPDX-FileCopyrightText: 2026 postcal contributors
//
// SPDX-License-Identifier: Apache-2.0

mod app;
mod calendar_store;
mod component;
mod component_form;
mod confirm;
mod detail;
mod dispatcher;
mod entry_form;
mod month_view;
mod theme;
mod week_view;

pub use app::run_calendar;
