// SPDX-FileCopyrightText: 2026 postcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, path::PathBuf, rc::Rc};

use postcal_core::{ContentStore, ViewMode};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::tui::calendar_store::{CalendarStore, Modal};
use crate::tui::component::{Component, Message};
use crate::tui::component_form::Form;
use crate::tui::confirm::ConfirmDelete;
use crate::tui::detail::DetailPanel;
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::entry_form::new_entry_form;
use crate::tui::month_view::MonthView;
use crate::tui::week_view::WeekView;

/// Runs the interactive calendar until the user quits. Owns the terminal
/// for the duration; every collection mutation inside is saved by the
/// store before the next draw.
pub fn run_calendar(content: ContentStore, export_dir: PathBuf) -> Result<(), Box<dyn Error>> {
    let store = Rc::new(RefCell::new(CalendarStore::new(content, export_dir)));

    let mut terminal = ratatui::init();
    let result = {
        let mut dispatcher = Dispatcher::new();
        CalendarStore::register_to(store.clone(), &mut dispatcher);
        let mut view = CalendarView::new(dispatcher);

        loop {
            if let Err(e) = view.draw(&store, &mut terminal) {
                break Err(e);
            }

            match view.read_event(&store) {
                Err(e) => break Err(e),
                Ok(Some(Message::Exit)) => break Ok(()),
                Ok(_) => {} // Continue the loop to render the next frame
            }
        }
    }; // release dispatcher and view here to avoid borrow conflicts
    ratatui::restore();
    result
}

/// The draw/read harness around the root component.
struct CalendarView {
    dispatcher: Dispatcher,
    root: CalendarApp,
    area: Rect,
}

impl CalendarView {
    fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            root: CalendarApp::new(),
            area: Rect::default(),
        }
    }

    fn draw(
        &mut self,
        store: &Rc<RefCell<CalendarStore>>,
        terminal: &mut DefaultTerminal,
    ) -> Result<(), Box<dyn Error>> {
        let mut area = Rect::default();
        let root = &self.root;
        terminal.draw(|frame| {
            area = frame.area();
            root.render(store, area, frame.buffer_mut());
            if let Some(pos) = root.get_cursor_position(store, area) {
                frame.set_cursor_position(pos);
            }
        })?;
        self.area = area;
        Ok(())
    }

    fn read_event(
        &mut self,
        store: &Rc<RefCell<CalendarStore>>,
    ) -> Result<Option<Message>, Box<dyn Error>> {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(self.root.on_key(&mut self.dispatcher, store, self.area, key))
            }
            _ => Ok(None),
        }
    }
}

/// Root component: header with period label and notice, the active grid,
/// key hints, and whichever modal is open on top.
struct CalendarApp {
    month: MonthView,
    week: WeekView,
    form: Form<CalendarStore>,
    detail: DetailPanel,
    confirm: ConfirmDelete,
}

impl CalendarApp {
    fn new() -> Self {
        Self {
            month: MonthView,
            week: WeekView,
            form: new_entry_form(),
            detail: DetailPanel,
            confirm: ConfirmDelete,
        }
    }

    fn layout(area: Rect) -> std::rc::Rc<[Rect]> {
        Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area)
    }

    fn modal_block(title: &str) -> Block<'_> {
        Block::bordered()
            .border_set(border::ROUNDED)
            .title(Line::from(format!(" {title} ").bold()).centered())
    }

    fn modal_area(modal: Modal, area: Rect) -> Rect {
        let (width, height) = match modal {
            Modal::Form => (56, 22),
            Modal::Detail => (48, 18),
            Modal::ConfirmDelete => (44, 5),
            Modal::None => (0, 0),
        };
        centered(area, width, height)
    }

    fn open_form(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<CalendarStore>) {
        self.form.reset(dispatcher, store);
        self.form.activate(dispatcher, store);
    }

    fn on_calendar_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<CalendarStore>,
        event: KeyEvent,
    ) -> Option<Message> {
        let action = match event.code {
            KeyCode::Esc | KeyCode::Char('q') => return Some(Message::Exit),
            KeyCode::Char('m') => Action::SwitchView(ViewMode::Month),
            KeyCode::Char('w') => Action::SwitchView(ViewMode::Week),
            KeyCode::Left | KeyCode::Char('p') => Action::NavPrev,
            KeyCode::Right | KeyCode::Char('n') => Action::NavNext,
            KeyCode::Char('t') => Action::NavToday,
            KeyCode::Up | KeyCode::Char('k') => Action::SelectPrev,
            KeyCode::Down | KeyCode::Char('j') => Action::SelectNext,
            KeyCode::Enter => Action::OpenDetail,
            KeyCode::Char('x') => Action::ExportCsv,
            KeyCode::Char('a') => {
                dispatcher.dispatch(&Action::OpenAdd);
                self.open_form(dispatcher, store);
                return Some(Message::Handled);
            }
            _ => return None,
        };
        dispatcher.dispatch(&action);
        Some(Message::Handled)
    }
}

impl Component<CalendarStore> for CalendarApp {
    fn render(&self, store: &RefCell<CalendarStore>, area: Rect, buf: &mut Buffer) {
        let chunks = Self::layout(area);

        let (period, view, notice, modal, editing) = {
            let s = store.borrow();
            (
                s.period_label(),
                s.view,
                s.notice.clone(),
                s.modal,
                s.editing.is_some(),
            )
        };

        let view_tag = match view {
            ViewMode::Month => "[Month] Week ",
            ViewMode::Week => " Month [Week]",
        };
        Paragraph::new(Line::from(vec![
            Span::from(" postcal ").bold().fg(Color::Blue),
            Span::from(" "),
            Span::from(period).bold(),
            Span::from("  "),
            Span::from(view_tag).fg(Color::Gray),
        ]))
        .render(chunks[0], buf);
        if let Some(notice) = notice {
            let line = Rect {
                y: chunks[0].y + 1,
                height: 1,
                ..chunks[0]
            };
            Paragraph::new(Span::from(notice).fg(Color::Yellow)).render(line, buf);
        }

        match view {
            ViewMode::Month => self.month.render(store, chunks[1], buf),
            ViewMode::Week => self.week.render(store, chunks[1], buf),
        }

        Paragraph::new(hints(modal).centered()).render(chunks[2], buf);

        if modal != Modal::None {
            let modal_area = Self::modal_area(modal, area);
            Clear.render(modal_area, buf);
            let title = match modal {
                Modal::Form if editing => "Edit Content",
                Modal::Form => "Add New Content",
                Modal::Detail => "Content Details",
                Modal::ConfirmDelete => "Confirm Delete",
                Modal::None => unreachable!(),
            };
            let block = Self::modal_block(title).white();
            let inner = block.inner(modal_area);
            block.render(modal_area, buf);
            match modal {
                Modal::Form => self.form.render(store, inner, buf),
                Modal::Detail => self.detail.render(store, inner, buf),
                Modal::ConfirmDelete => self.confirm.render(store, inner, buf),
                Modal::None => unreachable!(),
            }
        }
    }

    fn get_cursor_position(&self, store: &RefCell<CalendarStore>, area: Rect) -> Option<(u16, u16)> {
        let modal = store.borrow().modal;
        if modal != Modal::Form {
            return None;
        }
        let modal_area = Self::modal_area(modal, area);
        let inner = Self::modal_block("").inner(modal_area);
        self.form.get_cursor_position(store, inner)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<CalendarStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let modal = store.borrow().modal;
        match modal {
            Modal::None => self.on_calendar_key(dispatcher, store, event),
            Modal::Form => {
                let modal_area = Self::modal_area(modal, area);
                let inner = Self::modal_block("").inner(modal_area);
                if let Some(msg) = self.form.on_key(dispatcher, store, inner, event) {
                    return Some(msg);
                }
                match event.code {
                    KeyCode::Esc => {
                        dispatcher.dispatch(&Action::CloseModal);
                        Some(Message::Handled)
                    }
                    _ => None,
                }
            }
            Modal::Detail => {
                let action = match event.code {
                    KeyCode::Char('e') => {
                        dispatcher.dispatch(&Action::OpenEditFromDetail);
                        self.open_form(dispatcher, store);
                        return Some(Message::Handled);
                    }
                    KeyCode::Char('d') => Action::RequestDelete,
                    KeyCode::Esc | KeyCode::Char('q') => Action::CloseModal,
                    _ => return None,
                };
                dispatcher.dispatch(&action);
                Some(Message::Handled)
            }
            Modal::ConfirmDelete => {
                let action = match event.code {
                    KeyCode::Char('y') => Action::ConfirmDelete,
                    KeyCode::Char('n') | KeyCode::Esc => Action::CloseModal,
                    _ => return None,
                };
                dispatcher.dispatch(&action);
                Some(Message::Handled)
            }
        }
    }
}

fn hints(modal: Modal) -> Line<'static> {
    let pairs: &[(&str, &str)] = match modal {
        Modal::None => &[
            ("m/w", "View"),
            ("←/→", "Navigate"),
            ("t", "Today"),
            ("↑/↓", "Select"),
            ("Enter", "Details"),
            ("a", "Add"),
            ("x", "Export"),
            ("q", "Quit"),
        ],
        Modal::Form => &[
            ("↑/↓", "Field"),
            ("←/→", "Option"),
            ("Enter", "Save"),
            ("Esc", "Cancel"),
        ],
        Modal::Detail => &[("e", "Edit"), ("d", "Delete"), ("Esc", "Close")],
        Modal::ConfirmDelete => &[("y", "Delete"), ("n", "Cancel")],
    };

    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (key, label) in pairs {
        spans.push(Span::from(format!(" {label} ")));
        spans.push(Span::from(format!("<{key}>")).blue().bold());
    }
    Line::from(spans)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
