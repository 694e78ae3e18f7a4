use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use chefmenu_core::Screen;

use crate::app::{App, ChefField, Overlay, PaymentField, PickerTarget};

/// Poll for terminal events with timeout
pub fn poll_event(timeout_ms: u64) -> anyhow::Result<Option<Event>> {
    if event::poll(Duration::from_millis(timeout_ms))? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

pub fn handle_event(app: &mut App, event: Event) {
    // Resize is handled by ratatui on the next draw
    if let Event::Key(key) = event {
        // Only handle key press events (not release)
        if key.kind == KeyEventKind::Press {
            handle_key(app, key);
        }
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // Overlays are modal
    match app.overlay {
        Some(Overlay::Message { .. }) => return app.dismiss_message(),
        Some(Overlay::ConfirmRemove { .. }) => return handle_confirm(app, key.code),
        Some(Overlay::Picker(_)) => return handle_picker(app, key.code),
        None => {}
    }

    match app.nav.current() {
        Screen::Home => handle_home(app, key.code),
        Screen::Chef => handle_chef(app, key.code),
        Screen::GuestFilter => handle_guest_filter(app, key.code),
        Screen::SelectedCourse { .. } => handle_selected(app, key.code),
        Screen::Payment { .. } => handle_payment(app, key.code),
        Screen::MissingItem { .. } | Screen::Unknown { .. } => handle_placeholder(app, key.code),
    }
}

fn handle_confirm(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_remove(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_remove(),
        _ => {}
    }
}

fn handle_picker(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Up | KeyCode::Char('k') => app.picker_move(false),
        KeyCode::Down | KeyCode::Char('j') => app.picker_move(true),
        KeyCode::Enter | KeyCode::Char(' ') => app.picker_choose(),
        KeyCode::Esc => app.overlay = None,
        _ => {}
    }
}

fn handle_home(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(false),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(true),
        KeyCode::Enter => {
            let item = app.selected_home_item();
            app.open_selected(item);
        }
        KeyCode::Char('c') => app.open(Screen::Chef),
        KeyCode::Char('f') => app.open(Screen::GuestFilter),
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

fn handle_chef(app: &mut App, code: KeyCode) {
    // Focus movement works from every field
    match code {
        KeyCode::Tab => {
            app.chef_field = app.chef_field.next();
            return;
        }
        KeyCode::BackTab => {
            app.chef_field = app.chef_field.prev();
            return;
        }
        KeyCode::Esc => {
            app.go_back();
            return;
        }
        _ => {}
    }

    match app.chef_field {
        ChefField::Name | ChefField::Price => match code {
            KeyCode::Char(c) => app.input_char(c),
            KeyCode::Backspace => app.backspace(),
            KeyCode::Enter | KeyCode::Down => app.chef_field = app.chef_field.next(),
            KeyCode::Up => app.chef_field = app.chef_field.prev(),
            _ => {}
        },
        ChefField::Course | ChefField::AddOn => match code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                let target = if app.chef_field == ChefField::Course {
                    PickerTarget::Course
                } else {
                    PickerTarget::AddOn
                };
                app.open_picker(target);
            }
            KeyCode::Down | KeyCode::Char('j') => app.chef_field = app.chef_field.next(),
            KeyCode::Up | KeyCode::Char('k') => app.chef_field = app.chef_field.prev(),
            KeyCode::Char('h') => app.go_home(),
            _ => {}
        },
        ChefField::Submit => match code {
            KeyCode::Enter | KeyCode::Char(' ') => app.submit_dish(),
            KeyCode::Down | KeyCode::Char('j') => app.chef_field = app.chef_field.next(),
            KeyCode::Up | KeyCode::Char('k') => app.chef_field = app.chef_field.prev(),
            KeyCode::Char('h') => app.go_home(),
            _ => {}
        },
        ChefField::Dishes => match code {
            KeyCode::Up | KeyCode::Char('k') => app.move_selection(false),
            KeyCode::Down | KeyCode::Char('j') => app.move_selection(true),
            KeyCode::Char('d') | KeyCode::Delete => app.request_remove(),
            KeyCode::Enter => {
                let item = app.selected_chef_item();
                app.open_selected(item);
            }
            KeyCode::Char('h') => app.go_home(),
            _ => {}
        },
    }
}

fn handle_guest_filter(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(false),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(true),
        KeyCode::Char('f') => app.open_picker(PickerTarget::Filter),
        KeyCode::Enter => {
            let item = app.selected_guest_item();
            app.open_selected(item);
        }
        KeyCode::Esc | KeyCode::Backspace => app.go_back(),
        KeyCode::Char('h') => app.go_home(),
        _ => {}
    }
}

fn handle_selected(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('o') | KeyCode::Enter => {
            if let Some(item) = app.nav.current().item().cloned() {
                app.open(Screen::Payment { item });
            }
        }
        KeyCode::Esc | KeyCode::Backspace => app.go_back(),
        KeyCode::Char('h') => app.go_home(),
        _ => {}
    }
}

fn handle_payment(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Tab => app.payment_field = app.payment_field.next(),
        KeyCode::BackTab => app.payment_field = app.payment_field.prev(),
        KeyCode::Esc => app.go_back(),
        _ if app.payment_field.is_text() => match code {
            KeyCode::Char(c) => app.input_char(c),
            KeyCode::Backspace => app.backspace(),
            KeyCode::Enter | KeyCode::Down => app.payment_field = app.payment_field.next(),
            KeyCode::Up => app.payment_field = app.payment_field.prev(),
            _ => {}
        },
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_payment(),
        KeyCode::Up | KeyCode::Char('k') => app.payment_field = PaymentField::AccountNumber,
        KeyCode::Char('h') => app.go_home(),
        _ => {}
    }
}

fn handle_placeholder(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Backspace => app.go_back(),
        KeyCode::Char('h') | KeyCode::Enter => app.go_home(),
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{test_app, Picker};
    use chefmenu_core::Course;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut app = test_app();
        app.open(Screen::Chef);
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = test_app();
        let mut key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_event(&mut app, Event::Key(key));
        assert_eq!(app.nav.current(), &Screen::Home);
    }

    #[test]
    fn test_home_navigation() {
        let mut app = test_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.nav.current().item().map(|i| i.name.as_str()),
            Some("Grilled Steak")
        );

        press(&mut app, KeyCode::Char('o'));
        assert!(matches!(app.nav.current(), Screen::Payment { .. }));
        assert_eq!(app.nav.depth(), 3);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('h'));
        assert!(app.nav.is_at_root());
    }

    #[test]
    fn test_chef_add_dish_end_to_end() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('c'));
        type_text(&mut app, "Pizza");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "99.999");
        press(&mut app, KeyCode::Tab);

        // Course picker: Starter -> Main
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.dish_form.course, Course::Main);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.chef_field, ChefField::Submit);
        press(&mut app, KeyCode::Enter);

        assert!(app.nav.is_at_root());
        let first = &app.items()[0];
        assert_eq!(first.name, "Pizza");
        assert_eq!(first.price.to_string(), "100.00");
        assert_eq!(first.add_on, "");
        assert_eq!(first.id, "3");
        assert!(app.dish_form.name.is_empty());
    }

    #[test]
    fn test_chef_text_fields_accept_command_letters() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('c'));
        type_text(&mut app, "hq");
        assert_eq!(app.dish_form.name, "hq");
        assert_eq!(app.nav.current(), &Screen::Chef);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.dish_form.name, "h");
    }

    #[test]
    fn test_chef_invalid_price_keeps_state() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('c'));
        type_text(&mut app, " Pizza ");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "abc");
        app.chef_field = ChefField::Submit;
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.overlay, Some(Overlay::Message { is_error: true, .. })));
        assert_eq!(app.store.len(), 2);
        assert_eq!(app.nav.depth(), 2);

        // any key dismisses, form is intact
        press(&mut app, KeyCode::Char('x'));
        assert!(app.overlay.is_none());
        assert_eq!(app.dish_form.price, "abc");
    }

    #[test]
    fn test_chef_remove_dish_with_confirmation() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.chef_field, ChefField::Dishes);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.store.len(), 2);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.items()[0].name, "Grilled Steak");
    }

    #[test]
    fn test_guest_filter_picker() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Char('f'));
        // All -> Starter -> Main
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        let names: Vec<String> = app.guest_items().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Grilled Steak".to_string()]);

        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.nav.current(), Screen::SelectedCourse { .. }));
    }

    #[test]
    fn test_guest_filter_enter_opens_dish_and_f_opens_picker() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Enter);
        assert!(app.overlay.is_none());
        assert_eq!(
            app.nav.current().item().map(|i| i.name.as_str()),
            Some("Tomato Soup")
        );

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('f'));
        assert!(matches!(
            app.overlay,
            Some(Overlay::Picker(Picker { target: PickerTarget::Filter, .. }))
        ));
    }

    #[test]
    fn test_picker_escape_changes_nothing() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Esc);
        assert!(app.overlay.is_none());
        assert_eq!(app.guest_items().len(), 2);
        assert_eq!(app.nav.current(), &Screen::GuestFilter);
    }

    #[test]
    fn test_payment_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.nav.current(), Screen::Payment { .. }));

        type_text(&mut app, "Standard Bank");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "62001234");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.payment_field, PaymentField::Pay);
        press(&mut app, KeyCode::Enter);

        assert!(app.nav.is_at_root());
        assert!(matches!(app.overlay, Some(Overlay::Message { is_error: false, .. })));
    }

    #[test]
    fn test_placeholder_back_to_home() {
        let mut app = test_app();
        app.open_route("SelectedCourse", None);
        assert!(matches!(app.nav.current(), Screen::MissingItem { .. }));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.nav.current(), &Screen::Home);
        assert_eq!(app.nav.depth(), 1);
    }

    #[test]
    fn test_esc_on_home_quits() {
        let mut app = test_app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
