use chefmenu_core::{averages_by_course, overall_average, MenuItem, Screen};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, ChefField, Overlay, PaymentField, Picker};
use crate::theme::Theme;

pub fn render(frame: &mut Frame, app: &App) {
    let theme = Theme::default();

    let layout = Layout::default()
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Body
            Constraint::Length(2), // Status + hints
        ])
        .split(frame.area());

    render_header(frame, layout[0], app, &theme);

    match app.nav.current() {
        Screen::Home => render_home(frame, layout[1], app, &theme),
        Screen::Chef => render_chef(frame, layout[1], app, &theme),
        Screen::GuestFilter => render_guest_filter(frame, layout[1], app, &theme),
        Screen::SelectedCourse { item } => render_selected(frame, layout[1], app, item, &theme),
        Screen::Payment { item } => render_payment(frame, layout[1], app, item, &theme),
        screen @ (Screen::MissingItem { .. } | Screen::Unknown { .. }) => {
            render_placeholder(frame, layout[1], screen, &theme)
        }
    }

    render_footer(frame, layout[2], app, &theme);

    match &app.overlay {
        Some(Overlay::Picker(picker)) => render_picker(frame, picker, &theme),
        Some(Overlay::ConfirmRemove { name, .. }) => render_confirm_remove(frame, name, &theme),
        Some(Overlay::Message { text, is_error }) => render_message(frame, text, *is_error, &theme),
        None => {}
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let trail = app
        .nav
        .frames()
        .iter()
        .map(Screen::title)
        .collect::<Vec<_>>()
        .join(" > ");

    let header = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {} ", app.title), theme.title),
        Span::styled(trail, theme.muted),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border),
    );

    frame.render_widget(header, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let rows = Layout::default()
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    if let Some(status) = &app.status {
        let p = Paragraph::new(status.as_str())
            .style(theme.success)
            .alignment(Alignment::Center);
        frame.render_widget(p, rows[0]);
    }

    let hints: &[(&str, &str)] = match app.nav.current() {
        Screen::Home => &[
            ("↑/↓", "Navigate"),
            ("Enter", "View"),
            ("c", "Chef"),
            ("f", "Filter"),
            ("q", "Quit"),
        ],
        Screen::Chef if app.chef_field == ChefField::Dishes => &[
            ("↑/↓", "Navigate"),
            ("Enter", "View"),
            ("d", "Remove"),
            ("Tab", "Next field"),
            ("h", "Home"),
            ("Esc", "Back"),
        ],
        Screen::Chef if app.is_editing_text() => &[
            ("Type", "Edit"),
            ("Tab", "Next field"),
            ("Esc", "Back"),
        ],
        Screen::Chef => &[
            ("Tab", "Next field"),
            ("Enter", "Select"),
            ("Esc", "Back"),
        ],
        Screen::GuestFilter => &[
            ("↑/↓", "Navigate"),
            ("f", "Course"),
            ("Enter", "View"),
            ("h", "Home"),
            ("Esc", "Back"),
        ],
        Screen::SelectedCourse { .. } => &[("o", "Order"), ("h", "Home"), ("Esc", "Back")],
        Screen::Payment { .. } => &[("Tab", "Next field"), ("Enter", "Select"), ("Esc", "Back")],
        Screen::MissingItem { .. } | Screen::Unknown { .. } => &[("h", "Home"), ("Esc", "Back")],
    };

    let footer = Paragraph::new(key_hints(hints, theme)).alignment(Alignment::Center);
    frame.render_widget(footer, rows[1]);
}

fn key_hints(hints: &[(&str, &str)], theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!(" {} ", key), theme.key_hint));
        spans.push(Span::styled(label.to_string(), theme.muted));
    }
    Line::from(spans)
}

fn panel<'a>(title: String, focused: bool, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            theme.focused_border
        } else {
            theme.border
        })
        .title(title)
        .title_style(theme.title)
}

#[allow(clippy::too_many_arguments)]
fn dish_list(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    items: &[MenuItem],
    selected: usize,
    block: Block,
    empty: &str,
    theme: &Theme,
) {
    if items.is_empty() {
        let p = Paragraph::new(empty)
            .style(theme.muted)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(p, area);
        return;
    }

    let rows: Vec<ListItem> = items
        .iter()
        .map(|item| {
            let mut spans = vec![
                Span::styled(item.name.clone(), theme.normal),
                Span::styled(format!("  [{}]", item.course), theme.muted),
            ];
            if item.has_add_on() {
                spans.push(Span::styled(format!(" + {}", item.add_on), theme.muted));
            }
            spans.push(Span::styled(format!("  {}", app.format_price(item.price)), theme.price));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(rows)
        .block(block)
        .highlight_style(theme.selected)
        .highlight_symbol("▸ ");

    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

// ===== HOME =====

fn render_home(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let columns = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).split(area);
    let items = app.items();

    dish_list(
        frame,
        columns[0],
        app,
        &items,
        app.home_index,
        panel(format!(" Menu ({}) ", items.len()), true, theme),
        "(No dishes yet, press c to add one)",
        theme,
    );

    let mut lines = vec![Line::raw("")];
    for avg in averages_by_course(&items) {
        let value = if avg.count == 0 {
            Span::styled("-", theme.muted)
        } else {
            Span::styled(app.format_price(avg.average), theme.price)
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<10}", avg.course.label()), theme.normal),
            Span::styled(format!("{:>3} ", avg.count), theme.muted),
            value,
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled(" Overall      ", theme.title),
        Span::styled(app.format_price(overall_average(&items)), theme.price),
    ]));

    let summary = Paragraph::new(lines).block(panel(" Average price ".to_string(), false, theme));
    frame.render_widget(summary, columns[1]);
}

// ===== CHEF =====

fn field_line<'a>(label: &str, value: &str, focused: bool, editable: bool, theme: &Theme) -> Line<'a> {
    let marker = if focused { "▸ " } else { "  " };
    let shown = if focused && editable {
        format!("{}_", value)
    } else {
        value.to_string()
    };
    let value_style = if focused { theme.selected } else { theme.normal };

    Line::from(vec![
        Span::styled(format!("{}{:<16}", marker, label), theme.muted),
        Span::styled(shown, value_style),
    ])
}

fn button_line<'a>(label: &str, focused: bool, theme: &Theme) -> Line<'a> {
    let style = if focused { theme.selected } else { theme.key_hint };
    Line::from(Span::styled(format!("[ {} ]", label), style)).alignment(Alignment::Center)
}

fn render_chef(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let columns = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).split(area);
    let form = &app.dish_form;
    let focus = app.chef_field;

    let lines = vec![
        Line::raw(""),
        field_line("Dish name", &form.name, focus == ChefField::Name, true, theme),
        field_line("Price", &form.price, focus == ChefField::Price, true, theme),
        field_line("Course", form.course.label(), focus == ChefField::Course, false, theme),
        field_line("Add-on", &form.add_on, focus == ChefField::AddOn, false, theme),
        Line::raw(""),
        button_line("Add dish", focus == ChefField::Submit, theme),
    ];

    let form_widget = Paragraph::new(lines).block(panel(
        " New dish ".to_string(),
        focus != ChefField::Dishes,
        theme,
    ));
    frame.render_widget(form_widget, columns[0]);

    let items = app.items();
    dish_list(
        frame,
        columns[1],
        app,
        &items,
        app.chef_index,
        panel(
            format!(" Dishes ({}) ", items.len()),
            focus == ChefField::Dishes,
            theme,
        ),
        "(No dishes)",
        theme,
    );
}

// ===== GUEST FILTER =====

fn render_guest_filter(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let rows = Layout::default()
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let filter = Paragraph::new(Line::from(vec![
        Span::styled(" Course: ", theme.muted),
        Span::styled(app.filter.label(), theme.title),
    ]))
    .block(panel(" Filter ".to_string(), false, theme));
    frame.render_widget(filter, rows[0]);

    let items = app.guest_items();
    dish_list(
        frame,
        rows[1],
        app,
        &items,
        app.guest_index,
        panel(format!(" Dishes ({}) ", items.len()), true, theme),
        "(No dishes for this course)",
        theme,
    );
}

// ===== SELECTED COURSE =====

fn render_selected(frame: &mut Frame, area: Rect, app: &App, item: &MenuItem, theme: &Theme) {
    let add_on = if item.has_add_on() {
        item.add_on.as_str()
    } else {
        "None"
    };

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(item.name.clone(), theme.title)),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Course: ", theme.muted),
            Span::styled(item.course.label(), theme.normal),
        ]),
        Line::from(vec![
            Span::styled("Add-on: ", theme.muted),
            Span::styled(add_on.to_string(), theme.normal),
        ]),
        Line::from(vec![
            Span::styled("Price:  ", theme.muted),
            Span::styled(app.format_price(item.price), theme.price),
        ]),
        Line::raw(""),
        button_line("Order (o)", true, theme),
    ];

    let p = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(panel(" Dish ".to_string(), true, theme));
    frame.render_widget(p, area);
}

// ===== PAYMENT =====

fn render_payment(frame: &mut Frame, area: Rect, app: &App, item: &MenuItem, theme: &Theme) {
    let form = &app.payment_form;
    let focus = app.payment_field;

    let lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::styled(format!("  {:<16}", "Dish"), theme.muted),
            Span::styled(item.name.clone(), theme.normal),
        ]),
        Line::from(vec![
            Span::styled(format!("  {:<16}", "Amount"), theme.muted),
            Span::styled(app.format_price(item.price), theme.price),
        ]),
        Line::raw(""),
        field_line("Bank name", &form.bank_name, focus == PaymentField::BankName, true, theme),
        field_line(
            "Account number",
            &form.account_number,
            focus == PaymentField::AccountNumber,
            true,
            theme,
        ),
        Line::raw(""),
        button_line("Pay", focus == PaymentField::Pay, theme),
    ];

    let p = Paragraph::new(lines).block(panel(" Payment ".to_string(), true, theme));
    frame.render_widget(p, inner_rect(area, 1));
}

// ===== PLACEHOLDER =====

fn render_placeholder(frame: &mut Frame, area: Rect, screen: &Screen, theme: &Theme) {
    let detail = match screen {
        Screen::MissingItem { route } => format!("{} was opened without a dish.", route),
        Screen::Unknown { name } => format!("There is no screen called '{}'.", name),
        _ => String::new(),
    };

    let p = Paragraph::new(vec![
        Line::raw(""),
        Line::from(Span::styled(screen.title(), theme.danger)),
        Line::raw(""),
        Line::raw(detail),
        Line::raw(""),
        Line::from(Span::styled("Press Esc to go back or h for Home", theme.muted)),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(panel(" Nothing to show ".to_string(), false, theme));

    frame.render_widget(p, area);
}

// ===== OVERLAYS =====

fn render_picker(frame: &mut Frame, picker: &Picker, theme: &Theme) {
    let height = picker.options.len() as u16 + 2;
    let area = center_rect(frame.area(), 40, height);

    frame.render_widget(Clear, area);

    let rows: Vec<ListItem> = picker
        .options
        .iter()
        .map(|option| ListItem::new(format!(" {} ", option)).style(theme.normal))
        .collect();

    let list = List::new(rows)
        .block(panel(format!(" {} ", picker.label), true, theme))
        .highlight_style(theme.selected)
        .highlight_symbol("▸ ");

    let mut state = ListState::default().with_selected(Some(picker.index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_confirm_remove(frame: &mut Frame, name: &str, theme: &Theme) {
    let area = center_rect(frame.area(), 50, 8);

    // Clear background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.danger)
        .title(" Remove dish ")
        .title_style(theme.danger);

    frame.render_widget(block, area);

    let text = Paragraph::new(vec![
        Line::raw(""),
        Line::from(vec![
            Span::raw("Dish: "),
            Span::styled(name.to_string(), theme.title),
        ]),
        Line::raw(""),
        Line::from(vec![
            Span::styled(" [Y] ", theme.key_hint),
            Span::styled("Remove", theme.danger),
            Span::raw("    "),
            Span::styled(" [N] ", theme.key_hint),
            Span::raw("Cancel"),
        ]),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    frame.render_widget(text, inner_rect(area, 1));
}

fn render_message(frame: &mut Frame, msg: &str, is_error: bool, theme: &Theme) {
    let area = center_rect(frame.area(), 60, 8);

    frame.render_widget(Clear, area);

    let style: Style = if is_error { theme.danger } else { theme.success };
    let title = if is_error { " Error " } else { " Done " };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title)
        .title_style(style);

    frame.render_widget(block, area);

    let text = Paragraph::new(vec![
        Line::raw(""),
        Line::raw(msg.to_string()),
        Line::raw(""),
        Line::from(Span::styled("Press any key to continue", theme.muted)),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    frame.render_widget(text, inner_rect(area, 1));
}

// Helper: shrink rect by margin
fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y.saturating_add(margin),
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

// Helper: center a popup, clipped to `area`
fn center_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{test_app, PickerTarget};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_home_shows_dishes_and_averages() {
        let app = test_app();
        let screen = draw(&app);
        assert!(screen.contains("Chef's Menu"));
        assert!(screen.contains("Tomato Soup"));
        assert!(screen.contains("R 220.00"));
        // overall average of 45.00 and 220.00
        assert!(screen.contains("R 132.50"));
    }

    #[test]
    fn test_breadcrumb_follows_stack() {
        let mut app = test_app();
        app.open(Screen::Chef);
        let screen = draw(&app);
        assert!(screen.contains("Menu > Chef"));
        assert!(screen.contains("New dish"));
    }

    #[test]
    fn test_empty_menu_message() {
        let mut app = test_app();
        app.store.remove_item("1");
        app.store.remove_item("2");
        let screen = draw(&app);
        assert!(screen.contains("No dishes yet"));
    }

    #[test]
    fn test_missing_item_placeholder() {
        let mut app = test_app();
        app.open_route("Payment", None);
        let screen = draw(&app);
        assert!(screen.contains("Payment was opened without a dish."));
    }

    #[test]
    fn test_unknown_route_placeholder() {
        let mut app = test_app();
        app.open_route("Kitchen", None);
        let screen = draw(&app);
        assert!(screen.contains("no screen called 'Kitchen'"));
    }

    #[test]
    fn test_payment_screen_shows_amount() {
        let mut app = test_app();
        let steak = app.items()[1].clone();
        app.open(Screen::Payment { item: steak });
        let screen = draw(&app);
        assert!(screen.contains("Grilled Steak"));
        assert!(screen.contains("R 220.00"));
        assert!(screen.contains("Account number"));
    }

    #[test]
    fn test_overlays_render() {
        let mut app = test_app();
        app.open(Screen::GuestFilter);
        app.open_picker(PickerTarget::Filter);
        assert!(draw(&app).contains("Beverage"));

        app.overlay = None;
        app.show_error("Price must be a number".to_string());
        assert!(draw(&app).contains("Price must be a number"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
    }

    #[test]
    fn test_center_rect_clips() {
        let area = Rect::new(0, 0, 20, 5);
        let popup = center_rect(area, 50, 8);
        assert_eq!(popup.width, 10);
        assert_eq!(popup.height, 5);
        assert_eq!(popup.x, 5);
        assert_eq!(popup.y, 0);
    }

    #[test]
    fn test_center_rect_on_wide_terminal() {
        let area = Rect::new(0, 0, 2_000, 50);
        let popup = center_rect(area, 60, 8);
        assert_eq!(popup.width, 1_200);
        assert_eq!(popup.x, 400);
    }
}
