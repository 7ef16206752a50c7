use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, AppState, Tab, ViewMode, BOOKING_FIELD_COUNT, CONTACT_FIELD_COUNT};

use super::styles;
use super::tabs::{cart, gallery, packages, testimonials};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Tabs
            Constraint::Min(10),   // Main content
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, app, chunks[0]);
    render_tabs(frame, app, chunks[1]);
    render_main_content(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);

    // Render overlays
    if matches!(app.state, AppState::ShowingHelp) {
        render_help_overlay(frame);
    }

    if matches!(app.state, AppState::BookingForm) {
        render_booking_overlay(frame, app);
    }

    if matches!(app.state, AppState::ContactForm) {
        render_contact_overlay(frame, app);
    }

    if matches!(app.state, AppState::ConfirmingQuit) {
        render_quit_overlay(frame);
    }
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title = "  Round-The-World Travel & Tours";
    let help_hint = "[?] Help";
    let title_len = title.len();

    let mut spans = vec![Span::styled(title, styles::title_style())];

    // Live search readout while typing
    if matches!(app.state, AppState::Searching) {
        spans.push(Span::styled(
            format!("   search: {}▌", app.package_filter.search),
            styles::search_style(),
        ));
    }

    let used: usize = title_len
        + if matches!(app.state, AppState::Searching) {
            app.package_filter.search.len() + 12
        } else {
            0
        };

    spans.push(Span::raw(" ".repeat(
        (area.width as usize).saturating_sub(used + help_hint.len() + 4),
    )));
    spans.push(Span::styled(help_hint, styles::muted_style()));

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let main_tabs: Vec<(String, bool)> = [Tab::Packages, Tab::Gallery, Tab::Testimonials, Tab::Cart]
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            (
                format!("[{}] {}", i + 1, tab.title()),
                app.current_tab == *tab,
            )
        })
        .collect();

    let mut spans = vec![Span::raw(" ")];
    for (i, (label, selected)) in main_tabs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", styles::muted_style()));
        }
        if *selected {
            spans.push(Span::styled(label.clone(), styles::tab_style(true)));
        } else {
            spans.push(Span::styled(label.clone(), styles::muted_style()));
        }
    }

    // View-mode toggle on the right when browsing packages
    if app.current_tab == Tab::Packages {
        let view_tabs = vec![
            ("[v]grid", app.view_mode == ViewMode::Grid),
            ("table", app.view_mode == ViewMode::List),
        ];

        let main_width: usize = spans.iter().map(|s| s.content.len()).sum();
        let view_width: usize =
            view_tabs.iter().map(|(l, _)| l.len()).sum::<usize>() + (view_tabs.len() - 1) * 3;
        let padding = (area.width as usize).saturating_sub(main_width + view_width + 2);

        spans.push(Span::raw(" ".repeat(padding)));

        for (i, (label, selected)) in view_tabs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", styles::muted_style()));
            }
            if *selected {
                spans.push(Span::styled(*label, styles::tab_style(true)));
            } else {
                spans.push(Span::styled(*label, styles::muted_style()));
            }
        }
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn render_main_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.current_tab {
        Tab::Packages => packages::render(frame, app, area),
        Tab::Gallery => gallery::render(frame, app, area),
        Tab::Testimonials => testimonials::render(frame, app, area),
        Tab::Cart => cart::render(frame, app, area),
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = "[u]pdate | [m]essage | [q]uit";

    let left_text = if let Some(ref msg) = app.status_message {
        format!(" {} ", msg)
    } else {
        format!(" Updated {} ", app.cache_ages.last_updated())
    };

    let right_text = format!(" {} ", shortcuts);

    // Cart summary in the middle so it stays visible from every tab
    let center_text = if app.cart.is_empty() {
        String::new()
    } else {
        format!(
            "Cart: {} items - {}",
            app.cart.item_count(),
            app.cart.total_display()
        )
    };

    let width = area.width as usize;

    if center_text.is_empty() {
        let padding_len = width
            .saturating_sub(left_text.len())
            .saturating_sub(right_text.len());
        let status_line = Line::from(vec![
            Span::styled(left_text, styles::muted_style()),
            Span::raw(" ".repeat(padding_len)),
            Span::styled(right_text, styles::muted_style()),
        ]);
        let paragraph = Paragraph::new(status_line).style(styles::status_bar_style());
        frame.render_widget(paragraph, area);
    } else {
        let center_start = (width.saturating_sub(center_text.len())) / 2;
        let left_pad = center_start.saturating_sub(left_text.len());
        let right_start = center_start + center_text.len();
        let right_pad = width
            .saturating_sub(right_start)
            .saturating_sub(right_text.len());

        let status_line = Line::from(vec![
            Span::styled(left_text, styles::muted_style()),
            Span::raw(" ".repeat(left_pad)),
            Span::styled(center_text, styles::highlight_style()),
            Span::raw(" ".repeat(right_pad)),
            Span::styled(right_text, styles::muted_style()),
        ]);
        let paragraph = Paragraph::new(status_line).style(styles::status_bar_style());
        frame.render_widget(paragraph, area);
    }
}

fn render_help_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(52, 26, frame.area());
    frame.render_widget(Clear, area);

    let version = env!("CARGO_PKG_VERSION");

    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", k), styles::help_key_style()),
            Span::styled(desc, styles::help_desc_style()),
        ])
    };

    let help_text = vec![
        Line::from(Span::styled("       T O U R C A C H E", styles::title_style())),
        Line::from(Span::styled(
            format!("          version {}", version),
            styles::muted_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(" Navigation", styles::highlight_style())),
        key("1-4", "Switch tabs"),
        key("←/→", "Prev/next tab"),
        key("↑/↓", "Navigate list"),
        Line::from(""),
        Line::from(Span::styled(" Packages", styles::highlight_style())),
        key("/", "Search name or destination"),
        key("s", "Cycle sort order"),
        key("d/t/a", "Cycle destination/type/availability"),
        key("x", "Reset filters"),
        key("v", "Toggle grid/table view"),
        key("Enter", "Add to cart"),
        key("i", "Inquire about selection"),
        Line::from(""),
        Line::from(Span::styled(" Gallery & Testimonials", styles::highlight_style())),
        key("n/p", "Next/prev page or review"),
        key("y/d/t", "Cycle gallery filters"),
        Line::from(""),
        Line::from(Span::styled(" Cart", styles::highlight_style())),
        key("b", "Booking form"),
        key("x / C", "Remove line / clear cart"),
        Line::from(""),
        Line::from(vec![
            Span::styled("       Press ", styles::muted_style()),
            Span::styled("?", styles::help_key_style()),
            Span::styled(" or ", styles::muted_style()),
            Span::styled("Esc", styles::help_key_style()),
            Span::styled(" to close", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    frame.render_widget(Paragraph::new(help_text).block(block), area);
}

/// Labels for the booking form fields, in focus order
const BOOKING_LABELS: [&str; BOOKING_FIELD_COUNT] = [
    "Full name",
    "Email",
    "Phone",
    "Travel date",
    "Adults",
    "Children",
    "Budget range",
    "Accommodation",
    "Special requests",
    "Contact via",
];

/// Labels for the contact form fields, in focus order
const CONTACT_LABELS: [&str; CONTACT_FIELD_COUNT] =
    ["Name", "Email", "Phone", "Subject", "Message"];

fn render_booking_overlay(frame: &mut Frame, app: &App) {
    let height = 10 + BOOKING_FIELD_COUNT as u16 + if app.form_error.is_some() { 2 } else { 0 };
    let area = centered_rect_fixed(58, height, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled("  Book Your Trip", styles::title_style())),
        Line::from(Span::styled(
            format!(
                "  {} items - total {}",
                app.cart.item_count(),
                app.cart.total_display()
            ),
            styles::muted_style(),
        )),
        Line::from(""),
    ];

    let values = [
        &app.booking_form.full_name,
        &app.booking_form.email,
        &app.booking_form.phone,
        &app.booking_form.travel_date,
        &app.booking_form.adults,
        &app.booking_form.children,
        &app.booking_form.budget_range,
        &app.booking_form.accommodation_type,
        &app.booking_form.special_requests,
        &app.booking_form.contact_method,
    ];

    for (i, (label, value)) in BOOKING_LABELS.iter().zip(values).enumerate() {
        lines.push(form_field_line(label, value, app.booking_focus == i));
    }

    lines.push(Line::from(""));
    lines.push(submit_button_line(
        app.booking_focus == BOOKING_FIELD_COUNT,
        app.submitting,
        "Submit Booking",
    ));

    if let Some(ref error) = app.form_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", error),
            styles::error_style(),
        )));
    }

    let block = Block::default()
        .title(" Booking - [Esc] close [Tab] next field ")
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_contact_overlay(frame: &mut Frame, app: &App) {
    let height = 9 + CONTACT_FIELD_COUNT as u16 + if app.form_error.is_some() { 2 } else { 0 };
    let area = centered_rect_fixed(58, height, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled("  Send Us a Message", styles::title_style())),
        Line::from(""),
    ];

    let values = [
        &app.contact_form.name,
        &app.contact_form.email,
        &app.contact_form.phone,
        &app.contact_form.subject,
        &app.contact_form.message,
    ];

    for (i, (label, value)) in CONTACT_LABELS.iter().zip(values).enumerate() {
        lines.push(form_field_line(label, value, app.contact_focus == i));
    }

    lines.push(Line::from(""));
    lines.push(submit_button_line(
        app.contact_focus == CONTACT_FIELD_COUNT,
        app.submitting,
        "Send Message",
    ));

    if let Some(ref error) = app.form_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", error),
            styles::error_style(),
        )));
    }

    let block = Block::default()
        .title(" Contact - [Esc] close [Tab] next field ")
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn form_field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    // Show the tail when the value is longer than the field
    let display: String = value.chars().rev().take(32).collect::<Vec<_>>().iter().rev().collect();
    let cursor = if focused { "▌" } else { "" };
    Line::from(vec![
        Span::styled(format!("  {:<17}[", label), styles::muted_style()),
        Span::styled(format!("{:<32}{}", display, cursor), style),
        Span::styled("]", styles::muted_style()),
    ])
}

fn submit_button_line(focused: bool, submitting: bool, label: &str) -> Line<'static> {
    let style = if focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    let text = if submitting {
        "  Sending...  ".to_string()
    } else if focused {
        format!(" ▶ {} ◀ ", label)
    } else {
        format!("   {}   ", label)
    };
    Line::from(vec![
        Span::raw("            ["),
        Span::styled(text, style),
        Span::raw("]"),
    ])
}

fn render_quit_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(46, 8, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled("     T O U R C A C H E", styles::title_style())),
        Line::from(""),
        Line::from(Span::styled(
            "   Are you sure you want to quit?",
            styles::highlight_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("   Press ", styles::muted_style()),
            Span::styled("[Y]", styles::help_key_style()),
            Span::styled(" to quit, ", styles::muted_style()),
            Span::styled("[N]", styles::help_key_style()),
            Span::styled(" to cancel", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Create a centered rectangle with fixed dimensions
fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
