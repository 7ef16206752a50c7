use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use crate::app::{App, ViewMode};
use crate::models::Package;
use crate::ui::styles;
use crate::utils::truncate;

/// Render the Packages tab. Grid mode shows a browse list with a detail
/// panel; list mode shows a dense full-width table.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    match app.view_mode {
        ViewMode::Grid => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
                .split(area);

            render_package_list(frame, app, chunks[0]);
            render_package_detail(frame, app, chunks[1]);
        }
        ViewMode::List => render_package_table(frame, app, area),
    }
}

fn list_title(app: &App, filtered: usize) -> String {
    let mut title = format!(
        " Packages ({} of {}) - {} destinations - sort: {} ",
        filtered,
        app.packages.len(),
        app.destination_count(),
        app.sort.label()
    );
    if !app.package_filter.search.is_empty() {
        title.push_str(&format!("- \"{}\" ", app.package_filter.search));
    }
    if !app.package_filter.is_default() {
        title.push_str("- [x] reset ");
    }
    title
}

fn render_package_list(frame: &mut Frame, app: &App, area: Rect) {
    let filtered = app.filtered_packages();

    let items: Vec<ListItem> = filtered
        .iter()
        .map(|pkg| {
            let marker = if pkg.featured { "★ " } else { "  " };
            let line = Line::from(vec![
                Span::styled(marker, styles::featured_style()),
                Span::styled(truncate(&pkg.name, 28), styles::list_item_style()),
                Span::raw("  "),
                Span::styled(pkg.price_display(), styles::price_style()),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(list_title(app, filtered.len()))
                .title_style(styles::muted_style())
                .borders(Borders::ALL)
                .border_style(styles::border_style(true)),
        )
        .highlight_style(styles::selected_style());

    let mut state = ListState::default();
    if !filtered.is_empty() {
        state.select(Some(app.package_selection.min(filtered.len() - 1)));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_package_table(frame: &mut Frame, app: &App, area: Rect) {
    let filtered = app.filtered_packages();

    let header = Row::new([
        Cell::from("Name"),
        Cell::from("Destination"),
        Cell::from("Duration"),
        Cell::from("Type"),
        Cell::from("Price"),
        Cell::from("Rating"),
        Cell::from("Status"),
    ])
    .style(styles::title_style())
    .height(1);

    let rows: Vec<Row> = filtered
        .iter()
        .map(|pkg| {
            let name = if pkg.featured {
                format!("★ {}", pkg.name)
            } else {
                format!("  {}", pkg.name)
            };
            Row::new(vec![
                Cell::from(name),
                Cell::from(pkg.destination.clone()),
                Cell::from(pkg.duration.clone()),
                Cell::from(pkg.tour_type.clone()),
                Cell::from(pkg.price_display()),
                Cell::from(format!("{:.1}", pkg.rating)),
                Cell::from(pkg.availability.clone()),
            ])
            .style(styles::list_item_style())
        })
        .collect();

    let widths = [
        Constraint::Percentage(30),
        Constraint::Fill(2),
        Constraint::Fill(2),
        Constraint::Fill(1),
        Constraint::Length(12),
        Constraint::Length(7),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(list_title(app, filtered.len()))
                .title_style(styles::muted_style())
                .borders(Borders::ALL)
                .border_style(styles::border_style(true)),
        )
        .row_highlight_style(styles::selected_style());

    let mut state = TableState::default();
    if !filtered.is_empty() {
        state.select(Some(app.package_selection.min(filtered.len() - 1)));
    }

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_package_detail(frame: &mut Frame, app: &App, area: Rect) {
    let content = match app.selected_package() {
        Some(pkg) => detail_lines(pkg),
        None => vec![Line::from(Span::styled(
            "No packages match the current filters",
            styles::muted_style(),
        ))],
    };

    let block = Block::default()
        .title(" Details ")
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    let paragraph = Paragraph::new(content).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn detail_lines(pkg: &Package) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(pkg.name.clone(), styles::title_style()),
        Span::raw(if pkg.featured { "  " } else { "" }),
        Span::styled(
            if pkg.featured { "★ Featured" } else { "" },
            styles::featured_style(),
        ),
    ])];
    lines.push(Line::from(""));

    let field = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<14}", label), styles::muted_style()),
            Span::raw(value),
        ])
    };

    lines.push(field("Destination:", pkg.destination.clone()));
    lines.push(field("Duration:", pkg.duration.clone()));
    lines.push(Line::from(vec![
        Span::styled(format!("{:<14}", "Price:"), styles::muted_style()),
        Span::styled(pkg.price_display(), styles::price_style()),
        Span::styled("  per person", styles::muted_style()),
    ]));
    lines.push(Line::from(vec![
        Span::styled(format!("{:<14}", "Rating:"), styles::muted_style()),
        Span::styled(format!("{:.1} / 5.0", pkg.rating), styles::star_style()),
    ]));
    lines.push(field("Type:", pkg.tour_type.clone()));
    lines.push(field("Status:", pkg.availability.clone()));

    let section = |lines: &mut Vec<Line<'static>>, title: &str, entries: Vec<String>| {
        if entries.is_empty() {
            return;
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            title.to_string(),
            styles::highlight_style(),
        )));
        for entry in entries {
            lines.push(Line::from(format!("  - {}", entry)));
        }
    };

    section(&mut lines, "Highlights", pkg.highlights_list());
    section(&mut lines, "Inclusions", pkg.inclusions_list());
    section(&mut lines, "Exclusions", pkg.exclusions_list());
    section(&mut lines, "Travel Dates", pkg.travel_dates_list());
    section(&mut lines, "Itinerary", pkg.itinerary_days());

    let text_field = |lines: &mut Vec<Line<'static>>, title: &str, value: &str| {
        if value.trim().is_empty() {
            return;
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            title.to_string(),
            styles::highlight_style(),
        )));
        lines.push(Line::from(format!("  {}", value.trim())));
    };

    text_field(&mut lines, "Hotel", &pkg.hotel_details);
    text_field(&mut lines, "Flights", &pkg.flight_details);
    text_field(&mut lines, "Visa", &pkg.visa_requirements);

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] add to cart  [i] inquire",
        styles::muted_style(),
    )));

    lines
}
