use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::catalog::{self, PageToken, GALLERY_PAGE_SIZE};
use crate::ui::styles;
use crate::utils::truncate;

/// Render the Gallery tab: a paged list of past trips with a detail panel
/// and a page-number strip underneath.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(2)])
        .split(columns[0]);

    render_page_list(frame, app, left[0]);
    render_page_strip(frame, app, left[1]);
    render_item_detail(frame, app, columns[1]);
}

fn render_page_list(frame: &mut Frame, app: &App, area: Rect) {
    let filtered = app.filtered_gallery();
    let page_items = catalog::page_slice(&filtered, app.gallery_page, GALLERY_PAGE_SIZE);

    let items: Vec<ListItem> = page_items
        .iter()
        .map(|item| {
            let line = Line::from(vec![
                Span::styled(truncate(&item.title, 30), styles::list_item_style()),
                Span::raw("  "),
                Span::styled(
                    format!("{} · {}", item.destination, item.year),
                    styles::muted_style(),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let filter_summary = {
        let f = &app.gallery_filter;
        let mut parts = Vec::new();
        if f.year != catalog::ALL {
            parts.push(f.year.clone());
        }
        if f.destination != catalog::ALL {
            parts.push(f.destination.clone());
        }
        if f.tour_type != catalog::ALL {
            parts.push(f.tour_type.clone());
        }
        if parts.is_empty() {
            String::new()
        } else {
            format!("- {} ", parts.join("/"))
        }
    };

    let title = format!(" Gallery ({} trips) {}", filtered.len(), filter_summary);

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .title_style(styles::muted_style())
                .borders(Borders::ALL)
                .border_style(styles::border_style(true)),
        )
        .highlight_style(styles::selected_style());

    let mut state = ListState::default();
    let page_len = catalog::page_slice(&filtered, app.gallery_page, GALLERY_PAGE_SIZE).len();
    if page_len > 0 {
        state.select(Some(app.gallery_selection.min(page_len - 1)));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_page_strip(frame: &mut Frame, app: &App, area: Rect) {
    let total = app.gallery_total_pages();
    if total == 0 {
        return;
    }

    let mut spans = vec![Span::styled(" [p]rev ", styles::muted_style())];
    for token in catalog::page_strip(app.gallery_page, total) {
        match token {
            PageToken::Page(n) => {
                let label = format!(" {} ", n);
                if n == app.gallery_page {
                    spans.push(Span::styled(label, styles::selected_style()));
                } else {
                    spans.push(Span::styled(label, styles::list_item_style()));
                }
            }
            PageToken::Ellipsis => {
                spans.push(Span::styled(" … ", styles::muted_style()));
            }
        }
    }
    spans.push(Span::styled(" [n]ext ", styles::muted_style()));

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}

fn render_item_detail(frame: &mut Frame, app: &App, area: Rect) {
    let content = match app.selected_gallery_item() {
        Some(item) => {
            let mut lines = vec![Line::from(Span::styled(
                item.title.clone(),
                styles::title_style(),
            ))];
            lines.push(Line::from(""));

            let field = |label: &str, value: String| {
                Line::from(vec![
                    Span::styled(format!("{:<14}", label), styles::muted_style()),
                    Span::raw(value),
                ])
            };

            lines.push(field("Client:", item.client_name.clone()));
            lines.push(field("Destination:", item.destination.clone()));
            lines.push(field("Tour type:", item.tour_type.clone()));
            lines.push(field("Year:", item.year.clone()));
            lines.push(field("Photos:", item.photo_count().to_string()));

            if !item.description.trim().is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(item.description.trim().to_string()));
            }

            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Photo links".to_string(),
                styles::highlight_style(),
            )));
            for url in &item.images {
                lines.push(Line::from(Span::styled(
                    format!("  {}", url),
                    styles::muted_style(),
                )));
            }

            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "[i] inquire about a trip like this",
                styles::muted_style(),
            )));

            lines
        }
        None => vec![Line::from(Span::styled(
            "No trips match the current filters",
            styles::muted_style(),
        ))],
    };

    let block = Block::default()
        .title(" Trip ")
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    let paragraph = Paragraph::new(content).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
