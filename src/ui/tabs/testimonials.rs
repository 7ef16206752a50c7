use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::styles;

/// Render the Testimonials tab: one review at a time, carousel style, with
/// position dots underneath.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" Testimonials ({}) ", app.testimonials.len()))
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    if app.testimonials.is_empty() {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "No testimonials yet",
            styles::muted_style(),
        )))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // stars
            Constraint::Min(4),    // review text
            Constraint::Length(3), // attribution
            Constraint::Length(2), // dots + hint
        ])
        .split(inner);

    let t = &app.testimonials[app.testimonial_index.min(app.testimonials.len() - 1)];

    let stars = Paragraph::new(Line::from(Span::styled(t.stars(), styles::star_style())))
        .centered();
    frame.render_widget(stars, chunks[0]);

    let text = Paragraph::new(Line::from(format!("\u{201c}{}\u{201d}", t.text.trim())))
        .centered()
        .wrap(Wrap { trim: true });
    frame.render_widget(text, chunks[1]);

    let mut attribution = vec![Line::from(Span::styled(
        t.name.clone(),
        styles::title_style(),
    ))];
    let mut meta = Vec::new();
    if !t.location.is_empty() {
        meta.push(t.location.clone());
    }
    if !t.package.is_empty() {
        meta.push(t.package.clone());
    }
    if !t.date.is_empty() {
        meta.push(t.date.clone());
    }
    if !meta.is_empty() {
        attribution.push(Line::from(Span::styled(
            meta.join(" · "),
            styles::muted_style(),
        )));
    }
    frame.render_widget(Paragraph::new(attribution).centered(), chunks[2]);

    let dots: String = (0..app.testimonials.len())
        .map(|i| {
            if i == app.testimonial_index {
                "● "
            } else {
                "○ "
            }
        })
        .collect();
    let footer = vec![Line::from(vec![
        Span::styled(dots, styles::highlight_style()),
        Span::styled("  [n]ext [p]rev", styles::muted_style()),
    ])];
    frame.render_widget(Paragraph::new(footer).centered(), chunks[3]);
}
