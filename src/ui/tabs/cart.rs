use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::ui::styles;
use crate::utils::format_price;

/// Render the Cart tab: one row per package with quantity and subtotal,
/// total row underneath.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(area);

    render_cart_table(frame, app, chunks[0]);
    render_total_bar(frame, app, chunks[1]);
}

fn render_cart_table(frame: &mut Frame, app: &App, area: Rect) {
    let lines = app.cart.lines();

    if lines.is_empty() {
        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Your cart is empty",
                styles::muted_style(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "  Browse the Packages tab and press Enter to add a tour",
                styles::muted_style(),
            )),
        ];
        let paragraph = Paragraph::new(content).block(
            Block::default()
                .title(" Cart ")
                .title_style(styles::muted_style())
                .borders(Borders::ALL)
                .border_style(styles::border_style(true)),
        );
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new([
        Cell::from("Package"),
        Cell::from("Destination"),
        Cell::from("Duration"),
        Cell::from("Price"),
        Cell::from("Qty"),
        Cell::from("Subtotal"),
    ])
    .style(styles::title_style())
    .height(1);

    let rows: Vec<Row> = lines
        .iter()
        .map(|line| {
            Row::new(vec![
                Cell::from(line.package.name.clone()),
                Cell::from(line.package.destination.clone()),
                Cell::from(line.package.duration.clone()),
                Cell::from(line.package.price_display()),
                Cell::from(format!("{:>3}", line.quantity)),
                Cell::from(format_price(line.line_total())),
            ])
            .style(styles::list_item_style())
        })
        .collect();

    let widths = [
        Constraint::Percentage(32),
        Constraint::Fill(2),
        Constraint::Fill(2),
        Constraint::Length(12),
        Constraint::Length(5),
        Constraint::Length(12),
    ];

    let title = format!(
        " Cart ({} items) - [x] remove [C] clear [b] book ",
        app.cart.item_count()
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .title_style(styles::muted_style())
                .borders(Borders::ALL)
                .border_style(styles::border_style(true)),
        )
        .row_highlight_style(styles::selected_style());

    let mut state = TableState::default();
    state.select(Some(app.cart_selection.min(lines.len() - 1)));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_total_bar(frame: &mut Frame, app: &App, area: Rect) {
    let line = if app.cart.is_empty() {
        Line::from(Span::styled(" Total: ₱0 ", styles::muted_style()))
    } else {
        Line::from(vec![
            Span::styled(" Total: ", styles::muted_style()),
            Span::styled(app.cart.total_display(), styles::price_style()),
            Span::styled(
                "   press [b] to submit a booking request",
                styles::muted_style(),
            ),
        ])
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::border_style(false)),
    );
    frame.render_widget(paragraph, area);
}
