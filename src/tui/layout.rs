//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Bar, BarChart, BarGroup, Block, Borders, Gauge, Paragraph, Row, Table, Wrap,
};

use super::runtime::{App, Field, Outcome};
use super::style;
use crate::household::PLACEHOLDER;
use crate::projection::Projection;
use crate::report::ReferenceCard;
use crate::runner::Calculation;

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(10),   // form | results
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(14), Constraint::Min(4)])
        .split(body[0]);

    render_header(frame, app, chunks[0]);
    render_form(frame, app, left[0]);
    render_reference(frame, left[1]);
    render_results(frame, app, body[1]);
    render_footer(frame, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Line::from(vec![
        Span::styled(
            " HOME ENERGY CALCULATOR ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" │ rate {}{}/kWh ", app.currency, app.rate)),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Current value of a form field as shown in its row.
fn field_value(app: &App, field: Field, focused: bool) -> String {
    let s = &app.submission;
    let cursor = if focused { "_" } else { "" };
    match field {
        Field::Name => format!("{}{cursor}", s.name),
        Field::City => format!("{}{cursor}", s.city),
        Field::Area => format!("{}{cursor}", s.area),
        Field::Age => format!("< {} >", s.age),
        Field::HousingType => s
            .housing_type
            .map_or_else(|| PLACEHOLDER.to_string(), |h| h.to_string()),
        Field::Configuration => s
            .configuration
            .map_or_else(|| PLACEHOLDER.to_string(), |c| c.to_string()),
        Field::Appliance(a) => style::checkbox(s.appliances.is_selected(a)).to_string(),
        Field::Calculate => String::new(),
    }
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Field::ALL
        .iter()
        .enumerate()
        .map(|(i, &field)| {
            let focused = i == app.focus;
            let text = if field == Field::Calculate {
                format!("[ {} ]", field.label())
            } else {
                format!("{:<20}{}", field.label(), field_value(app, field, focused))
            };
            if focused {
                Line::styled(text, style::focused())
            } else {
                Line::raw(text)
            }
        })
        .collect();
    lines.push(Line::raw(""));
    lines.push(Line::raw(format!(
        "{:<20}{}{} per kWh",
        "Energy Rate", app.currency, app.rate
    )));

    let block = Block::default().title(" Your Home ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_reference(frame: &mut Frame, area: Rect) {
    let text = ReferenceCard::new().to_string();
    let lines: Vec<Line> = text.lines().map(|l| Line::raw(l.to_string())).collect();
    let block = Block::default().title(" How it works ").borders(Borders::ALL);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_results(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title(" Results ").borders(Borders::ALL);
    match &app.outcome {
        None => {
            let hint = Paragraph::new("Fill in the form and press Enter to calculate.")
                .style(Style::default().fg(style::FOOTER_FG))
                .block(block);
            frame.render_widget(hint, area);
        }
        Some(Outcome::Rejected(e)) => {
            let msg = Paragraph::new(format!("Please fill in all required fields! ({e})"))
                .style(
                    Style::default()
                        .fg(style::ERROR_FG)
                        .add_modifier(Modifier::BOLD),
                )
                .block(block);
            frame.render_widget(msg, area);
        }
        Some(Outcome::Calculated(calc)) => render_calculation(frame, app, calc, area),
    }
}

fn render_calculation(frame: &mut Frame, app: &App, calc: &Calculation, area: Rect) {
    let p = &calc.projection;
    let table_height = u16::try_from(p.rows.len()).unwrap_or(4) + 3;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),            // summary
            Constraint::Min(8),               // charts
            Constraint::Length(table_height), // breakdown table
            Constraint::Length(3),            // projections
        ])
        .split(area);

    let summary = Paragraph::new(calc.report(&app.currency).summary())
        .style(Style::default().fg(style::RESULT_FG))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Results ").borders(Borders::ALL));
    frame.render_widget(summary, chunks[0]);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_distribution(frame, p, charts[0]);
    render_magnitude(frame, p, charts[1]);
    render_table(frame, p, &app.currency, chunks[2]);
    render_projections(frame, p, &app.currency, chunks[3]);
}

/// Share of the daily total per line, one gauge each.
fn render_distribution(frame: &mut Frame, p: &Projection, area: Rect) {
    let block = Block::default()
        .title(" Energy Distribution ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(p.rows.iter().map(|_| Constraint::Length(1)))
        .split(inner);

    for (i, (label, pct)) in p.distribution().into_iter().enumerate() {
        let color = style::SLICE_COLORS[i % style::SLICE_COLORS.len()];
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color))
            .ratio((pct / 100.0).clamp(0.0, 1.0))
            .label(format!("{label} {pct:.1}%"));
        frame.render_widget(gauge, rows[i]);
    }
}

/// kWh per line as a bar chart; bar heights are in tenths of a kWh.
fn render_magnitude(frame: &mut Frame, p: &Projection, area: Rect) {
    let bars: Vec<Bar> = p
        .rows
        .iter()
        .map(|r| {
            Bar::default()
                .value((r.energy_kwh * 10.0).round() as u64)
                .text_value(format!("{:.1}", r.energy_kwh))
                .label(Line::from(style::short_label(&r.category)))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Energy by Category (kWh) ")
                .borders(Borders::ALL),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(6)
        .bar_gap(1)
        .bar_style(Style::default().fg(style::BAR_COLOR));
    frame.render_widget(chart, area);
}

fn render_table(frame: &mut Frame, p: &Projection, currency: &str, area: Rect) {
    let header = Row::new(vec![
        "Category".to_string(),
        "Energy (kWh)".to_string(),
        "Percentage".to_string(),
        format!("Cost ({currency}/day)"),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = p.rows.iter().map(|r| {
        Row::new(vec![
            r.category.to_string(),
            format!("{:.1}", r.energy_kwh),
            format!("{:.1}", r.percentage),
            format!("{:.0}", r.cost),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(34),
            Constraint::Percentage(22),
            Constraint::Percentage(20),
            Constraint::Percentage(24),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(" Detailed Breakdown ")
            .borders(Borders::ALL),
    );
    frame.render_widget(table, area);
}

fn render_projections(frame: &mut Frame, p: &Projection, currency: &str, area: Rect) {
    let line = Line::from(format!(
        " Monthly {:.1} kWh │ Yearly {:.1} kWh │ Monthly {currency}{:.0} │ Yearly {currency}{:.0}",
        p.monthly_energy_kwh, p.yearly_energy_kwh, p.monthly_cost, p.yearly_cost
    ));
    let block = Block::default().title(" Projections ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " Tab/↑↓:Move  ←→:Change  Space:Toggle  Enter:Calculate  PgUp/PgDn:Rate  Esc:Quit",
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}
