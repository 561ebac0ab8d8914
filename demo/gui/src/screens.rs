//! Screen rendering functions for the TUI.

use pricer_models::analytical::OutputMetric;
use pricer_models::instruments::OptionType;
use pricer_risk::scenarios::{SweepRange, SweepSeries, SweepVariable};
use ratatui::{
    prelude::*,
    symbols,
    widgets::{Axis, Block, Borders, Chart, Clear, Dataset, GraphType, Paragraph, Tabs, Wrap},
};

use crate::state::{DashboardState, Focus, INVALID_INPUT_MESSAGE, TITLE};

/// Call curve colour (#960019).
pub const CALL_COLOUR: Color = Color::Rgb(0x96, 0x00, 0x19);

/// Put curve colour (#0041C2).
pub const PUT_COLOUR: Color = Color::Rgb(0x00, 0x41, 0xC2);

/// Curve colour for an option type.
pub fn curve_colour(option_type: OptionType) -> Color {
    match option_type {
        OptionType::Call => CALL_COLOUR,
        OptionType::Put => PUT_COLOUR,
    }
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Axis tick label with precision suited to the magnitude.
pub fn format_tick(v: f64) -> String {
    let abs_v = v.abs();
    if abs_v >= 100.0 {
        format!("{:.0}", v)
    } else if abs_v >= 1.0 {
        format!("{:.2}", v)
    } else if abs_v >= 0.01 || abs_v == 0.0 {
        format!("{:.3}", v)
    } else {
        format!("{:.1e}", v)
    }
}

/// Text rendering of the range slider: `─` outside the window, `━` inside,
/// `●` at each handle.
pub fn slider_bar(bounds: SweepRange, window: SweepRange, width: usize) -> String {
    if width < 2 {
        return "●".repeat(width);
    }
    let last = (width - 1) as f64;
    let position = |x: f64| -> usize {
        let frac = if bounds.width() > 0.0 {
            ((x - bounds.start) / bounds.width()).clamp(0.0, 1.0)
        } else {
            0.0
        };
        (frac * last).round() as usize
    };
    let (lo, hi) = (position(window.start), position(window.end));

    (0..width)
        .map(|i| {
            if i == lo || i == hi {
                '●'
            } else if i > lo && i < hi {
                '━'
            } else {
                '─'
            }
        })
        .collect()
}

/// Draw header
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(TITLE)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// Draw the dependent- and independent-variable selectors
pub fn draw_selectors(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let metric = Paragraph::new(format!("◀ {} ▶", state.metric().label()))
        .alignment(Alignment::Center)
        .style(focus_style(state.focus() == Focus::Metric))
        .block(Block::default().title(" Dependent variable ").borders(Borders::ALL));
    frame.render_widget(metric, chunks[0]);

    let variable = Paragraph::new(format!("◀ {} ▶", state.variable().label()))
        .alignment(Alignment::Center)
        .style(focus_style(state.focus() == Focus::Variable))
        .block(Block::default().title(" Independent variable ").borders(Borders::ALL));
    frame.render_widget(variable, chunks[1]);
}

/// Draw the Call/Put tabs
pub fn draw_tabs(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let titles: Vec<Line> = OptionType::ALL.iter().map(|t| Line::from(t.title())).collect();
    let selected = OptionType::ALL
        .iter()
        .position(|&t| t == state.option_type())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(focus_style(state.focus() == Focus::OptionType))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(curve_colour(state.option_type()))
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(tabs, area);
}

/// Draw the sweep chart, or the invalid-input placeholder
pub fn draw_chart(frame: &mut Frame, area: Rect, state: &DashboardState, series: Option<&SweepSeries>) {
    let block = Block::default()
        .title(format!(" {} ", state.chart_title()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL);

    let Some((series, (x_min, x_max), (y_min, y_max))) =
        series.and_then(|s| Some((s, s.x_bounds()?, s.y_bounds()?)))
    else {
        let placeholder = Paragraph::new(INVALID_INPUT_MESSAGE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Red))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let data = series.xy();
    let datasets = vec![Dataset::default()
        .name(series.option_type.title())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(curve_colour(series.option_type)))
        .data(&data)];

    let x_labels: Vec<Span> = [x_min, (x_min + x_max) / 2.0, x_max]
        .iter()
        .map(|&v| Span::raw(format_tick(v)))
        .collect();
    let y_labels: Vec<Span> = [y_min, (y_min + y_max) / 2.0, y_max]
        .iter()
        .map(|&v| Span::raw(format_tick(v)))
        .collect();

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title(series.variable.label())
                .style(Style::default().fg(Color::Gray))
                .bounds([x_min, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(series.metric.label())
                .style(Style::default().fg(Color::Gray))
                .bounds([y_min, y_max])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// Draw the five contract inputs
pub fn draw_inputs(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(area);

    for (variable, chunk) in SweepVariable::ALL.iter().zip(chunks.iter()) {
        let focused = state.focus() == Focus::Input(*variable);
        let (text, style) = match state.input_text(*variable) {
            Some(text) => (text.to_string(), focus_style(focused)),
            None => (
                variable.label().to_string(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ),
        };
        let cursor = if focused { "▏" } else { "" };
        let input = Paragraph::new(format!("{}{}", text, cursor))
            .style(style)
            .block(
                Block::default()
                    .title(format!(" {} ", variable.symbol()))
                    .borders(Borders::ALL),
            );
        frame.render_widget(input, *chunk);
    }
}

/// Draw the range slider and its prompt
pub fn draw_range(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let bounds = state.range_bounds();
    let window = state.range();
    let width = area.width.saturating_sub(4) as usize;

    let handle = |focus: Focus, value: f64| {
        Span::styled(format_tick(value), focus_style(state.focus() == focus))
    };

    let lines = vec![
        Line::from(state.range_prompt()).alignment(Alignment::Center),
        Line::from(Span::styled(
            slider_bar(bounds, window, width),
            Style::default().fg(curve_colour(state.option_type())),
        )),
        Line::from(vec![
            Span::raw(format!("{}  ", format_tick(bounds.start))),
            handle(Focus::RangeStart, window.start),
            Span::raw(" – "),
            handle(Focus::RangeEnd, window.end),
            Span::raw(format!("  {}", format_tick(bounds.end))),
        ])
        .alignment(Alignment::Center),
    ];

    let range = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(range, area);
}

/// Draw footer with keybindings
pub fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer_text =
        " [Tab]Next [Shift+Tab]Prev | [Left/Right]Change | [0-9.-]Edit | [i]Information | [q]Quit ";
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

/// Body of the information panel
pub fn information_text() -> Vec<Line<'static>> {
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
    };
    let bold = |text: &'static str| {
        Line::from(Span::styled(text, Style::default().add_modifier(Modifier::BOLD)))
    };

    let mut lines = vec![
        heading("About this app"),
        Line::from(""),
        Line::from(
            "This is a visualisation tool for the Black-Scholes model for option contracts. \
             You can explore how option values and Greeks change when adjusting inputs.",
        ),
        Line::from(""),
        Line::from(
            "An option contract is a financial derivative that gives the owner the right \
             to buy/sell (call/put) an underlying item for a prespecified price (strike) at \
             a prespecified time.",
        ),
        Line::from(""),
        heading("Parameters"),
        bold("• S – Stock Price: Current price of the underlying stock"),
        bold("• K – Strike Price: Price at which the owner can buy/sell"),
        bold("• r – Interest Rate: Rate at which you can borrow risk free"),
        bold("• σ – Volatility: A measure of how 'noisy' or 'calm' the underlying is expected to be"),
        bold("• T – Time to Expiry: Time until maturity of the contract"),
        Line::from(""),
        heading("Greeks"),
    ];
    lines.extend(
        OutputMetric::ALL
            .iter()
            .filter_map(|m| greek_description(*m))
            .map(Line::from),
    );
    lines.extend([
        Line::from(""),
        Line::from(
            "Use the selectors at the top to choose your independent and dependent variables, \
             and the controls at the bottom to vary inputs and visualise how the model behaves.",
        ),
    ]);
    lines
}

fn greek_description(metric: OutputMetric) -> Option<&'static str> {
    match metric {
        OutputMetric::Value => None,
        OutputMetric::Delta => Some("• Delta – Sensitivity to underlying price"),
        OutputMetric::Gamma => Some("• Gamma – Sensitivity of Delta to price"),
        OutputMetric::Vega => Some("• Vega – Sensitivity to volatility"),
        OutputMetric::Theta => Some("• Theta – Time decay"),
        OutputMetric::Rho => Some("• Rho – Sensitivity to interest rate"),
    }
}

/// Draw the information panel over the left part of `area`
pub fn draw_information(frame: &mut Frame, area: Rect) {
    let width = (area.width / 2).max(40).min(area.width);
    let panel = Rect::new(area.x, area.y, width, area.height);

    let info = Paragraph::new(information_text())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Information ")
                .borders(Borders::ALL)
                .style(Style::default().bg(Color::Black)),
        );
    frame.render_widget(Clear, panel);
    frame.render_widget(info, panel);
}
