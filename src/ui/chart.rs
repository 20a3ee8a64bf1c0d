use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame, Terminal,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::io;

use crate::models::month_name;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

const Y_AXIS_LABEL: &str = "Total Amount (in currency)";

/// A titled series of labelled totals, ready to draw as bars.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ChartData {
    pub(crate) title: String,
    pub(crate) x_label: &'static str,
    pub(crate) bars: Vec<(String, Decimal)>,
    pub(crate) color: Color,
}

pub(crate) fn yearly_chart(totals: &BTreeMap<i32, Decimal>) -> ChartData {
    ChartData {
        title: "Yearly Remittance Amount".into(),
        x_label: "Year",
        bars: totals
            .iter()
            .map(|(year, amount)| (year.to_string(), *amount))
            .collect(),
        color: theme::YEAR_BAR,
    }
}

/// `None` when the year has no data, so callers can report that instead of
/// drawing an empty chart.
pub(crate) fn monthly_chart(year: i32, totals: &BTreeMap<i32, Decimal>) -> Option<ChartData> {
    if totals.is_empty() {
        return None;
    }
    Some(ChartData {
        title: format!("Monthly Remittance for {year}"),
        x_label: "Month",
        bars: totals
            .iter()
            .map(|(month, amount)| (month_name(*month).to_string(), *amount))
            .collect(),
        color: theme::MONTH_BAR,
    })
}

pub(crate) fn draw(f: &mut Frame, area: Rect, chart: &ChartData) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    let width = bar_width(chunks[0].width, chart.bars.len());
    let bars: Vec<Bar> = chart
        .bars
        .iter()
        .map(|(label, amount)| {
            Bar::default()
                .value(bar_value(*amount))
                .text_value(format_amount(*amount))
                .label(Line::from(truncate(label, width as usize)))
                .style(Style::default().fg(chart.color))
                .value_style(theme::value_style())
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(Span::styled(format!(" {} ", chart.title), theme::title_style()))
        .title_bottom(Line::from(Span::styled(
            format!(" x: {}  y: {Y_AXIS_LABEL} ", chart.x_label),
            theme::dim_style(),
        )));

    let widget = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(width)
        .bar_gap(1)
        .bar_style(Style::default().fg(chart.color))
        .value_style(theme::value_style());
    f.render_widget(widget, chunks[0]);

    let hint = Paragraph::new(Line::from(Span::styled(
        "Press any key to return",
        theme::dim_style(),
    )))
    .centered();
    f.render_widget(hint, chunks[1]);
}

/// Show `chart` full-screen until a key is pressed.
pub(crate) fn show(chart: &ChartData) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = wait_for_key(&mut terminal, chart);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn wait_for_key(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    chart: &ChartData,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, f.area(), chart))?;
        if let Event::Key(_) = event::read()? {
            return Ok(());
        }
    }
}

/// Bars are drawn at whole-unit resolution; negative totals draw as empty.
fn bar_value(amount: Decimal) -> u64 {
    match amount.round().to_u64() {
        Some(v) => v,
        None if amount > Decimal::ZERO => u64::MAX,
        None => 0,
    }
}

/// Spread the bars across the chart, between 3 and 12 cells wide each.
fn bar_width(area_width: u16, bars: usize) -> u16 {
    let inner = area_width.saturating_sub(2);
    let n = u16::try_from(bars.max(1)).unwrap_or(u16::MAX);
    (inner / n).saturating_sub(1).clamp(3, 12)
}
