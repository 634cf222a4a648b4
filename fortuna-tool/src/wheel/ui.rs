use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::app::{AppMode, WheelApp};

pub fn render(frame: &mut Frame, app: &WheelApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Tab bar
            Constraint::Min(1),    // Main area
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_tabs(frame, app, chunks[1]);
    render_main(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);

    if app.mode == AppMode::Winner {
        render_winner_popup(frame, app);
    }
}

fn render_header(frame: &mut Frame, app: &WheelApp, area: Rect) {
    let location_text = match (&app.location_warning, app.location) {
        (Some(warning), _) => {
            Span::styled(format!("  {warning}"), Style::default().fg(Color::Yellow))
        }
        (None, Some(_)) => Span::styled("  GPS 定位成功", Style::default().fg(Color::Green)),
        (None, None) if app.is_locating() => {
            Span::styled("  定位中...", Style::default().fg(Color::DarkGray))
        }
        (None, None) => Span::raw(""),
    };

    let header = Line::from(vec![
        Span::styled(
            "fortuna 命運轉盤",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        location_text,
    ]);

    frame.render_widget(Paragraph::new(header), area);
}

fn render_tabs(frame: &mut Frame, app: &WheelApp, area: Rect) {
    let active = app.active_tab();
    let tab_style = |tab: AppMode| {
        if tab == active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    let tabs = Line::from(vec![
        Span::styled(" 手動輸入 ", tab_style(AppMode::Manual)),
        Span::raw("│"),
        Span::styled(" GPS 搜尋附近 ", tab_style(AppMode::Search)),
    ]);

    frame.render_widget(Paragraph::new(tabs), area);
}

fn render_main(frame: &mut Frame, app: &WheelApp, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(1)])
        .split(area);

    render_options(frame, app, columns[0]);

    match app.active_tab() {
        AppMode::Search => render_search(frame, app, columns[1]),
        _ => render_manual(frame, app, columns[1]),
    }
}

fn render_options(frame: &mut Frame, app: &WheelApp, area: Rect) {
    let items: Vec<ListItem> = app
        .options
        .iter()
        .map(|option| ListItem::new(option.text.clone()))
        .collect();

    let title = format!("已選項目 ({})", app.options.len());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ratatui::widgets::ListState::default();
    if !app.options.is_empty() {
        state.select(Some(app.option_selected.min(app.options.len() - 1)));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_manual(frame: &mut Frame, app: &WheelApp, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    render_input_box(
        frame,
        rows[0],
        "新增選項",
        &app.entry,
        app.entry_cursor,
        "輸入選項名稱...",
        app.mode == AppMode::Manual,
    );

    let mut lines = vec![Line::from("在此輸入自訂選項，Enter 加入轉盤。")];
    if app.options.len() < 2 {
        lines.push(Line::from(Span::styled(
            "至少需要兩個選項才能轉動。",
            Style::default().fg(Color::DarkGray),
        )));
    }
    if app.mode == AppMode::Spinning {
        lines.push(Line::from(Span::styled(
            "轉動中...",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
        )));
    }
    if let Some(ref error) = app.last_error {
        lines.push(Line::from(Span::styled(
            format!("Error: {error}"),
            Style::default().fg(Color::Red),
        )));
    }

    let hint = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    frame.render_widget(hint, rows[1]);
}

fn render_search(frame: &mut Frame, app: &WheelApp, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let placeholder = if app.location.is_some() {
        "輸入關鍵字 (例: 飲料, 7-11)"
    } else {
        "定位後即可搜尋..."
    };
    render_input_box(
        frame,
        rows[0],
        "搜尋附近地點",
        &app.keyword,
        app.keyword_cursor,
        placeholder,
        app.mode == AppMode::Search,
    );

    if app.is_searching() {
        let searching = Paragraph::new(Span::styled(
            "正在搜尋 OpenStreetMap 資料...",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
        ))
        .block(Block::default().borders(Borders::ALL).title("結果"));
        frame.render_widget(searching, rows[1]);
        return;
    }

    if let Some(ref error) = app.last_error {
        let error_text = Paragraph::new(vec![
            Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )),
            Line::from(Span::styled(
                "Enter: 重試",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(Block::default().borders(Borders::ALL).title("結果"))
        .wrap(Wrap { trim: false });
        frame.render_widget(error_text, rows[1]);
        return;
    }

    let items: Vec<ListItem> = app
        .results
        .iter()
        .map(|place| {
            let mut lines = vec![Line::from(vec![
                Span::styled(place.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("  {}", place.distance_label),
                    Style::default().fg(Color::Cyan),
                ),
            ])];
            if !place.address.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {}", place.address),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines.push(Line::from(Span::styled(
                format!("  {}", place.maps_url()),
                Style::default().fg(Color::DarkGray),
            )));
            ListItem::new(lines)
        })
        .collect();

    let title = if app.results.is_empty() {
        "結果（輸入關鍵字搜尋 5km 內的地點）".to_string()
    } else {
        format!("結果 ({})  資料來源: OpenStreetMap", app.results.len())
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ratatui::widgets::ListState::default();
    if !app.results.is_empty() {
        state.select(Some(app.result_selected.min(app.results.len() - 1)));
    }

    frame.render_stateful_widget(list, rows[1], &mut state);
}

fn render_input_box(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    cursor: usize,
    placeholder: &str,
    focused: bool,
) {
    let block = Block::default().borders(Borders::ALL).title(title.to_string());

    let (text, style) = if value.is_empty() {
        (placeholder.to_string(), Style::default().fg(Color::DarkGray))
    } else {
        (value.to_string(), Style::default())
    };

    frame.render_widget(Paragraph::new(text).style(style).block(block), area);

    if focused {
        let cursor_x = area.x + 1 + value[..cursor].chars().count() as u16;
        frame.set_cursor_position((cursor_x, area.y + 1));
    }
}

fn render_status_bar(frame: &mut Frame, app: &WheelApp, area: Rect) {
    let status = match app.mode {
        AppMode::Manual => {
            "Enter: 新增  ↑/↓: 選擇  Del: 刪除  Ctrl+X: 清空  Tab: 切換  F2: 轉動  Esc: 離開"
        }
        AppMode::Search => {
            "Enter: 搜尋  ↑/↓: 選擇  F4: 加入轉盤  F5: 重新定位  Tab: 切換  F2: 轉動  Esc: 離開"
        }
        AppMode::Spinning => "轉動中...",
        AppMode::Winner => "Enter: 再轉一次  Esc: 關閉",
    };

    let status_bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status_bar, area);
}

fn render_winner_popup(frame: &mut Frame, app: &WheelApp) {
    let Some(winner) = app.engine.winner() else {
        return;
    };

    let area = centered_rect(40, 30, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "命運的選擇是...",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            winner.text.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
    ];

    let popup = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title("結果"))
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: false });

    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
