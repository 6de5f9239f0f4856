use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::{
    app::{App, LoadState},
    drawer::{DrawerField, TodoDrawer},
};
use crate::application::section_service::SectionService;
use crate::domain::{
    dates,
    todo::{Priority, Todo, TodoSection},
};

const HELP: &str = "←/→ section  ↑/↓ todo  space done  e edit  a add todo  D delete section  f filters  s sort  p priority  n new section  r refresh  q quit";

pub fn draw<S: SectionService>(f: &mut Frame, app: &App<S>) {
    match &app.load_state {
        LoadState::Loading => draw_centered(f, "Loading…", Style::default()),
        LoadState::Failed(message) => draw_centered(f, &format!("Error: {message}"), Style::default().fg(Color::LightRed)),
        LoadState::Ready => draw_sections(f, app),
    }
}

fn draw_centered(f: &mut Frame, text: &str, style: Style) {
    let area = f.size();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Length(1), Constraint::Min(0)])
        .split(area);
    f.render_widget(Paragraph::new(Span::styled(text.to_string(), style)).alignment(Alignment::Center), rows[1]);
}

fn draw_sections<S: SectionService>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(4), Constraint::Min(3), Constraint::Length(3)])
        .split(f.size());

    let heading = Paragraph::new(Span::styled("TODO LIST", Style::default().add_modifier(Modifier::BOLD)))
        .alignment(Alignment::Center);
    f.render_widget(heading, chunks[0]);

    draw_section_input(f, app, chunks[1]);

    if app.sections.is_empty() {
        let empty = Paragraph::new("No sections yet. Press n to add one.")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, chunks[2]);
    } else {
        let n = app.sections.len() as u32;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..n).map(|_| Constraint::Ratio(1, n)).collect::<Vec<_>>())
            .split(chunks[2]);
        for (idx, (section, area)) in app.sections.iter().zip(columns.iter()).enumerate() {
            draw_section_card(f, app, section, idx == app.selected_section, *area);
        }
    }

    let footer = match &app.status {
        Some(message) => Line::from(Span::styled(message.clone(), Style::default().fg(Color::LightRed))),
        None => Line::from(Span::styled(HELP, Style::default().fg(Color::Gray))),
    };
    f.render_widget(Paragraph::new(footer).block(Block::default().borders(Borders::ALL).title("info")), chunks[3]);

    if app.drawer.is_open() {
        draw_drawer(f, &app.drawer);
    }
}

fn draw_section_input<S: SectionService>(f: &mut Frame, app: &App<S>, area: Rect) {
    let input = &app.section_input;
    let value = if input.focused {
        format!("{}_", input.value)
    } else if input.value.is_empty() {
        "Add title section (n)".to_string()
    } else {
        input.value.clone()
    };
    let mut lines = vec![Line::from(value)];
    if let Some(error) = &input.error {
        lines.push(Line::from(Span::styled(error.clone(), Style::default().fg(Color::LightRed))));
    }
    let border = if input.focused { Style::default().fg(Color::Cyan) } else { Style::default() };
    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).border_style(border).title("new section"));
    f.render_widget(widget, area);
}

fn draw_section_card<S: SectionService>(f: &mut Frame, app: &App<S>, section: &TodoSection, selected: bool, area: Rect) {
    let options = app.view_options(&section.id);
    let border = if selected { Style::default().fg(Color::Cyan) } else { Style::default() };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(section.title.clone(), Style::default().add_modifier(Modifier::BOLD)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (filters_area, list_area) = if options.show_filters {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);
        (Some(rows[0]), rows[1])
    } else {
        (None, inner)
    };

    if let Some(filters_area) = filters_area {
        let filter = options.filter.map(Priority::label).unwrap_or("All options");
        let line = format!("Sort: {}  Filter: {}", options.sort.label(), filter);
        f.render_widget(Paragraph::new(Span::styled(line, Style::default().fg(Color::Yellow))), filters_area);
    }

    let items: Vec<ListItem> = app.visible(section).into_iter().map(todo_item).collect();
    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if selected && app.current_todo().is_some() {
        state.select(Some(app.selected_todo));
    }
    f.render_stateful_widget(list, list_area, &mut state);
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Blue,
        Priority::Low => Color::Green,
    }
}

fn todo_item(todo: &Todo) -> ListItem<'static> {
    let checkbox = if todo.is_done { "[x] " } else { "[ ] " };
    let tag = Span::styled(
        format!(" {} ", todo.priority),
        Style::default().bg(priority_color(todo.priority)).fg(Color::White),
    );
    let deadline = dates::timestamp_to_date_string(Some(todo.deadline)).unwrap_or_default();
    let lines = vec![
        Line::from(vec![
            Span::raw(checkbox),
            Span::styled(todo.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            tag,
        ]),
        Line::from(format!("    {}", todo.description)),
        Line::from(Span::styled(format!("    Deadline: {deadline}"), Style::default().fg(Color::Gray))),
    ];
    let style = if todo.is_done { Style::default().add_modifier(Modifier::DIM) } else { Style::default() };
    ListItem::new(Text::from(lines)).style(style)
}

fn draw_drawer(f: &mut Frame, drawer: &TodoDrawer) {
    let area = f.size();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);
    let panel = columns[1];

    let mut lines = Vec::new();
    for field in DrawerField::ALL {
        let active = drawer.field == field;
        let label_style = if active { Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD) } else { Style::default() };
        lines.push(Line::from(Span::styled(field.label(), label_style)));
        let value = match field {
            DrawerField::Name => drawer.input.name.clone(),
            DrawerField::Description => drawer.input.description.clone(),
            DrawerField::Deadline => drawer.input.deadline.clone(),
            DrawerField::Priority => Priority::ALL
                .iter()
                .map(|p| if Some(*p) == drawer.input.priority { format!("(•) {p}") } else { format!("( ) {p}") })
                .collect::<Vec<_>>()
                .join("  "),
        };
        let caret = if active && field != DrawerField::Priority { "_" } else { "" };
        lines.push(Line::from(format!("  {value}{caret}")));
        if let Some(error) = drawer.error_for(field) {
            lines.push(Line::from(Span::styled(format!("  {error}"), Style::default().fg(Color::LightRed))));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Tab/Shift-Tab move • ←/→ priority • Enter submit • Esc cancel",
        Style::default().fg(Color::Gray),
    )));

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(Span::styled(drawer.title(), Style::default().add_modifier(Modifier::BOLD))),
        );
    f.render_widget(Clear, panel);
    f.render_widget(widget, panel);
}
