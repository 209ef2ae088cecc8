use std::cmp::min;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use daypulse_core::model::{Mood, PaletteKey};
use daypulse_core::view;

use crate::tui::constants::APP_VERSION;
use crate::tui::helpers::{
    accent_title, build_help_lines, centered_rect, inset_rect, palette_color, UiPalette,
};

use super::{App, Focus, GoalFormField, InputMode, ToastKind};
use crate::tui::buffer::TextBuffer;

/// Shows the terminal cursor inside a single-line input field.
fn place_cursor(f: &mut Frame<'_>, field: Rect, buffer: &TextBuffer) {
    if field.width == 0 || field.height == 0 {
        return;
    }
    let col = (buffer.cursor_col() as u16).min(field.width.saturating_sub(1));
    f.set_cursor(field.x + col, field.y);
}

impl App {
    pub(crate) fn draw(&mut self, f: &mut Frame<'_>) {
        let palette = UiPalette::for_theme(self.theme);
        let accent = palette_color(self.color_variant);

        let size = f.size();
        f.render_widget(Clear, size);
        f.render_widget(
            Block::default().style(Style::default().bg(palette.bg_base)),
            size,
        );
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(10),
                Constraint::Length(2),
            ])
            .split(size);

        self.draw_header(f, chunks[0], &palette, accent);
        self.draw_body(f, chunks[1], &palette, accent);
        self.draw_footer(f, chunks[2], &palette, accent);

        match self.input_mode {
            InputMode::AddGoal => self.draw_goal_form_overlay(f, size, &palette, accent),
            InputMode::AddTask => self.draw_task_form_overlay(f, size, &palette, accent),
            InputMode::EditGoal => self.draw_edit_overlay(f, size, &palette, accent),
            InputMode::Help => self.draw_help_overlay(f, size, &palette, accent),
            InputMode::Normal => {}
        }
    }

    fn draw_header(&self, f: &mut Frame<'_>, area: Rect, palette: &UiPalette, accent: Color) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(area);

        let left_line = Line::from(vec![
            Span::styled(
                format!(" daypulse v{} ", APP_VERSION),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("— {} theme · {}", self.theme, self.color_variant),
                Style::default().fg(palette.fg_dim),
            ),
            Span::raw("  "),
            Span::styled(
                format!("💾 {}", self.config.prefs_path().display()),
                Style::default().fg(palette.fg_dim),
            ),
        ]);
        f.render_widget(
            Paragraph::new(left_line).style(Style::default().bg(palette.bg_base)),
            cols[0],
        );

        let mood = self.state.mood();
        let right_line = Line::from(vec![
            Span::styled("mood ", Style::default().fg(palette.fg_dim)),
            Span::styled(
                format!("{} {} ", mood.emoji(), mood),
                Style::default()
                    .fg(palette.fg_text)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let right_para = Paragraph::new(right_line)
            .alignment(ratatui::layout::Alignment::Right)
            .style(Style::default().bg(palette.bg_base));
        f.render_widget(right_para, cols[1]);
    }

    fn draw_body(&mut self, f: &mut Frame<'_>, area: Rect, palette: &UiPalette, accent: Color) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
            .split(area);

        self.draw_goals(f, cols[0], palette, accent);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),
                Constraint::Length(4),
                Constraint::Length(6),
            ])
            .split(cols[1]);

        self.draw_tasks(f, right[0], palette, accent);
        self.draw_mood(f, right[1], palette, accent);
        self.draw_quick_actions(f, right[2], palette, accent);
    }

    fn draw_goals(&self, f: &mut Frame<'_>, area: Rect, palette: &UiPalette, accent: Color) {
        let focused = self.focus == Focus::Goals;
        let border_style = if focused {
            Style::default().fg(accent)
        } else {
            Style::default().fg(palette.fg_dim)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title("🎯 Goals", accent))
            .border_style(border_style)
            .style(Style::default().bg(palette.bg_panel));
        let inner = block.inner(area);
        f.render_widget(Clear, area);
        f.render_widget(block, area);

        let rows = view::goal_rows(&self.state);
        if rows.is_empty() {
            let hint = Paragraph::new("No goals yet — press 'a' to add one.")
                .alignment(ratatui::layout::Alignment::Center)
                .style(Style::default().fg(palette.fg_dim).bg(palette.bg_panel));
            f.render_widget(hint, inset_rect(inner, 1));
            return;
        }

        let mut y = inner.y;
        for (idx, row) in rows.iter().enumerate() {
            // Each goal takes a header line, a gauge line, and a spacer.
            if y + 1 >= inner.y + inner.height {
                break;
            }
            let selected = focused && idx == self.goal_selected;

            let header_area = Rect {
                x: inner.x,
                y,
                width: inner.width,
                height: 1,
            };
            let title_style = if selected {
                Style::default().fg(accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.fg_text)
            };
            let header = Line::from(vec![
                Span::styled(if selected { "▶ " } else { "  " }, title_style),
                Span::styled(row.title.clone(), title_style),
                Span::styled(
                    format!("  {}/{}", row.current, row.target),
                    Style::default().fg(palette.fg_dim),
                ),
                Span::styled(
                    format!("  {}%", row.percent),
                    Style::default().fg(palette_color(row.color)),
                ),
            ]);
            f.render_widget(
                Paragraph::new(header).style(Style::default().bg(palette.bg_panel)),
                header_area,
            );

            let gauge_area = Rect {
                x: inner.x + 2,
                y: y + 1,
                width: inner.width.saturating_sub(2),
                height: 1,
            };
            let gauge = Gauge::default()
                .ratio(row.fill)
                .label(format!("{}%", row.percent))
                .gauge_style(
                    Style::default()
                        .fg(palette_color(row.color))
                        .bg(palette.bg_accent),
                );
            f.render_widget(gauge, gauge_area);

            y += 3;
        }
    }

    fn draw_tasks(&mut self, f: &mut Frame<'_>, area: Rect, palette: &UiPalette, accent: Color) {
        let focused = self.focus == Focus::Tasks;
        let border_style = if focused {
            Style::default().fg(accent)
        } else {
            Style::default().fg(palette.fg_dim)
        };
        let counter = view::task_counter(&self.state);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title(&format!("☑ Tasks  {}", counter), accent))
            .border_style(border_style)
            .style(Style::default().bg(palette.bg_panel));

        let rows = view::task_rows(&self.state);
        if rows.is_empty() {
            let inner = block.inner(area);
            f.render_widget(Clear, area);
            f.render_widget(block, area);
            let hint = Paragraph::new("No tasks yet — press 'a' to add one.")
                .alignment(ratatui::layout::Alignment::Center)
                .style(Style::default().fg(palette.fg_dim).bg(palette.bg_panel));
            f.render_widget(hint, inset_rect(inner, 1));
            return;
        }

        let items: Vec<ListItem> = rows
            .iter()
            .map(|row| {
                let (badge, style) = if row.completed {
                    (
                        "✓ ",
                        Style::default()
                            .fg(palette.fg_dim)
                            .add_modifier(Modifier::CROSSED_OUT),
                    )
                } else {
                    ("○ ", Style::default().fg(palette.fg_text))
                };
                ListItem::new(Line::from(vec![
                    Span::styled(badge, Style::default().fg(palette.fg_dim)),
                    Span::styled(row.title.clone(), style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(accent)
                    .bg(palette.bg_accent)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        f.render_stateful_widget(list, area, &mut self.task_list_state);
    }

    fn draw_mood(&self, f: &mut Frame<'_>, area: Rect, palette: &UiPalette, accent: Color) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title("Mood", accent))
            .border_style(Style::default().fg(palette.fg_dim))
            .style(Style::default().bg(palette.bg_panel));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut spans = Vec::new();
        for (idx, mood) in Mood::ALL.into_iter().enumerate() {
            let style = if self.state.mood() == mood {
                Style::default()
                    .fg(accent)
                    .bg(palette.bg_accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.fg_dim)
            };
            spans.push(Span::styled(
                format!(" {} {} ", idx + 1, mood.emoji()),
                style,
            ));
        }

        let lines = vec![
            Line::from(spans),
            Line::from(vec![Span::styled(
                "Press 1-5 to log how today feels",
                Style::default().fg(palette.fg_dim),
            )]),
        ];
        f.render_widget(
            Paragraph::new(lines).style(Style::default().bg(palette.bg_panel)),
            inner,
        );
    }

    fn draw_quick_actions(
        &self,
        f: &mut Frame<'_>,
        area: Rect,
        palette: &UiPalette,
        accent: Color,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title("⚡ Quick Actions", accent))
            .border_style(Style::default().fg(palette.fg_dim))
            .style(Style::default().bg(palette.bg_panel));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let entries = [
            ("r", "Log Reading"),
            ("w", "Log Workout"),
            ("p", "Practice Spanish"),
            ("m", "Message coach"),
        ];
        let lines: Vec<Line> = entries
            .iter()
            .map(|(key, label)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", key),
                        Style::default().fg(accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*label, Style::default().fg(palette.fg_text)),
                ])
            })
            .collect();
        f.render_widget(
            Paragraph::new(lines).style(Style::default().bg(palette.bg_panel)),
            inner,
        );
    }

    fn draw_footer(&self, f: &mut Frame<'_>, area: Rect, palette: &UiPalette, accent: Color) {
        let lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let toast_line = if let Some(toast) = &self.toast {
            let style = if toast.is_fading() {
                Style::default().fg(palette.fg_dim)
            } else {
                match toast.kind {
                    ToastKind::Info => Style::default().fg(accent),
                    ToastKind::Error => Style::default().fg(Color::Red),
                }
            };
            Line::from(vec![Span::styled(format!(" {}", toast.text), style)])
        } else {
            Line::from(vec![Span::styled(
                " Ready",
                Style::default().fg(palette.fg_dim),
            )])
        };
        f.render_widget(Paragraph::new(toast_line), lines[0]);

        let help = match self.input_mode {
            InputMode::Normal => {
                " tab panels | j/k move | enter/space edit title/toggle task | a add | e/u/t edit goal | 1-5 mood | d theme | v color | r/w/p/m actions | h help | q quit"
            }
            InputMode::AddGoal => " Tab fields • ←/→ pick color • Enter add • Esc close",
            InputMode::AddTask => " Enter to add • Esc to close",
            InputMode::EditGoal => " Enter to save • Esc to cancel",
            InputMode::Help => " Enter/Esc to close",
        };
        let help_line = Line::from(vec![Span::styled(
            help,
            Style::default().fg(palette.fg_dim),
        )]);
        f.render_widget(Paragraph::new(help_line), lines[1]);
    }

    fn draw_goal_form_overlay(
        &self,
        f: &mut Frame<'_>,
        area: Rect,
        palette: &UiPalette,
        accent: Color,
    ) {
        let width = min(area.width.saturating_sub(10), 60);
        let popup_area = centered_rect(width, 13, area);
        f.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title("➕ Add Goal", accent))
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(palette.bg_panel));
        let inner = block.inner(popup_area);
        f.render_widget(block, popup_area);

        let fields = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(inner);

        let field_block = |label: &str, active: bool| {
            let style = if active {
                Style::default().fg(accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.fg_dim)
            };
            Block::default()
                .borders(Borders::ALL)
                .title(label.to_owned())
                .border_style(style)
                .style(Style::default().bg(palette.bg_panel))
        };

        let title_block = field_block("Title", self.goal_form.active == GoalFormField::Title);
        let title_inner = title_block.inner(fields[0]);
        f.render_widget(title_block, fields[0]);
        f.render_widget(
            Paragraph::new(self.goal_form.title.as_str())
                .style(Style::default().fg(palette.fg_text).bg(palette.bg_panel)),
            title_inner,
        );

        let target_block = field_block("Target", self.goal_form.active == GoalFormField::Target);
        let target_inner = target_block.inner(fields[1]);
        f.render_widget(target_block, fields[1]);
        f.render_widget(
            Paragraph::new(self.goal_form.target.as_str())
                .style(Style::default().fg(palette.fg_text).bg(palette.bg_panel)),
            target_inner,
        );

        match self.goal_form.active {
            GoalFormField::Title => place_cursor(f, title_inner, &self.goal_form.title),
            GoalFormField::Target => place_cursor(f, target_inner, &self.goal_form.target),
            GoalFormField::Color => {}
        }

        let color_block = field_block("Color", self.goal_form.active == GoalFormField::Color);
        let color_inner = color_block.inner(fields[2]);
        f.render_widget(color_block, fields[2]);
        let mut color_spans = Vec::new();
        for key in PaletteKey::ALL {
            let chosen = self.goal_form.color == Some(key);
            let mut style = Style::default().fg(palette_color(key));
            if chosen {
                style = style.bg(palette.bg_accent).add_modifier(Modifier::BOLD);
            }
            color_spans.push(Span::styled(
                format!(" {} {} ", if chosen { '●' } else { '○' }, key),
                style,
            ));
        }
        f.render_widget(
            Paragraph::new(Line::from(color_spans)).style(Style::default().bg(palette.bg_panel)),
            color_inner,
        );

        let hint = Line::from(vec![Span::styled(
            "Tab fields • ←/→ pick color • Enter add • Esc close",
            Style::default().fg(palette.fg_dim),
        )]);
        f.render_widget(Paragraph::new(hint).wrap(Wrap { trim: true }), fields[3]);
    }

    fn draw_task_form_overlay(
        &self,
        f: &mut Frame<'_>,
        area: Rect,
        palette: &UiPalette,
        accent: Color,
    ) {
        let width = min(area.width.saturating_sub(10), 60);
        let popup_area = centered_rect(width, 5, area);
        f.render_widget(Clear, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(2)])
            .split(popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title("➕ Add Task", accent))
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(palette.bg_panel));
        let inner = block.inner(chunks[0]);
        f.render_widget(block, chunks[0]);
        f.render_widget(
            Paragraph::new(self.task_title.as_str())
                .style(Style::default().fg(palette.fg_text).bg(palette.bg_panel)),
            inner,
        );
        place_cursor(f, inner, &self.task_title);

        let hint = Line::from(vec![Span::styled(
            " Enter to add • Esc to close",
            Style::default().fg(palette.fg_dim),
        )]);
        f.render_widget(
            Paragraph::new(hint).style(Style::default().bg(palette.bg_panel)),
            chunks[1],
        );
    }

    fn draw_edit_overlay(
        &self,
        f: &mut Frame<'_>,
        area: Rect,
        palette: &UiPalette,
        accent: Color,
    ) {
        let Some(edit) = self.edit.as_ref() else {
            return;
        };
        let goal_title = self
            .state
            .goal(edit.goal_id())
            .map(|g| g.title.clone())
            .unwrap_or_else(|| String::from("goal"));

        let width = min(area.width.saturating_sub(10), 60);
        let popup_area = centered_rect(width, 6, area);
        f.render_widget(Clear, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(3)])
            .split(popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title(
                &format!("✏️ Edit {}", edit.field()),
                accent,
            ))
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(palette.bg_panel));
        let inner = block.inner(chunks[0]);
        f.render_widget(block, chunks[0]);
        f.render_widget(
            Paragraph::new(self.edit_input.as_str())
                .style(Style::default().fg(palette.fg_text).bg(palette.bg_panel)),
            inner,
        );
        place_cursor(f, inner, &self.edit_input);

        let hint_lines = vec![
            Line::from(vec![Span::styled(
                format!(" Editing '{}'", goal_title),
                Style::default().fg(palette.fg_text),
            )]),
            Line::from(vec![Span::styled(
                " Enter to save • Esc to cancel",
                Style::default().fg(palette.fg_dim),
            )]),
        ];
        f.render_widget(
            Paragraph::new(hint_lines).style(Style::default().bg(palette.bg_panel)),
            chunks[1],
        );
    }

    fn draw_help_overlay(
        &self,
        f: &mut Frame<'_>,
        area: Rect,
        palette: &UiPalette,
        accent: Color,
    ) {
        let lines = build_help_lines();
        let width = min(area.width.saturating_sub(10), 70);
        let height = min(lines.len() as u16 + 4, area.height.saturating_sub(2)).max(10);
        let popup_area = centered_rect(width, height, area);
        f.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title("⌨️ Keyboard Reference", accent))
            .border_style(Style::default().fg(palette.fg_dim))
            .style(Style::default().bg(palette.bg_panel));
        let inner = block.inner(popup_area);
        f.render_widget(block, popup_area);

        let help_lines: Vec<Line> = lines
            .into_iter()
            .map(|(combo, desc)| {
                Line::from(vec![
                    Span::styled(combo, Style::default().fg(accent)),
                    Span::raw("  "),
                    Span::styled(desc, Style::default().fg(palette.fg_text)),
                ])
            })
            .collect();

        if inner.width < 3 || inner.height < 3 {
            return;
        }

        let content = inset_rect(inner, 1);
        f.render_widget(Clear, inner);
        f.render_widget(
            Paragraph::new(help_lines)
                .wrap(Wrap { trim: true })
                .style(Style::default().bg(palette.bg_panel)),
            content,
        );
    }
}
