use crossterm::event::Event;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui_fields::keymap;
use ratatui_fields::prelude::*;
use std::io;
use std::time::Duration;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Focus {
    Name,
    Kind,
}

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal);

    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Some((name, kind)) = res? {
        println!("name = {name:?}");
        println!("kind = {kind:?}");
    }
    Ok(())
}

/// Returns the final values on submit, or `None` when the user quits.
fn run<B: Backend>(terminal: &mut Terminal<B>) -> io::Result<Option<(String, Option<String>)>> {
    let theme = Theme::default();
    let kinds = SelectOptions::new([
        SelectOption::new("bug", "Bug"),
        SelectOption::new("feature", "Feature request"),
        SelectOption::new("question", "Question"),
    ])
    .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let mut name = Editable::new("", Required, |value| TextFieldProps {
        value: value.to_string(),
        label: Some("Title".to_string()),
        placeholder: Some("short summary".to_string()),
        ..Default::default()
    });
    let mut kind = Selectable::new(kinds, "", Optional, |selected, options| PickerProps {
        options: options.clone(),
        selected_key: selected.to_string(),
        label: Some("Kind".to_string()),
        placeholder: Some("(unset)".to_string()),
        ..Default::default()
    });

    let mut name_field = TextField::from_props(name.props());
    let mut kind_picker = Picker::from_props(kind.props());
    let mut focus = Focus::Name;

    loop {
        terminal.draw(|f| {
            let area = f.area();
            let [main, status] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .areas(area);

            let block = Block::default()
                .title("Form (Tab switch, Enter submit, Esc quit)")
                .borders(Borders::ALL);
            let inner = block.inner(main);
            f.render_widget(block, main);

            let [name_row, kind_row] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Length(1)])
                .areas(inner);

            name_field.render_ref(name_row, f.buffer_mut(), &theme);
            kind_picker.render_ref(kind_row, f.buffer_mut(), &theme);
            if focus == Focus::Name {
                if let Some(pos) = name_field.cursor_pos(name_row) {
                    f.set_cursor_position(pos);
                }
            }

            let help = match focus {
                Focus::Name => keymap::help_line([
                    &name_field.keys().submit,
                    &name_field.keys().clear,
                ]),
                Focus::Kind => keymap::help_line([
                    &kind_picker.keys().next,
                    &kind_picker.keys().prev,
                    &kind_picker.keys().clear,
                ]),
            };
            let status_line = format!(
                "title={:?}  kind={:?}  {help}",
                name.final_value(),
                kind.final_value()
            );
            let span = Span::styled(status_line, theme.placeholder);
            f.buffer_mut()
                .set_span(status.x, status.y, &span, status.width);
        })?;

        if !crossterm::event::poll(Duration::from_millis(50))? {
            continue;
        }
        let ev: Event = crossterm::event::read()?;
        let Ok(ev) = InputEvent::try_from(ev) else {
            continue;
        };

        if let InputEvent::Key(key) = &ev {
            match key.code {
                KeyCode::Esc => return Ok(None),
                KeyCode::Tab | KeyCode::BackTab => {
                    focus = match focus {
                        Focus::Name => Focus::Kind,
                        Focus::Kind => Focus::Name,
                    };
                    continue;
                }
                _ => {}
            }
        }

        match focus {
            Focus::Name => match name_field.input(ev) {
                TextFieldAction::Submitted(_) => {
                    return Ok(Some((name.final_value(), kind.final_value())));
                }
                action => {
                    name.handle_action(&action);
                    name_field.apply_props(name.props());
                }
            },
            Focus::Kind => {
                let action = kind_picker.input(ev);
                kind.handle_action(&action);
                kind_picker.apply_props(kind.props());
            }
        }
    }
}
