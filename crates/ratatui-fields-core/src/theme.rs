use ratatui::style::Style;

#[derive(Clone, Debug)]
pub struct Theme {
    pub label: Style,
    pub required_marker: Style,
    pub value: Style,
    pub placeholder: Style,
    pub accent: Style,
}

impl Default for Theme {
    fn default() -> Self {
        use ratatui::style::Stylize;

        Self {
            label: Style::default().bold(),
            required_marker: Style::default().red(),
            value: Style::default(),
            placeholder: Style::default().dark_gray().italic(),
            accent: Style::default().cyan(),
        }
    }
}
