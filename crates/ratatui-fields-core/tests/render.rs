use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui_fields_core::editable::Editable;
use ratatui_fields_core::input::InputEvent;
use ratatui_fields_core::input::KeyCode;
use ratatui_fields_core::picker::Picker;
use ratatui_fields_core::picker::PickerProps;
use ratatui_fields_core::requirement::Dynamic;
use ratatui_fields_core::selectable::SelectOption;
use ratatui_fields_core::selectable::SelectOptions;
use ratatui_fields_core::selectable::Selectable;
use ratatui_fields_core::text_field::TextField;
use ratatui_fields_core::text_field::TextFieldProps;
use ratatui_fields_core::theme::Theme;

const WIDTH: u16 = 24;

fn row(buf: &Buffer) -> String {
    (0..buf.area.width)
        .map(|x| buf[(x, 0)].symbol().to_string())
        .collect::<String>()
        .trim_end()
        .to_string()
}

fn editable(is_required: bool) -> Editable<Dynamic, impl Fn(&str) -> TextFieldProps> {
    Editable::new("initialValue", Dynamic(is_required), |value| TextFieldProps {
        value: value.to_string(),
        label: Some("Name".to_string()),
        ..Default::default()
    })
}

fn draw_text_field(field: &mut TextField) -> String {
    let area = Rect::new(0, 0, WIDTH, 1);
    let mut buf = Buffer::empty(area);
    field.render_ref(area, &mut buf, &Theme::default());
    row(&buf)
}

#[test]
fn required_text_field_shows_marker_and_value() {
    let binding = editable(true);
    let mut widget = TextField::from_props(binding.props());
    assert!(widget.is_required());
    assert_eq!(draw_text_field(&mut widget), "Name *: initialValue");
}

#[test]
fn optional_text_field_has_no_marker() {
    let binding = editable(false);
    let mut widget = TextField::from_props(binding.props());
    assert!(!widget.is_required());
    assert_eq!(draw_text_field(&mut widget), "Name: initialValue");
}

#[test]
fn typing_flows_back_through_binding() {
    let mut binding = editable(false);
    let mut widget = TextField::from_props(binding.props());

    widget.input(InputEvent::Key(ratatui_fields_core::keymap::key_ctrl('u')));
    for ev in InputEvent::chars("changedValue") {
        let action = widget.input(ev);
        binding.handle_action(&action);
        widget.apply_props(binding.props());
    }

    assert_eq!(binding.raw_value(), "changedValue");
    assert_eq!(widget.value(), "changedValue");
    assert_eq!(draw_text_field(&mut widget), "Name: changedValue");
}

#[test]
fn cleared_optional_field_shows_placeholder_and_is_none() {
    let mut binding = Editable::new("x", Dynamic(false), |value| TextFieldProps {
        value: value.to_string(),
        label: Some("Name".to_string()),
        placeholder: Some("(none)".to_string()),
        ..Default::default()
    });
    let mut widget = TextField::from_props(binding.props());
    let action = widget.input(InputEvent::key(KeyCode::Backspace));
    assert!(binding.handle_action(&action));
    widget.apply_props(binding.props());

    assert_eq!(binding.final_value(), None);
    assert_eq!(draw_text_field(&mut widget), "Name: (none)");
}

fn selectable(
    is_required: bool,
) -> Selectable<Dynamic, impl Fn(&str, &SelectOptions) -> PickerProps> {
    let options = SelectOptions::new([
        SelectOption::new("a", "Alpha"),
        SelectOption::new("b", "Beta"),
        SelectOption::new("c", "Gamma"),
    ])
    .expect("unique keys");
    Selectable::new(options, "a", Dynamic(is_required), |selected, options| PickerProps {
        options: options.clone(),
        selected_key: selected.to_string(),
        label: Some("Kind".to_string()),
        placeholder: Some("-".to_string()),
        ..Default::default()
    })
}

fn draw_picker(picker: &Picker) -> String {
    let area = Rect::new(0, 0, WIDTH, 1);
    let mut buf = Buffer::empty(area);
    picker.render_ref(area, &mut buf, &Theme::default());
    row(&buf)
}

#[test]
fn picker_shows_label_of_selected_key() {
    let binding = selectable(true);
    let picker = Picker::from_props(binding.props());
    assert_eq!(draw_picker(&picker), "Kind *: ‹ Alpha ›");
}

#[test]
fn picker_selection_flows_back_through_binding() {
    let mut binding = selectable(false);
    let mut picker = Picker::from_props(binding.props());

    let action = picker.input(InputEvent::key(KeyCode::Down));
    assert!(binding.handle_action(&action));
    picker.apply_props(binding.props());
    assert_eq!(binding.final_value().as_deref(), Some("b"));
    assert_eq!(draw_picker(&picker), "Kind: ‹ Beta ›");

    let action = picker.input(InputEvent::key(KeyCode::Delete));
    assert!(binding.handle_action(&action));
    picker.apply_props(binding.props());
    assert_eq!(binding.final_value(), None);
    assert_eq!(draw_picker(&picker), "Kind: -");
}

#[test]
fn picker_shows_unknown_key_verbatim() {
    let mut binding = selectable(true);
    binding.set("zz");
    let picker = Picker::from_props(binding.props());
    assert_eq!(draw_picker(&picker), "Kind *: ‹ zz ›");
}
