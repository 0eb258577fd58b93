use std::sync::{Arc, Mutex};
use steply_mask::config::FieldConfig;
use steply_mask::input::MaskEditor;
use steply_mask::mask::{LiteralMode, PatternCache, apply, compile};
use steply_mask::terminal::{KeyCode, KeyEvent};
use steply_mask::validation::{
    ReportChannel, Trigger, ValidationConfig, ValidationReporter, ValidatorRegistry, validators,
};
use steply_mask::MaskedInput;

fn formatted(pattern: &str, candidate: &str) -> (Option<String>, String) {
    let output = apply(&compile(pattern), candidate, LiteralMode::Lazy);
    (output.raw, output.formatted)
}

#[test]
fn phone_number_from_clean_and_noisy_input() {
    assert_eq!(
        formatted("(###) ###-####", "1234567890"),
        (Some("1234567890".to_string()), "(123) 456-7890".to_string())
    );
    assert_eq!(
        formatted("(###) ###-####", "123abc456"),
        (Some("123456".to_string()), "(123) 456".to_string())
    );
}

#[test]
fn mixed_class_pattern() {
    assert_eq!(formatted("AA-##-**", "AB12XY").1, "AB-12-XY");
    assert_eq!(formatted("AA-##-**", "1AB2").1, "AB-2");
}

#[test]
fn separator_modes_on_partial_dates() {
    let pattern = compile("##/##");
    assert_eq!(apply(&pattern, "1225", LiteralMode::Lazy).formatted, "12/25");
    assert_eq!(apply(&pattern, "12", LiteralMode::Lazy).formatted, "12");
    assert_eq!(apply(&pattern, "12", LiteralMode::Eager).formatted, "12/");
}

#[test]
fn typed_cpf_reports_through_callback() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let config = ValidationConfig::key(validators::BRAZILIAN_CPF)
        .with_trigger(Trigger::Both)
        .report_as(ReportChannel::Callback(Box::new(move |valid: bool| {
            sink.lock().expect("lock").push(valid);
        })));
    let reporter = ValidationReporter::new(config, &ValidatorRegistry::default());
    let input = MaskedInput::from_source(&mut PatternCache::new(), "BRAZILIAN_CPF")
        .with_validation(reporter);
    let mut editor = MaskEditor::new(input);

    for ch in "14550200286".chars() {
        editor.on_key(KeyEvent::plain(KeyCode::Char(ch)));
    }
    editor.on_key(KeyEvent::plain(KeyCode::Enter));

    let input = editor.into_input();
    assert_eq!(input.formatted(), "145.502.002-86");
    assert_eq!(input.raw(), Some("14550200286"));

    let seen = seen.lock().expect("lock");
    assert_eq!(seen.len(), 12);
    assert!(seen[..10].iter().all(|valid| !valid));
    assert_eq!(&seen[10..], &[true, true]);
}

#[test]
fn change_and_commit_callbacks_see_absence_marker() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let on_input = Arc::clone(&log);
    let on_change = Arc::clone(&log);
    let mut input = MaskedInput::from_source(&mut PatternCache::new(), "ZIP_US")
        .with_on_input(move |raw, formatted| {
            on_input
                .lock()
                .expect("lock")
                .push(format!("input {raw:?} {formatted}"));
        })
        .with_on_change(move |raw, formatted| {
            on_change
                .lock()
                .expect("lock")
                .push(format!("change {raw:?} {formatted}"));
        });

    input.input("12a");
    input.input("abc");
    input.commit();

    let log = log.lock().expect("lock");
    assert_eq!(
        *log,
        vec![
            "input Some(\"12\") 12".to_string(),
            "input None ".to_string(),
            "change None ".to_string(),
        ]
    );
}

#[test]
fn yaml_field_drives_a_session() {
    let yaml = r###"
pattern: "##:## AM"
label: Time
mask_char: "."
value: "0930PM"
validators:
  MORNING: '^\d{4}A$'
validation:
  validator: MORNING
  report_as: state
  trigger: commit
"###;
    let field = FieldConfig::from_yaml_str(yaml).expect("config");
    let mut input = field
        .build_input(&mut PatternCache::new(), None)
        .expect("input");
    assert_eq!(input.formatted(), "09:30 PM");
    assert_eq!(input.placeholder(), "..:.. .M");

    input.commit();
    let reporter = input.validation().expect("validation");
    assert!(reporter.is_invalid());
    assert_eq!(reporter.state_class(), Some("invalid"));

    input.change("0930A");
    assert_eq!(input.formatted(), "09:30 AM");
    assert!(input.validation().expect("validation").is_valid());
}
