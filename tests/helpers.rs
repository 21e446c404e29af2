use lapwatch::clamp;
use lapwatch::input::{is_affirmative, parse_command, Command};
use lapwatch::{AppEvent, KeyCombo, Modifiers};

#[test]
fn clamp_keeps_inner_value() {
    assert_eq!(clamp(0.5, 0.2, 1.0), 0.5);
}

#[test]
fn clamp_limits_low_and_high() {
    assert_eq!(clamp(0.1, 0.2, 1.0), 0.2);
    assert_eq!(clamp(2.0, 0.2, 1.0), 1.0);
}

#[test]
fn key_combo_parses_full_names() {
    let combo: KeyCombo = "command+shift+s".parse().expect("valid combo");
    assert_eq!(
        combo,
        KeyCombo::new(
            's',
            Modifiers {
                command: true,
                shift: true,
                ..Modifiers::default()
            }
        )
    );
}

#[test]
fn key_combo_accepts_bare_key() {
    let combo: KeyCombo = "F".parse().expect("valid combo");
    assert_eq!(combo.key(), 'f');
    assert!(combo.modifiers().is_empty());
    assert_eq!(combo.to_string(), "f");
}

#[test]
fn key_combo_display_orders_modifiers() {
    let combo: KeyCombo = "cmd+alt+ctrl+shift+k".parse().expect("valid combo");
    assert_eq!(combo.to_string(), "ctrl+alt+shift+cmd+k");
}

#[test]
fn parse_is_case_insensitive() {
    assert_eq!(
        parse_command("  STOP "),
        Ok(Command::Event(AppEvent::Stop))
    );
    assert_eq!(parse_command("?"), Ok(Command::Help));
}

#[test]
fn affirmative_answers() {
    for answer in ["y", "Y", "yes", " YES "] {
        assert!(is_affirmative(answer), "{answer}");
    }
    for answer in ["", "n", "no", "yep"] {
        assert!(!is_affirmative(answer), "{answer}");
    }
}
