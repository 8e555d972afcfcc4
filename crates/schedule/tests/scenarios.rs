use ce_schedule::{expand, parse, render_text, FieldDomain, FieldKind, ScheduleError};

#[test]
fn find_every_quarter_hour_on_weekdays() {
    let s = parse("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();
    let got: Vec<Vec<u32>> = s.fields().map(|(_, f)| f.values().to_vec()).collect();
    assert_eq!(
        got,
        vec![
            vec![0, 15, 30, 45],
            vec![0],
            vec![1, 15],
            (1..=12).collect::<Vec<u32>>(),
            vec![1, 2, 3, 4, 5],
        ]
    );
    assert_eq!(s.command(), "/usr/bin/find");
}

#[test]
fn minute_sixty_is_rejected() {
    assert_eq!(
        parse("60 0 1 1 1 echo invalid").unwrap_err(),
        ScheduleError::LiteralValue("60".into())
    );
}

#[test]
fn four_tokens_is_structural_error() {
    assert!(matches!(
        parse("*/5 * * *").unwrap_err(),
        ScheduleError::Structure { .. }
    ));
}

#[test]
fn seventy_is_outside_minute_domain() {
    assert_eq!(
        expand("70", FieldDomain::new(0, 59)).unwrap_err(),
        ScheduleError::LiteralValue("70".into())
    );
}

#[test]
fn first_week_of_month() {
    assert_eq!(
        expand("1-7", FieldDomain::new(1, 31)).unwrap().values(),
        &[1, 2, 3, 4, 5, 6, 7]
    );
}

#[test]
fn every_five_minutes_with_quoted_command() {
    let s = parse("*/5 * * * * /some/command --flag 'a b'").unwrap();
    assert_eq!(s.get(FieldKind::Minute).len(), 12);
    assert_eq!(s.get(FieldKind::Hour).len(), 24);
    assert_eq!(s.get(FieldKind::DayOfMonth).len(), 31);
    assert_eq!(s.get(FieldKind::Month).len(), 12);
    assert_eq!(s.get(FieldKind::DayOfWeek).len(), 7);
    assert_eq!(s.command(), "/some/command --flag 'a b'");
}

#[test]
fn error_messages_match_cli_wording() {
    let cases = [
        ("*/x * * * * c", "invalid step value: */x"),
        ("*/0 * * * * c", "invalid step value: */0"),
        ("1-2-3 * * * * c", "invalid range format: 1-2-3"),
        ("* 5-1 * * * c", "invalid range: 5-1"),
        ("* * 1,32 * * c", "invalid value: 32"),
        ("* * * jan * c", "invalid value: jan"),
    ];
    for (expr, message) in cases {
        assert_eq!(parse(expr).unwrap_err().to_string(), message, "{expr}");
    }
}

#[test]
fn every_value_stays_in_its_domain() {
    let s = parse("*/7 */5 */3 */2 * cmd").unwrap();
    for (kind, field) in s.fields() {
        let d = kind.domain();
        assert!(!field.is_empty());
        assert!(field.values().iter().all(|v| d.contains(*v)), "{kind}");
    }
}

#[test]
fn rendered_text_has_six_lines() {
    let s = parse("0 0 * * 0 weekly-report").unwrap();
    let text = render_text(&s, 14);
    assert_eq!(text.lines().count(), 6);
    assert_eq!(text.lines().last(), Some("command        weekly-report"));
}
