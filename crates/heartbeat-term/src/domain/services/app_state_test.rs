use super::*;

fn state() -> (AppState, mpsc::UnboundedReceiver<Action>, mpsc::UnboundedSender<Action>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (AppState::new(AppStateProps::default()), rx, tx)
}

fn type_text(app: &mut AppState, tx: &mpsc::UnboundedSender<Action>, text: &str) {
    for c in text.chars() {
        app.handle_event(Event::KeyboardChar(c), tx).unwrap();
    }
}

#[test]
fn enter_submits_buffer_and_resets_it() {
    let (mut app, mut rx, tx) = state();

    type_text(&mut app, &tx, "listapiss");
    app.handle_event(Event::KeyboardBackspace, &tx).unwrap();
    app.handle_event(Event::KeyboardEnter, &tx).unwrap();

    match rx.try_recv() {
        Ok(Action::Submit(command)) => assert_eq!(command, "listapis"),
        other => panic!("unexpected action: {other:?}"),
    }
    assert_eq!(app.input.as_str(), "");
    assert!(app.waiting_for_backend);
}

#[test]
fn enter_is_ignored_while_a_command_is_in_flight() {
    let (mut app, mut rx, tx) = state();

    type_text(&mut app, &tx, "start");
    app.handle_event(Event::KeyboardEnter, &tx).unwrap();
    type_text(&mut app, &tx, "clear");
    app.handle_event(Event::KeyboardEnter, &tx).unwrap();

    assert!(matches!(rx.try_recv(), Ok(Action::Submit(_))));
    assert!(rx.try_recv().is_err());
    assert_eq!(app.input.as_str(), "clear");

    app.handle_event(Event::CommandCompleted, &tx).unwrap();
    app.handle_event(Event::KeyboardEnter, &tx).unwrap();
    match rx.try_recv() {
        Ok(Action::Submit(command)) => assert_eq!(command, "clear"),
        other => panic!("unexpected action: {other:?}"),
    }
}

#[test]
fn paste_appends_to_pending_command() {
    let (mut app, _rx, tx) = state();

    type_text(&mut app, &tx, "AddApi ");
    app.handle_event(Event::KeyboardPaste("https://x.test".to_string()), &tx)
        .unwrap();

    assert_eq!(app.input.as_str(), "AddApi https://x.test");
}

#[test]
fn transcript_updates_replace_snapshot() {
    let (mut app, _rx, tx) = state();
    let session = SessionState::logged_in("a@b.com", vec![]);
    let transcript = Transcript::new(vec!["one".to_string(), "two\nthree".to_string()]);

    app.handle_event(Event::TranscriptUpdated(session.clone(), transcript), &tx)
        .unwrap();

    assert_eq!(app.session, session);
    assert_eq!(app.display_lines(), vec!["one", "two", "three"]);
}

#[test]
fn scrolling_is_clamped() {
    let (mut app, _rx, tx) = state();
    let transcript = Transcript::new(vec!["a".to_string(), "b".to_string()]);
    app.handle_event(Event::TranscriptUpdated(SessionState::logged_out(), transcript), &tx)
        .unwrap();

    app.handle_event(Event::UIScrollPageUp, &tx).unwrap();
    assert_eq!(app.scroll_back, 2);

    app.handle_event(Event::UIScrollDown, &tx).unwrap();
    assert_eq!(app.scroll_back, 1);

    app.handle_event(Event::UIScrollPageDown, &tx).unwrap();
    assert_eq!(app.scroll_back, 0);
}

#[test]
fn ctrl_c_exits() {
    let (mut app, _rx, tx) = state();
    assert!(app.handle_event(Event::KeyboardCTRLC, &tx).unwrap());
    assert!(!app.handle_event(Event::UITick, &tx).unwrap());
}
