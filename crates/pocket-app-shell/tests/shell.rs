use std::cell::Cell;
use std::rc::Rc;

use pocket_app_shell::AppShell;
use pocket_core::{ConfigurationError, StopHandle};
use pocket_render_common::FrameDriver;
use pocket_testing::{ScriptStep, ScriptedBackend};
use pocket_ui::{attrs, press, Button, Label, Observable, Size, VBox};

fn viewport() -> Size {
    Size::new(400.0, 300.0)
}

fn counter_shell(count: &Observable<i32>, bodies: &Rc<Cell<u32>>, stop: StopHandle) -> AppShell {
    let count = count.clone();
    let bodies = Rc::clone(bodies);
    let quit = stop.clone();
    let view = move || {
        bodies.set(bodies.get() + 1);
        let increment = {
            let count = count.clone();
            press(move || count.update(|value| *value += 1))
        };
        let quit = quit.clone();
        VBox(attrs! {
            spacing: 10,
            children: vec![
                Label(attrs! { text: &count, font_size: 24 })?,
                Button(attrs! { text: "+", on_press: increment })?,
                Button(attrs! { text: "Quit", on_press: press(move || quit.request()) })?,
            ],
        })
    };
    AppShell::new(Box::new(view), stop)
}

#[test]
fn static_content_is_built_once() {
    let count = Observable::new(0);
    let bodies = Rc::new(Cell::new(0));
    let mut shell = counter_shell(&count, &bodies, StopHandle::new());
    let (mut backend, log) = ScriptedBackend::new(viewport(), vec![ScriptStep::Frame; 3]);

    shell.run(&mut backend).expect("run");

    assert_eq!(log.len(), 3);
    assert_eq!(shell.frames(), 3);
    assert_eq!(shell.rebuilds(), 1);
    assert_eq!(bodies.get(), 1);
}

#[test]
fn press_rebuilds_before_the_next_draw() {
    let count = Observable::new(0);
    let bodies = Rc::new(Cell::new(0));
    let mut shell = counter_shell(&count, &bodies, StopHandle::new());
    let script = vec![
        ScriptStep::Frame,
        ScriptStep::press_text("+"),
        ScriptStep::press_text("+"),
        ScriptStep::Frame,
    ];
    let (mut backend, log) = ScriptedBackend::new(viewport(), script);

    shell.run(&mut backend).expect("run");

    assert_eq!(count.get(), 2);
    assert_eq!(log.texts(0), vec!["0", "+", "Quit"]);
    assert_eq!(log.texts(1), vec!["1", "+", "Quit"]);
    assert_eq!(log.texts(3), vec!["2", "+", "Quit"]);
    assert_eq!(bodies.get(), 3);
}

#[test]
fn resize_lays_out_again_without_calling_body() {
    let count = Observable::new(0);
    let bodies = Rc::new(Cell::new(0));
    let mut shell = counter_shell(&count, &bodies, StopHandle::new());
    let script = vec![
        ScriptStep::Frame,
        ScriptStep::Resize(Size::new(640.0, 480.0)),
        ScriptStep::Frame,
    ];
    let (mut backend, log) = ScriptedBackend::new(viewport(), script);

    shell.run(&mut backend).expect("run");

    assert_eq!(bodies.get(), 1);
    let frames = log.frames();
    assert_eq!(frames[0].viewport(), viewport());
    assert_eq!(frames[1].viewport(), Size::new(640.0, 480.0));
    assert_eq!(frames[2].root().rect.width, 640.0);
}

#[test]
fn stop_from_a_callback_ends_the_run() {
    let count = Observable::new(0);
    let bodies = Rc::new(Cell::new(0));
    let stop = StopHandle::new();
    let mut shell = counter_shell(&count, &bodies, stop.clone());
    let script = vec![
        ScriptStep::Frame,
        ScriptStep::press_text("Quit"),
        ScriptStep::Frame,
        ScriptStep::Frame,
    ];
    let (mut backend, log) = ScriptedBackend::new(viewport(), script);

    shell.run(&mut backend).expect("run");

    assert!(stop.is_requested());
    assert!(shell.stop_requested());
    assert_eq!(log.len(), 2);
}

#[test]
fn teardown_removes_every_listener() {
    let count = Observable::new(0);
    let bodies = Rc::new(Cell::new(0));
    let mut shell = counter_shell(&count, &bodies, StopHandle::new());
    let (mut backend, _log) = ScriptedBackend::new(viewport(), vec![ScriptStep::Frame]);

    shell.run(&mut backend).expect("run");
    assert_eq!(count.listener_count(), 1);

    shell.teardown();
    assert_eq!(count.listener_count(), 0);
    assert!(shell.last_tree().is_none());
    assert!(shell.should_layout(viewport()));
}

#[test]
fn failing_body_keeps_the_last_tree() {
    let broken = Observable::new(false);
    let view = {
        let broken = broken.clone();
        move || {
            if broken.get() {
                return Err(ConfigurationError::InvalidValue {
                    widget: "Label",
                    attribute: "text".to_string(),
                    expected: "a string",
                });
            }
            let breaker = {
                let broken = broken.clone();
                press(move || broken.set(true))
            };
            VBox(attrs! {
                children: vec![Button(attrs! { text: "break", on_press: breaker })?],
            })
            .map(|root| root.watching(&broken))
        }
    };
    let mut shell = AppShell::with_view(view);
    let script = vec![ScriptStep::Frame, ScriptStep::press_text("break"), ScriptStep::Frame];
    let (mut backend, log) = ScriptedBackend::new(viewport(), script);

    let err = shell.run(&mut backend).expect_err("body fails");

    assert!(matches!(err, pocket_core::Error::Configuration(_)));
    assert_eq!(log.len(), 1);
    let tree = shell.last_tree().expect("previous tree kept");
    assert_eq!(tree.texts(), vec!["break"]);
    assert!(shell.root().widget().is_some());
}

#[test]
fn draw_failure_is_returned_from_run() {
    let count = Observable::new(0);
    let bodies = Rc::new(Cell::new(0));
    let mut shell = counter_shell(&count, &bodies, StopHandle::new());
    let (backend, log) = ScriptedBackend::new(viewport(), vec![ScriptStep::Frame; 4]);
    let mut backend = backend.failing_after(2);

    let err = shell.run(&mut backend).expect_err("surface lost");

    assert!(matches!(err, pocket_core::Error::Backend(_)));
    assert_eq!(log.len(), 2);
}
