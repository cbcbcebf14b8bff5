use super::*;
use pocket_core::ConfigurationError;
use pocket_testing::SharedBuffer;
use pocket_ui::{attrs, Label, Widget};

#[derive(Default)]
struct Greeting {
    attached: bool,
}

impl View for Greeting {
    fn body(&self) -> Result<Widget, ConfigurationError> {
        Label(attrs! { text: if self.attached { "attached" } else { "detached" } })
    }

    fn attached(&mut self, _stop: StopHandle) {
        self.attached = true;
    }
}

fn console_app(buffer: &SharedBuffer) -> App {
    App::with_options(
        AppOptions::new()
            .with_title("Test")
            .with_size(200, 100)
            .with_backend(BackendSelector::Console)
            .with_console_output(buffer.clone()),
    )
}

#[test]
fn selector_parses_names_and_aliases() {
    assert!(matches!("auto".parse::<BackendSelector>(), Ok(BackendSelector::Auto)));
    assert!(matches!(" Windowed ".parse::<BackendSelector>(), Ok(BackendSelector::Windowed)));
    assert!(matches!("desktop".parse::<BackendSelector>(), Ok(BackendSelector::Windowed)));
    assert!(matches!("headless".parse::<BackendSelector>(), Ok(BackendSelector::Console)));
    let err = "metal".parse::<BackendSelector>().expect_err("unknown");
    assert_eq!(err, UnknownBackend("metal".to_string()));
}

#[test]
fn options_map_to_surface_options() {
    let options = AppOptions::new()
        .with_title("Counter")
        .with_size(320, 240)
        .with_fps(30)
        .with_font_path("/tmp/font.ttf");
    let surface = options.surface_options();
    assert_eq!(surface.title, "Counter");
    assert_eq!((surface.width, surface.height), (320, 240));
    assert_eq!(surface.fps, 30);
    assert_eq!(surface.font_path, Some(PathBuf::from("/tmp/font.ttf")));
}

#[test]
fn run_without_view_fails() {
    let buffer = SharedBuffer::new();
    let mut app = console_app(&buffer);
    let err = app.run().expect_err("no view");
    assert!(matches!(err, Error::InvalidState(InvalidStateError::NoView)));
    assert!(!app.is_finished());
}

#[test]
fn set_view_calls_the_attach_hook() {
    let buffer = SharedBuffer::new();
    let mut app = console_app(&buffer);
    app.set_view::<Greeting>().expect("idle");
    app.run().expect("run");
    assert!(buffer.contents().contains("\"attached\""));
    assert_eq!(app.backend_name(), Some("console"));
    assert_eq!(app.frames(), 1);
}

#[test]
fn app_runs_only_once() {
    let buffer = SharedBuffer::new();
    let mut app = console_app(&buffer);
    app.set_view::<Greeting>().expect("idle");
    app.run().expect("first run");
    assert!(app.is_finished());

    let err = app.run().expect_err("second run");
    assert!(matches!(
        err,
        Error::InvalidState(InvalidStateError::AlreadyFinished)
    ));
    assert_eq!(
        app.set_view::<Greeting>(),
        Err(InvalidStateError::AlreadyFinished)
    );
}

#[test]
fn stop_before_run_draws_nothing() {
    let buffer = SharedBuffer::new();
    let mut app = console_app(&buffer);
    app.set_view::<Greeting>().expect("idle");
    app.stop();
    app.run().expect("run");
    assert!(buffer.contents().is_empty());
    assert_eq!(app.frames(), 0);
}

#[test]
fn unavailable_custom_backend_falls_back_to_console() {
    let buffer = SharedBuffer::new();
    let mut app = App::with_options(
        AppOptions::new()
            .with_backend(BackendSelector::custom(|_| {
                Err(BackendUnavailable::new("custom", "no device"))
            }))
            .with_console_output(buffer.clone()),
    );
    app.set_view::<Greeting>().expect("idle");
    app.run().expect("run");
    assert_eq!(app.backend_name(), Some("console"));
    assert!(buffer.contents().starts_with("== Pocket UI frame 1 (800x600) =="));
}
