use super::*;
use pocket_app_shell::AppShell;
use pocket_core::StopHandle;
use pocket_testing::SharedBuffer;
use pocket_ui::{attrs, Label, VBox};

fn greeting_shell(stop: StopHandle) -> AppShell {
    let view = || VBox(attrs! { children: vec![Label(attrs! { text: "Hi" })?] });
    AppShell::new(Box::new(view), stop)
}

fn backend(buffer: &SharedBuffer) -> ConsoleBackend {
    ConsoleBackend::with_writer(
        &SurfaceOptions::new("Demo", 320, 240),
        Box::new(buffer.clone()),
    )
}

#[test]
fn run_writes_one_frame_and_stops() {
    let buffer = SharedBuffer::new();
    let mut backend = backend(&buffer);
    let stop = StopHandle::new();
    let mut shell = greeting_shell(stop.clone());

    shell.run(&mut backend).expect("run");

    assert_eq!(backend.frames_drawn(), 1);
    assert!(stop.is_requested());
    assert_eq!(
        buffer.contents(),
        "== Demo frame 1 (320x240) ==\n\
         VBox [0.0, 0.0, 320.0 x 240.0]\n  \
         Label [0.0, 0.0, 14.0 x 17.5] \"Hi\"\n"
    );
}

#[test]
fn run_draws_nothing_once_stopped() {
    let buffer = SharedBuffer::new();
    let mut backend = backend(&buffer);
    let stop = StopHandle::new();
    stop.request();
    let mut shell = greeting_shell(stop);

    shell.run(&mut backend).expect("run");

    assert_eq!(backend.frames_drawn(), 0);
    assert!(buffer.contents().is_empty());
    assert_eq!(shell.rebuilds(), 0);
}

#[test]
fn construct_never_fails() {
    let backend = ConsoleBackend::construct(&SurfaceOptions::default()).expect("console");
    assert_eq!(backend.name(), "console");
    assert_eq!(backend.viewport(), Size::new(800.0, 600.0));
}

struct Closed;

impl Write for Closed {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failure_is_a_backend_error() {
    let mut backend = ConsoleBackend::with_writer(&SurfaceOptions::default(), Box::new(Closed));
    let mut shell = greeting_shell(StopHandle::new());

    let err = shell.run(&mut backend).expect_err("broken pipe");

    assert!(matches!(err, Error::Backend(_)));
}
