use pocket_app::{App, BackendSelector};
use pocket_core::{ConfigurationError, StopHandle};
use pocket_ui::{attrs, press, Button, Card, HBox, Label, Observable, Spacer, VBox, View, Widget};

const INITIAL_WIDTH: u32 = 480;
const INITIAL_HEIGHT: u32 = 360;

struct CounterView {
    count: Observable<i64>,
    step: Observable<i64>,
    stop: StopHandle,
}

impl Default for CounterView {
    fn default() -> Self {
        Self {
            count: Observable::new(0),
            step: Observable::new(1),
            stop: StopHandle::new(),
        }
    }
}

impl CounterView {
    fn step_button(&self, step: i64) -> Result<Widget, ConfigurationError> {
        let selected = self.step.get() == step;
        let target = self.step.clone();
        Button(attrs! {
            text: format!("x{step}"),
            font_size: 12,
            padding: (6, 12),
            background_color: if selected { "#34C759" } else { "#8E8E93" },
            on_press: press(move || target.set(step)),
        })
    }
}

impl View for CounterView {
    fn body(&self) -> Result<Widget, ConfigurationError> {
        let count = self.count.get();
        let step = self.step.get();
        let increment = {
            let count = self.count.clone();
            press(move || count.update(|value| *value += step))
        };
        let decrement = {
            let count = self.count.clone();
            press(move || count.update(|value| *value -= step))
        };
        let reset = {
            let count = self.count.clone();
            press(move || count.set(0))
        };
        let quit = {
            let stop = self.stop.clone();
            press(move || stop.request())
        };

        let root = VBox(attrs! {
            padding: 24,
            spacing: 16,
            background_color: "#F5F5F7",
            children: vec![
                Label(attrs! { text: "Pocket Counter", font_size: 28 })?,
                Card(attrs! {
                    children: vec![VBox(attrs! {
                        spacing: 12,
                        alignment: "center",
                        children: vec![
                            Label(attrs! {
                                text: format!("Count: {count}"),
                                font_size: 24,
                                color: if count < 0 { "#FF3B30" } else { "#1C1C1E" },
                            })?,
                            HBox(attrs! {
                                spacing: 8,
                                children: vec![
                                    Button(attrs! { text: "-", width: 48, on_press: decrement })?,
                                    Button(attrs! { text: "+", width: 48, on_press: increment })?,
                                ],
                            })?,
                        ],
                    })?],
                })?,
                HBox(attrs! {
                    spacing: 8,
                    alignment: "center",
                    children: vec![
                        Label(attrs! { text: "Step", color: "#6E6E73" })?,
                        self.step_button(1)?,
                        self.step_button(5)?,
                        self.step_button(10)?,
                    ],
                })?,
                Spacer(attrs! { height: 8 })?,
                HBox(attrs! {
                    spacing: 8,
                    children: vec![
                        Button(attrs! { text: "Reset", disabled: count == 0, on_press: reset })?,
                        Button(attrs! { text: "Quit", background_color: "#FF3B30", on_press: quit })?,
                    ],
                })?,
            ],
        })?;
        Ok(root.watching(&self.count).watching(&self.step))
    }

    fn attached(&mut self, stop: StopHandle) {
        self.stop = stop;
    }
}

fn main() {
    env_logger::init();

    println!("=== Pocket UI counter ===");
    println!("Set POCKET_BACKEND=console to print the layout instead of opening a window.");
    println!();

    let mut app = App::new(
        "Pocket Counter",
        INITIAL_WIDTH,
        INITIAL_HEIGHT,
        BackendSelector::Auto,
    );
    if let Err(err) = app.set_view::<CounterView>() {
        log::error!("cannot install the counter view: {err}");
        std::process::exit(1);
    }
    if let Err(err) = app.run() {
        log::error!("counter demo failed: {err}");
        std::process::exit(1);
    }
    log::info!(
        "finished on the {} backend after {} frames",
        app.backend_name().unwrap_or("unknown"),
        app.frames()
    );
}
