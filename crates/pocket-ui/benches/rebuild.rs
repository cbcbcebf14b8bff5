use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pocket_core::ConfigurationError;
use pocket_ui::{
    attrs, press, Button, HBox, Label, LayoutEngine, Observable, RebuildQueue, Size, VBox,
    ViewRoot, Widget,
};

const ROW_SAMPLES: &[usize] = &[8, 32, 128];
const ROOT_SIZE: Size = Size {
    width: 1080.0,
    height: 1920.0,
};

fn list_view(count: Observable<u64>, rows: usize) -> impl Fn() -> Result<Widget, ConfigurationError> {
    move || {
        let mut children = Vec::with_capacity(rows + 1);
        children.push(Label(attrs! { text: &count, font_size: 24 })?);
        for row in 0..rows {
            let count = count.clone();
            children.push(HBox(attrs! {
                spacing: 8,
                children: vec![
                    Label(attrs! { text: format!("Item {row}") })?,
                    Button(attrs! {
                        text: "+",
                        on_press: press(move || count.update(|value| *value += 1)),
                    })?,
                ],
            })?);
        }
        VBox(attrs! { spacing: 4, padding: 16, children: children })
    }
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild");
    for &rows in ROW_SAMPLES {
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, &rows| {
            let count = Observable::new(0u64);
            let mut root = ViewRoot::new(Box::new(list_view(count.clone(), rows)), RebuildQueue::new());
            b.iter(|| {
                count.update(|value| *value += 1).expect("notify");
                let built = root.rebuild().expect("rebuild");
                black_box(built);
            });
        });
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let count = Observable::new(0u64);
    let mut root = ViewRoot::new(Box::new(list_view(count, 128)), RebuildQueue::new());
    let built = root.rebuild().expect("rebuild");
    let engine = LayoutEngine::new(ROOT_SIZE);
    c.bench_function("layout_128_rows", |b| {
        b.iter(|| {
            let tree = engine.layout(black_box(&built));
            black_box(tree.hit_test(540.0, 960.0).is_some());
        });
    });
}

criterion_group!(rebuild, bench_rebuild, bench_layout);
criterion_main!(rebuild);
