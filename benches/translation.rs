//! Translation Benchmarks
//!
//! Measures the static table lookups and the full per-event translation path
//! with a no-op layout engine, isolating this crate's overhead from
//! libxkbcommon's.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use keyboard_bridge::input::{
    keysym_to_key, CompiledLayout, EventSink, KeyDirection, KeyEvent, KeyState,
    KeyboardTranslator, LayoutEngine, LayoutNames, LayoutState, RawEvent, RawKeyboardEvent,
    Result, ScanCodeMap,
};

struct NullEngine;

impl LayoutEngine for NullEngine {
    type Layout = NullLayout;

    fn compile(&self, _names: &LayoutNames) -> Result<NullLayout> {
        Ok(NullLayout)
    }
}

struct NullLayout;

impl CompiledLayout for NullLayout {
    type State = NullState;

    fn create_state(&self) -> NullState {
        NullState
    }

    fn modifier_index(&self, name: &str) -> Option<u32> {
        ["Shift", "Lock", "Control", "Mod1", "Alt", "Meta"]
            .iter()
            .position(|n| *n == name)
            .map(|i| i as u32)
    }
}

struct NullState;

impl LayoutState for NullState {
    fn apply(&mut self, _keycode: u32, _direction: KeyDirection) {}

    fn text(&self, _keycode: u32) -> String {
        "a".to_string()
    }

    fn keysym(&self, _keycode: u32) -> u32 {
        0x61
    }

    fn modifier_active(&self, _index: u32) -> bool {
        false
    }
}

#[derive(Default)]
struct CountingSink {
    dispatched: u64,
}

impl EventSink for CountingSink {
    fn input_root_attached(&self) -> bool {
        true
    }

    fn dispatch(&mut self, event: KeyEvent) {
        black_box(&event);
        self.dispatched += 1;
    }
}

fn bench_scan_code_lookup(c: &mut Criterion) {
    let map = ScanCodeMap::new();

    let mut group = c.benchmark_group("scan_code_lookup");
    group.throughput(Throughput::Elements(256));
    group.bench_function("dense_range", |b| {
        b.iter(|| {
            for code in 0..256u32 {
                black_box(map.physical_key(black_box(code)));
            }
        })
    });
    group.finish();
}

fn bench_keysym_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("keysym_lookup");
    group.throughput(Throughput::Elements(256));
    group.bench_function("dense_range", |b| {
        b.iter(|| {
            for sym in 0..256u32 {
                black_box(keysym_to_key(black_box(sym)));
            }
        })
    });
    group.finish();
}

fn bench_handle_press_release(c: &mut Criterion) {
    let mut translator = KeyboardTranslator::new(&NullEngine, &LayoutNames::default()).unwrap();
    let mut sink = CountingSink::default();

    let down = RawEvent::Keyboard(RawKeyboardEvent {
        scan_code: 30,
        state: KeyState::Pressed,
        time_usec: 0,
    });
    let up = RawEvent::Keyboard(RawKeyboardEvent {
        scan_code: 30,
        state: KeyState::Released,
        time_usec: 0,
    });

    let mut group = c.benchmark_group("translate");
    group.throughput(Throughput::Elements(2));
    group.bench_function("press_release", |b| {
        b.iter(|| {
            translator.handle(black_box(&down), &mut sink);
            translator.handle(black_box(&up), &mut sink);
        })
    });
    group.finish();

    black_box(sink.dispatched);
}

criterion_group!(
    benches,
    bench_scan_code_lookup,
    bench_keysym_lookup,
    bench_handle_press_release
);
criterion_main!(benches);
