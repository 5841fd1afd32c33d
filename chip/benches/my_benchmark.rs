use chip::{chip8::ChipSet, resources::Rom};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::mock::StepRng;

const ROM_NAME: &str = "COUNTER";

/// Counts `V0` down in a subroutine, draws the digit in `V1` and starts over.
const PROGRAM: [u16; 10] = [
    0x600A, // 0x200: V0 = 10
    0x2210, // 0x202: call 0x210
    0x4000, // 0x204: skip if V0 != 0
    0x1200, // 0x206: goto 0x200
    0xF129, // 0x208: I = sprite of V1
    0xD015, // 0x20A: draw at (V0, V1)
    0x1202, // 0x20C: goto 0x202
    0x0000, // 0x20E: padding
    0x70FF, // 0x210: V0 -= 1
    0x00EE, // 0x212: return
];

static BASE_ROM: once_cell::sync::Lazy<Rom> = once_cell::sync::Lazy::new(|| {
    let data: Vec<u8> = PROGRAM.iter().flat_map(|op| op.to_be_bytes()).collect();
    Rom::new(ROM_NAME, &data).expect("The benchmark program is not a valid rom.")
});

/// will setup the default configured chip
fn get_default_chip() -> ChipSet {
    ChipSet::with_rom(&BASE_ROM).with_rng(StepRng::new(0, 1))
}

pub fn execute_bench(c: &mut Criterion) {
    let mut chip = get_default_chip();
    c.bench_function("execute_bench", |b| {
        b.iter(|| {
            for _ in 0..10 {
                chip.next().expect("The benchmark program failed.");
            }
            chip.tick_timers();
        });
    });
}

pub fn load_bench(c: &mut Criterion) {
    c.bench_function("load_bench", |b| {
        b.iter(get_default_chip);
    });
}

criterion_group!(benches, execute_bench, load_bench);
criterion_main!(benches);
