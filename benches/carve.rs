use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};
use seamcarver::{calculate_energy, SeamCarver, SeamFinder};

fn build_noise(width: u32, height: u32) -> RgbaImage {
    let mut state: u32 = 0x9e37_79b9;
    RgbaImage::from_fn(width, height, |_, _| {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        let [r, g, b, _] = state.to_le_bytes();
        Rgba([r, g, b, 255])
    })
}

fn bench_energy(c: &mut Criterion) {
    let carver = SeamCarver::new(&build_noise(640, 480)).expect("valid image");
    c.bench_function("energy_640x480", |b| {
        b.iter(|| black_box(calculate_energy(black_box(carver.grid()))));
    });
}

fn bench_find_vertical(c: &mut Criterion) {
    let carver = SeamCarver::new(&build_noise(640, 480)).expect("valid image");
    c.bench_function("find_vertical_seam_640x480", |b| {
        b.iter(|| black_box(carver.find_vertical_seam()));
    });
}

fn bench_remove_ten(c: &mut Criterion) {
    let carver = SeamCarver::new(&build_noise(320, 240)).expect("valid image");
    c.bench_function("remove_10_vertical_seams_320x240", |b| {
        b.iter(|| {
            let mut sc = carver.clone();
            for _ in 0..10 {
                let seam = sc.find_vertical_seam();
                sc.remove_vertical_seam(&seam).expect("seam fits");
            }
            black_box(sc.width());
        });
    });
}

criterion_group!(benches, bench_energy, bench_find_vertical, bench_remove_ten);
criterion_main!(benches);
