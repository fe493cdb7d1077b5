use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use color_regions::region_finding::{
    scan_regions, Color, EdgePolicy, FinderConfig, PixelBuffer, PixelFormat, RandomColors,
    recolor_regions,
};

const TARGET: Color = Color::rgb(50, 200, 50);

/// Diagonal stripes of near-target green over a dark background, so scans produce many
/// mid-sized regions.
fn generate_striped_image(width: usize, height: usize) -> PixelBuffer {
    let mut image = PixelBuffer::new(width, height, PixelFormat::Rgb8).unwrap();
    for y in 0..height {
        for x in 0..width {
            let color = if (x + y) % 16 < 5 {
                Color::rgb(45 + (x % 10) as u8, 195, 55)
            } else {
                Color::rgb(((x * y) % 64) as u8, 20, 20)
            };
            image.set_pixel(x, y, color).unwrap();
        }
    }
    image
}

fn benchmark_scan_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_by_size");

    let sizes = vec![
        (100, 100, "100x100"),
        (500, 500, "500x500"),
        (1000, 1000, "1000x1000"),
    ];

    for (width, height, label) in sizes {
        let image = generate_striped_image(width, height);
        let config = FinderConfig::default();

        group.bench_with_input(BenchmarkId::from_parameter(label), &image, |b, image| {
            b.iter(|| scan_regions(black_box(image), TARGET, &config));
        });
    }

    group.finish();
}

fn benchmark_full_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_region");
    let image = PixelBuffer::filled(500, 500, TARGET).unwrap();

    for (policy, label) in [
        (EdgePolicy::Inclusive, "inclusive"),
        (EdgePolicy::ExcludeBorder, "exclude_border"),
    ] {
        let config = FinderConfig::builder().edge_policy(policy).build();
        group.bench_function(label, |b| {
            b.iter(|| scan_regions(black_box(&image), TARGET, &config));
        });
    }

    group.finish();
}

fn benchmark_recolor(c: &mut Criterion) {
    let image = generate_striped_image(500, 500);
    let regions = scan_regions(&image, TARGET, &FinderConfig::default());
    let mut colors = RandomColors::seeded(0);

    c.bench_function("recolor_500x500", |b| {
        b.iter(|| recolor_regions(black_box(&image), &regions, &mut colors).unwrap());
    });
}

criterion_group!(
    benches,
    benchmark_scan_sizes,
    benchmark_full_match,
    benchmark_recolor
);
criterion_main!(benches);
