use astroberry_sky::units::{degrees_to_hms, degrees_to_sexagesimal};
use astroberry_sky::{greenwich_mean_sidereal_time, ra_dec_to_alt_az, try_ra_dec_to_alt_az};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sidereal_bench(c: &mut Criterion) {
    let jd = 2_460_000.5;

    let mut group = c.benchmark_group("sidereal");
    group.bench_function("gmst", |b| {
        b.iter(|| greenwich_mean_sidereal_time(black_box(jd)))
    });
    group.finish();
}

fn transform_bench(c: &mut Criterion) {
    let (ra, dec, lat, lon, jd) = (1.47, 0.12, 0.91, -0.37, 2_460_000.5);

    let mut group = c.benchmark_group("alt_az");
    group.bench_function("legacy", |b| {
        b.iter(|| {
            ra_dec_to_alt_az(
                black_box(ra),
                black_box(dec),
                black_box(lat),
                black_box(lon),
                black_box(jd),
            )
        })
    });
    group.bench_function("strict", |b| {
        b.iter(|| {
            try_ra_dec_to_alt_az(
                black_box(ra),
                black_box(dec),
                black_box(lat),
                black_box(lon),
                black_box(jd),
            )
        })
    });
    group.finish();
}

fn format_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    group.bench_function("dms", |b| {
        b.iter(|| degrees_to_sexagesimal(black_box(-12.345_678)))
    });
    group.bench_function("hms", |b| b.iter(|| degrees_to_hms(black_box(279.234_735))));
    group.finish();
}

criterion_group!(benches, sidereal_bench, transform_bench, format_bench);
criterion_main!(benches);
