use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use gfs_parquet::models::{GriddedDataset, SurfaceVariable};
use gfs_parquet::processors::{normalize, tabularize};

// Create a synthetic GFS-style grid with all ten variables
fn create_test_dataset(nlat: usize, nlon: usize) -> GriddedDataset {
    let latitudes: Vec<f64> = (0..nlat).map(|i| 90.0 - i as f64 * 0.25).collect();
    let longitudes: Vec<f64> = (0..nlon).map(|j| j as f64 * 0.25).collect();

    let mut ds = GriddedDataset::new(latitudes, longitudes);
    for (v, variable) in SurfaceVariable::ALL.iter().enumerate() {
        let values: Vec<f64> = (0..nlat * nlon)
            .map(|p| 250.0 + (p % 100) as f64 + v as f64)
            .collect();
        ds.add_layer(variable.short_name(), values).unwrap();
    }

    ds
}

fn benchmark_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for (nlat, nlon) in [(91, 180), (181, 360)] {
        let ds = create_test_dataset(nlat, nlon);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", nlat, nlon)),
            &ds,
            |b, ds| b.iter(|| normalize(black_box(ds.clone()))),
        );
    }

    group.finish();
}

fn benchmark_tabularize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabularize");
    group.sample_size(20);

    for (nlat, nlon) in [(91, 180), (181, 360)] {
        let ds = normalize(create_test_dataset(nlat, nlon));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", nlat, nlon)),
            &ds,
            |b, ds| b.iter(|| tabularize(black_box(ds), 5).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_normalize, benchmark_tabularize);
criterion_main!(benches);
