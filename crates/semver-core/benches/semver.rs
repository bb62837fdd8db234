use criterion::{black_box, criterion_group, criterion_main, Criterion};
use semver_core::{Constraint, ConstraintParser, Semver, Version, VersionCollection};

fn bench_compare(c: &mut Criterion) {
    let cases = [
        ("1.2.3", "1.2.4"),
        ("2.4.0-alpha", "2.4.0"),
        ("1.0.0-alpha.1", "1.0.0-alpha.beta"),
        ("1.2.3+build.1", "1.2.3+build.2"),
        ("1.0.0-rc.11", "1.0.0-rc.2"),
    ];
    let parsed: Vec<(Version, Version)> = cases
        .iter()
        .map(|(a, b)| (Version::parse(a).unwrap(), Version::parse(b).unwrap()))
        .collect();

    c.bench_function("version_compare", |b| {
        b.iter(|| {
            for (a, bver) in &parsed {
                black_box(black_box(a).compare_to(black_box(bver)));
            }
        })
    });
}

fn bench_parse_versions(c: &mut Criterion) {
    let versions = [
        "v1.2.3",
        "1.2.3-beta.1",
        "2.4.0+build.5",
        "1.0.0-x.7.z.92",
        "10.20.30-rc.1+sha.5114f85",
    ];

    c.bench_function("parse_versions", |b| {
        b.iter(|| {
            for version in versions {
                black_box(Version::parse(black_box(version)).ok());
            }
        })
    });
}

fn bench_parse_constraints(c: &mut Criterion) {
    let parser = ConstraintParser::new();
    let constraints = [
        ">=1.2.3 <2.0.0",
        "^1.2.3 || ~2.4",
        "1.2.* || 2.*",
        "1.2.3 - 2.0.0",
        "~1.2.1 >=1.2.3",
        "!=1.5.0, !=1.5.1",
        ">1.0 <3.0 || >=4.0",
    ];

    c.bench_function("parse_constraints", |b| {
        b.iter(|| {
            for constraint in constraints {
                black_box(parser.parse(black_box(constraint)).ok());
            }
        })
    });
}

fn bench_satisfies(c: &mut Criterion) {
    let cases = [
        ("1.2.3", "^1.2.0"),
        ("1.2.3-beta", "^1.2.3"),
        ("2.4.5", "~2.4"),
        ("1.2.3", ">=1.2.3 <2.0.0"),
        ("1.9999.9999", "<2.0.0"),
        ("1.2.3", "1.2.* || 2.*"),
    ];

    c.bench_function("semver_satisfies", |b| {
        b.iter(|| {
            for (version, constraint) in cases {
                black_box(Semver::satisfies(black_box(version), black_box(constraint)).unwrap());
            }
        })
    });
}

fn bench_satisfies_parsed(c: &mut Criterion) {
    let versions = VersionCollection::parse(&[
        "1.2.3", "1.2.3-beta", "2.4.5", "1.9999.9999", "1.9.0", "2.0.0",
    ])
    .expect("parse versions");
    let constraint = Constraint::parse("^1.2").expect("parse constraint");

    c.bench_function("collection_satisfying", |b| {
        b.iter(|| {
            black_box(versions.satisfying(black_box(&constraint)));
        })
    });
}

fn bench_sort(c: &mut Criterion) {
    let versions = vec![
        "1.0.0", "0.1.0", "0.1.1", "3.2.1", "2.4.0-alpha", "2.4.0", "50.2.0", "1.2.3", "2.4.5",
        "2.4.5-rc.1",
    ];

    c.bench_function("semver_sort", |b| {
        b.iter(|| {
            black_box(Semver::sort(black_box(&versions)).unwrap());
        })
    });
}

criterion_group!(
    benches,
    bench_compare,
    bench_parse_versions,
    bench_parse_constraints,
    bench_satisfies,
    bench_satisfies_parsed,
    bench_sort
);
criterion_main!(benches);
