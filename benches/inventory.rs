//! Performance benchmarks for the inventory traversal pass.
//!
//! Run with: `cargo bench --bench inventory`
//!
//! The pass is a single sequential walk; throughput should scale linearly
//! with the total element count.

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};

use aperture_inventory::{
    AttachmentPoint, Element, ElementKind, InMemoryBeamline, InventoryBuilder, PositionInterval,
};

/// Build a synthetic ring of `n` cells, each with an aperture child at every
/// attachment point and one unclassified diagnostic child in the body.
fn build_ring(n: usize) -> InMemoryBeamline {
    let mut beamline = InMemoryBeamline::new();
    for i in 0..n {
        let element = Element::new(format!("cell_{i:05}"), ElementKind::Drift, 1.0)
            .with_child(
                AttachmentPoint::Entrance,
                Element::new(
                    format!("aprt_in_{i:05}"),
                    ElementKind::CircleAperture { radius: 0.05 },
                    0.0,
                ),
            )
            .with_child(
                AttachmentPoint::Body,
                Element::new(format!("bpm_{i:05}"), ElementKind::Marker, 0.0),
            )
            .with_child(
                AttachmentPoint::Body,
                Element::new(
                    format!("aprt_mid_{i:05}"),
                    ElementKind::EllipseAperture {
                        semi_x: 0.07,
                        semi_y: 0.04,
                    },
                    0.0,
                ),
            )
            .with_child(
                AttachmentPoint::Exit,
                Element::new(
                    format!("coll_{i:05}"),
                    ElementKind::CollimatorAperture,
                    0.5,
                ),
            );
        beamline.add_element(element, PositionInterval::new(i as f64, (i + 1) as f64));
    }
    beamline
}

fn bench_inventory_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("inventory_pass");

    for n in [100, 1_000, 10_000] {
        let beamline = build_ring(n);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(
            BenchmarkId::new("elements", n),
            &beamline,
            |b, beamline| {
                b.iter(|| {
                    InventoryBuilder::new(black_box(beamline))
                        .build()
                        .expect("synthetic ring has intervals for every element")
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_inventory_pass);
criterion_main!(benches);
