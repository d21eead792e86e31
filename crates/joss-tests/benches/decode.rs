use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use joss_decoder::StreamReader;
use joss_tests::{FieldSpec, StreamBuilder};

/// The captured two-element linked-list stream.
const BASIC_LIST_HEX: &str = "aced0005737200044c69737469c88a154016ae6802000249000576616c75654c00046e6578747400064c4c6973743b7870000000117371007e0000000000137071007e0003";

fn bench_decode_small(c: &mut Criterion) {
    let payload = hex::decode(BASIC_LIST_HEX).unwrap();

    c.bench_function("decode_linked_list", |b| {
        b.iter(|| StreamReader::new(&payload).unwrap().read_all().unwrap());
    });
}

fn bench_decode_object_chain(c: &mut Criterion) {
    // One descriptor, then a run of objects sharing it by reference.
    let mut builder = StreamBuilder::new()
        .object_tag()
        .class_desc("Point", 9, 0x02, &[
            FieldSpec::Primitive('I', "x"),
            FieldSpec::Primitive('I', "y"),
        ])
        .null()
        .i32(0)
        .i32(0);
    for i in 1..500i32 {
        builder = builder
            .object_tag()
            .reference(0x7E_0000)
            .i32(i)
            .i32(-i);
    }
    let payload = builder.build();

    c.bench_function("decode_object_chain", |b| {
        b.iter(|| StreamReader::new(&payload).unwrap().read_all().unwrap());
    });
}

fn bench_decode_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_throughput");

    for len in [1_000usize, 10_000, 100_000] {
        let mut builder = StreamBuilder::new()
            .array_tag()
            .class_desc("[I", 1, 0x02, &[])
            .null()
            .i32(len as i32);
        for i in 0..len {
            builder = builder.i32(i as i32);
        }
        let payload = builder.build();

        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("int_array", len),
            &payload,
            |b, p| b.iter(|| StreamReader::new(p).unwrap().read_all().unwrap()),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_decode_small,
    bench_decode_object_chain,
    bench_decode_throughput
);
criterion_main!(benches);
