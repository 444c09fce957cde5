use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use service::posts::{PostInput, PostStore};

fn seeded(n: usize) -> PostStore {
    let mut store = PostStore::new();
    for i in 0..n {
        store.create(PostInput::new(format!("post-{i}")).with_field("body", "lorem")).unwrap();
    }
    store
}

fn bench_store(c: &mut Criterion) {
    let store = seeded(1_000);

    c.bench_function("post_store_find_one_1k", |b| {
        b.iter(|| store.find_one(750).unwrap().id);
    });

    c.bench_function("post_store_create_into_1k", |b| {
        b.iter_batched(
            || store.clone(),
            |mut s| s.create(PostInput::new("fresh title")).unwrap(),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_store);
criterion_main!(benches);
