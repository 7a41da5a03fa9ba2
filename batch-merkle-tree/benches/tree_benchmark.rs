#[macro_use]
extern crate criterion;

use batch_merkle_tree::{Keccak256, MerkleTree, construct_proofs, verify_proof};
use criterion::{BenchmarkId, Criterion};

/// Fixed-size payloads for benchmarking (8-byte counters).
fn messages(count: usize) -> Vec<Vec<u8>> {
    (0..count).map(|i| (i as u64).to_le_bytes().to_vec()).collect()
}

fn bench(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("tree construction");
        for depth in [8u8, 12, 16] {
            let batch = messages(1usize << depth);
            group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |b, &depth| {
                b.iter(|| MerkleTree::<Keccak256>::build(&batch, depth).unwrap());
            });
        }
    }

    c.bench_function("proof extraction", |b| {
        let batch = messages(1 << 12);
        let tree = MerkleTree::<Keccak256>::build(&batch, 12).unwrap();
        let mut index = 0usize;
        b.iter(|| {
            index = (index + 1) % batch.len();
            tree.proof(index).unwrap()
        });
    });

    c.bench_function("checked verification", |b| {
        let batch = messages(1 << 12);
        let (root, proofs) = construct_proofs::<Keccak256, _>(&batch, 12).unwrap();
        let bytes = proofs[17].to_wire().to_bytes().unwrap();
        b.iter(|| verify_proof::<Keccak256>(&bytes, 0, &root, &batch[17]).unwrap());
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
