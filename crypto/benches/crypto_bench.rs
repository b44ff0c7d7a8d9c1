use criterion::{black_box, criterion_group, criterion_main, Criterion};

use codechain_types::H256;

fn fixture() -> (H256, H256) {
    let private = codechain_crypto::generate_private_key();
    let message = codechain_crypto::blake256(b"benchmark message");
    (message, private)
}

fn schnorr_sign_bench(c: &mut Criterion) {
    let (message, private) = fixture();

    c.bench_function("schnorr_sign", |b| {
        b.iter(|| codechain_crypto::sign_schnorr(black_box(&message), &private))
    });
}

fn schnorr_verify_bench(c: &mut Criterion) {
    let (message, private) = fixture();
    let public = codechain_crypto::public_from_private(&private).unwrap();
    let sig = codechain_crypto::sign_schnorr(&message, &private).unwrap();

    c.bench_function("schnorr_verify", |b| {
        b.iter(|| codechain_crypto::verify_schnorr(black_box(&message), &sig, &public))
    });
}

fn schnorr_recover_bench(c: &mut Criterion) {
    let (message, private) = fixture();
    let sig = codechain_crypto::sign_schnorr(&message, &private).unwrap();

    c.bench_function("schnorr_recover", |b| {
        b.iter(|| codechain_crypto::recover_schnorr(black_box(&message), &sig))
    });
}

fn ecdsa_sign_bench(c: &mut Criterion) {
    let (message, private) = fixture();

    c.bench_function("ecdsa_sign", |b| {
        b.iter(|| codechain_crypto::sign_ecdsa(black_box(&message), &private))
    });
}

fn blake256_bench(c: &mut Criterion) {
    let data = [0xABu8; 256];

    c.bench_function("blake256_256B", |b| {
        b.iter(|| codechain_crypto::blake256(black_box(&data)))
    });
}

fn blake160_keyed_bench(c: &mut Criterion) {
    let data = vec![0xCDu8; 1024];
    let key = [7u8; 32];

    c.bench_function("blake160_with_key_1KB", |b| {
        b.iter(|| codechain_crypto::blake160_with_key(black_box(&data), &key))
    });
}

fn public_from_private_bench(c: &mut Criterion) {
    let private = codechain_crypto::generate_private_key();

    c.bench_function("public_from_private", |b| {
        b.iter(|| codechain_crypto::public_from_private(black_box(&private)))
    });
}

criterion_group!(
    benches,
    schnorr_sign_bench,
    schnorr_verify_bench,
    schnorr_recover_bench,
    ecdsa_sign_bench,
    blake256_bench,
    blake160_keyed_bench,
    public_from_private_bench,
);
criterion_main!(benches);
