use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use primecert::arith::{mul_mod, pow_mod};
use primecert::montgomery::Montgomery;
use primecert::rsa::RsaKeyPair;
use primecert::{classify, is_probable_prime};

fn bench_is_probable_prime_small(c: &mut Criterion) {
    // Settled by trial division before any exponentiation
    c.bench_function("is_probable_prime(17)", |b| {
        b.iter(|| is_probable_prime(black_box(17)));
    });
}

fn bench_is_probable_prime_carmichael(c: &mut Criterion) {
    // 561 = 3 * 11 * 17, the smallest Carmichael number
    c.bench_function("is_probable_prime(561)", |b| {
        b.iter(|| is_probable_prime(black_box(561)));
    });
}

fn bench_is_probable_prime_mersenne61(c: &mut Criterion) {
    // 2^61 - 1: prime, so all seven witness bases run to completion
    c.bench_function("is_probable_prime(M61)", |b| {
        b.iter(|| is_probable_prime(black_box(2305843009213693951)));
    });
}

fn bench_is_probable_prime_largest_u64(c: &mut Criterion) {
    // The largest 64-bit prime: maximal-width intermediates throughout
    c.bench_function("is_probable_prime(2^64-59)", |b| {
        b.iter(|| is_probable_prime(black_box(18446744073709551557)));
    });
}

fn bench_classify_witnessed(c: &mut Criterion) {
    // 1373653 passes bases 2 and 3 before 5 witnesses it
    c.bench_function("classify(1373653)", |b| {
        b.iter(|| classify(black_box(1373653)));
    });
}

fn bench_mul_mod_max_operands(c: &mut Criterion) {
    let m = u64::MAX;
    c.bench_function("mul_mod(max, max, max)", |b| {
        b.iter(|| mul_mod(black_box(m - 1), black_box(m - 1), black_box(m)));
    });
}

fn bench_pow_mod_wide(c: &mut Criterion) {
    // Full 64-bit exponent against the largest 64-bit prime
    let p = 18446744073709551557u64;
    c.bench_function("pow_mod(3, p-1, p)", |b| {
        b.iter(|| pow_mod(black_box(3), black_box(p - 1), black_box(p)));
    });
}

fn bench_plain_pow_odd_modulus(c: &mut Criterion) {
    let p = 999999999999999877u64;
    c.bench_function("pow_mod(3, p-1, p) odd p", |b| {
        b.iter(|| pow_mod(black_box(3), black_box(p - 1), black_box(p)));
    });
}

fn bench_montgomery_pow_odd_modulus(c: &mut Criterion) {
    // Same exponentiation as the plain variant, through a prebuilt context
    let p = 999999999999999877u64;
    let ctx = Montgomery::new(p);
    c.bench_function("Montgomery::pow(3, p-1) odd p", |b| {
        b.iter(|| ctx.pow(black_box(3), black_box(p - 1)));
    });
}

fn bench_rsa_encrypt_decrypt(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2024);
    let kp = RsaKeyPair::generate(&mut rng, 48).unwrap();
    c.bench_function("rsa encrypt+decrypt (48-bit n)", |b| {
        b.iter(|| {
            let c = kp.encrypt(black_box(42)).unwrap();
            kp.decrypt(black_box(c))
        });
    });
}

criterion_group!(
    benches,
    bench_is_probable_prime_small,
    bench_is_probable_prime_carmichael,
    bench_is_probable_prime_mersenne61,
    bench_is_probable_prime_largest_u64,
    bench_classify_witnessed,
    bench_mul_mod_max_operands,
    bench_pow_mod_wide,
    bench_plain_pow_odd_modulus,
    bench_montgomery_pow_odd_modulus,
    bench_rsa_encrypt_decrypt,
);
criterion_main!(benches);
