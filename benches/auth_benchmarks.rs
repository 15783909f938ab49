use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use algoforge::auth::{
    evaluate, hash_password, issue_token, verify_password, verify_token, Role, User,
};

const SECRET: &str = "bench-secret";

fn bench_user(role: Role) -> User {
    User::new(
        "benchuser".to_string(),
        "bench@algoforge.io".to_string(),
        "Bench User".to_string(),
        "hash".to_string(),
        role,
    )
}

fn bench_token_issue(c: &mut Criterion) {
    let user = bench_user(Role::Admin);

    c.bench_function("token_issue", |b| {
        b.iter(|| issue_token(black_box(&user), SECRET, 24))
    });
}

fn bench_token_verify(c: &mut Criterion) {
    let user = bench_user(Role::Admin);
    let token = issue_token(&user, SECRET, 24).unwrap();

    c.bench_function("token_verify", |b| {
        b.iter(|| verify_token(black_box(&token), SECRET))
    });
}

fn bench_gate_evaluate(c: &mut Criterion) {
    let user = bench_user(Role::Admin);
    let token = issue_token(&user, SECRET, 24).unwrap();

    c.bench_function("gate_public_path", |b| {
        b.iter(|| evaluate(black_box("/api/blog"), None, SECRET))
    });

    c.bench_function("gate_admin_path", |b| {
        b.iter(|| evaluate(black_box("/api/admin/leads"), Some(&token), SECRET))
    });
}

fn bench_password(c: &mut Criterion) {
    let hash = hash_password("Algoforge@1980").unwrap();

    let mut group = c.benchmark_group("password");
    group.sample_size(10); // bcrypt is intentionally slow
    group.bench_function("verify", |b| {
        b.iter(|| verify_password(black_box("Algoforge@1980"), &hash))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_token_issue,
    bench_token_verify,
    bench_gate_evaluate,
    bench_password
);
criterion_main!(benches);
