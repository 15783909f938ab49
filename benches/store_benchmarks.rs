use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use algoforge::store::{FormType, NewLead, Store};
use tempfile::tempdir;

fn demo_lead(i: usize) -> NewLead {
    NewLead {
        name: format!("Lead {}", i),
        email: format!("lead{}@example.com", i),
        phone: None,
        form_type: FormType::Contact,
        course_interest: None,
        message: None,
    }
}

fn bench_lead_create(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let dir = tempdir().unwrap();
    let store = rt.block_on(Store::open(dir.path().join("db.json"))).unwrap();

    let mut i = 0;
    c.bench_function("lead_create", |b| {
        b.iter(|| {
            i += 1;
            rt.block_on(store.create_lead(black_box(demo_lead(i)))).unwrap()
        })
    });
}

fn bench_lead_list(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let dir = tempdir().unwrap();
    let store = rt.block_on(Store::open(dir.path().join("db.json"))).unwrap();

    rt.block_on(async {
        for i in 0..500 {
            store.create_lead(demo_lead(i)).await.unwrap();
        }
    });

    c.bench_function("lead_list_500", |b| {
        b.iter(|| rt.block_on(store.list_leads()))
    });
}

fn bench_user_lookup(c: &mut Criterion) {
    use algoforge::auth::{Role, User};

    let rt = tokio::runtime::Runtime::new().unwrap();
    let dir = tempdir().unwrap();
    let store = rt.block_on(Store::open(dir.path().join("db.json"))).unwrap();

    rt.block_on(async {
        for i in 0..200 {
            store
                .insert_user(User::new(
                    format!("user{}", i),
                    format!("user{}@algoforge.io", i),
                    format!("User {}", i),
                    "hash".to_string(),
                    Role::Student,
                ))
                .await
                .unwrap();
        }
    });

    c.bench_function("user_lookup_by_email", |b| {
        b.iter(|| rt.block_on(store.find_user_by_identifier(black_box("user100@algoforge.io"))))
    });
}

criterion_group!(benches, bench_lead_create, bench_lead_list, bench_user_lookup);
criterion_main!(benches);
