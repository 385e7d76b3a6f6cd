//! Performance benchmarks for the search gateway and validation.
//!
//! The backend is an in-process stub returning canned hits, so these measure
//! request building, hit decoding and validation only, with no network.

use contacts_search::client::{
    Hit, SearchBackend, SearchHits, SearchRequest, SearchResponse,
};
use contacts_search::error::SearchApiResult;
use contacts_search::models::{Address, Contact, Tag};
use contacts_search::SearchGateway;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::Value;
use std::hint::black_box;
use std::sync::Arc;

/// Backend that answers every search with the same hits.
struct CannedBackend {
    response: SearchResponse,
}

impl SearchBackend for CannedBackend {
    fn upsert(&self, _: &str, _: &str, _: &str, _: &Value) -> SearchApiResult<()> {
        Ok(())
    }

    fn delete(&self, _: &str, _: &str, _: &str) -> SearchApiResult<()> {
        Ok(())
    }

    fn get(&self, _: &str, _: &str, _: &str) -> SearchApiResult<Option<Value>> {
        Ok(None)
    }

    fn search(&self, _: &str, _: &SearchRequest) -> SearchApiResult<SearchResponse> {
        Ok(self.response.clone())
    }
}

fn sample_contact(i: usize) -> Contact {
    let mut contact = Contact::new(format!("First{}", i), format!("Surname{}", i));
    contact.id = i as u64 + 1;
    contact.mail = Some(format!("contact{}@example.org", i));
    contact.address = Some(Address {
        street: Some("rue de la Paix".to_string()),
        city: Some("Paris".to_string()),
        ..Default::default()
    });
    contact.tags.insert(Tag::new("volunteer"));
    contact
}

fn gateway_with_hits(count: usize) -> SearchGateway {
    let hits: Vec<Hit> = (0..count)
        .map(|i| {
            let source = serde_json::to_string(&sample_contact(i)).unwrap();
            Hit::new((i + 1).to_string(), source)
        })
        .collect();

    SearchGateway::new(Arc::new(CannedBackend {
        response: SearchResponse {
            hits: Some(SearchHits {
                total: count as u64,
                hits,
            }),
        },
    }))
}

/// Benchmark decoding search responses of different sizes.
fn bench_search_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_decode");

    for size in [10, 100, 1000] {
        let gateway = gateway_with_hits(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let contacts = gateway
                    .search_contacts(black_box("surname"), black_box("surname"))
                    .unwrap();
                black_box(contacts);
            });
        });
    }

    group.finish();
}

/// Benchmark building the request body.
fn bench_build_request(c: &mut Criterion) {
    c.bench_function("build_request", |b| {
        b.iter(|| {
            let request = SearchGateway::build_request(black_box("jack banon"), black_box("city"));
            black_box(request.source());
        });
    });
}

/// Benchmark contact validation.
fn bench_validate(c: &mut Criterion) {
    let valid = sample_contact(1);
    let mut invalid = sample_contact(2);
    invalid.firstname.clear();
    invalid.mail = Some("not-an-email".to_string());

    c.bench_function("validate_valid", |b| b.iter(|| black_box(valid.validate())));
    c.bench_function("validate_invalid", |b| b.iter(|| black_box(invalid.validate())));
}

criterion_group!(benches, bench_search_decode, bench_build_request, bench_validate);
criterion_main!(benches);
