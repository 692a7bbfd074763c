//! Benchmarks for the linked structures.
//!
//! Compares against `std::collections::{LinkedList, VecDeque}`.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use linear_collections::{DoublyLinkedList, PriorityQueue, Queue, Stack};
use std::collections::{LinkedList, VecDeque};

// ============================================================================
// Single-operation latency
// ============================================================================

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");

    group.bench_function("stack/u64", |b| {
        let mut stack = Stack::new();
        b.iter(|| {
            stack.push(black_box(42u64));
            black_box(stack.pop().unwrap())
        });
    });

    group.bench_function("queue/u64", |b| {
        let mut queue = Queue::new();
        b.iter(|| {
            queue.enqueue(black_box(42u64));
            black_box(queue.dequeue().unwrap())
        });
    });

    group.bench_function("doubly/u64", |b| {
        let mut list: DoublyLinkedList<u64> = DoublyLinkedList::with_capacity(16);
        b.iter(|| {
            list.push_back(black_box(42u64));
            black_box(list.pop().unwrap())
        });
    });

    group.bench_function("std_linked_list/u64", |b| {
        let mut list = LinkedList::new();
        b.iter(|| {
            list.push_back(black_box(42u64));
            black_box(list.pop_front().unwrap())
        });
    });

    group.bench_function("std_vec_deque/u64", |b| {
        let mut deque = VecDeque::with_capacity(16);
        b.iter(|| {
            deque.push_back(black_box(42u64));
            black_box(deque.pop_front().unwrap())
        });
    });

    group.finish();
}

// ============================================================================
// Bulk throughput
// ============================================================================

fn bench_fill_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_drain");

    for size in [64usize, 1024] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("queue", size), &size, |b, &size| {
            let mut queue = Queue::new();
            b.iter(|| {
                for i in 0..size as u64 {
                    queue.enqueue(i);
                }
                while let Ok(v) = queue.dequeue() {
                    black_box(v);
                }
            });
        });

        group.bench_with_input(
            BenchmarkId::new("std_linked_list", size),
            &size,
            |b, &size| {
                let mut list = LinkedList::new();
                b.iter(|| {
                    for i in 0..size as u64 {
                        list.push_back(i);
                    }
                    while let Some(v) = list.pop_front() {
                        black_box(v);
                    }
                });
            },
        );
    }

    group.finish();
}

// ============================================================================
// O(n) operations
// ============================================================================

fn bench_ordered(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered");

    for size in [16usize, 128] {
        // Deterministic shuffle: multiplicative hash over the index.
        let input: Vec<u64> = (0..size as u64)
            .map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 40)
            .collect();

        group.bench_with_input(BenchmarkId::new("priority_insert", size), &input, |b, input| {
            b.iter(|| {
                let mut pq = PriorityQueue::new(|v: &u64| *v);
                pq.extend(input.iter().copied());
                black_box(pq.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("bubble_sort", size), &input, |b, input| {
            b.iter(|| {
                let mut list: DoublyLinkedList<u64> = input.iter().copied().collect();
                list.bubble_sort(|v| *v);
                black_box(list.front().copied())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_push_pop, bench_fill_drain, bench_ordered);
criterion_main!(benches);
