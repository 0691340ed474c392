//! Compares searching a word list four ways: a linear scan over a `Vec`, a
//! tree built from alphabetized insertions (the worst insertion order: the
//! tree degrades into a list), a tree built from the words in arrival order,
//! and that same tree after an explicit rebalance.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rand::seq::SliceRandom;
use rand::Rng;

use linked_bst::linked::Tree;

const WORDLIST_LEN: usize = 1000;
const NUM_SEARCHES: usize = 100;

fn random_word(rng: &mut impl Rng) -> String {
    let len = rng.gen_range(3..=8);
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

fn search_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();

    let words: Vec<String> = (0..WORDLIST_LEN).map(|_| random_word(&mut rng)).collect();
    let searches: Vec<String> = (0..NUM_SEARCHES)
        .map(|_| words.choose(&mut rng).unwrap().clone())
        .collect();

    let mut alphabetized = words.clone();
    alphabetized.sort();

    let ordered_tree: Tree<String> = alphabetized.iter().cloned().collect();
    let unordered_tree: Tree<String> = words.iter().cloned().collect();
    let mut rebalanced_tree: Tree<String> = words.iter().cloned().collect();
    rebalanced_tree.rebalance();

    let mut group = c.benchmark_group("word-search");

    group.bench_function("linear-scan", |b| {
        b.iter(|| {
            for word in &searches {
                black_box(words.iter().find(|w| *w == word));
            }
        })
    });
    group.bench_function("tree-alphabetized-insertion", |b| {
        b.iter(|| {
            for word in &searches {
                black_box(ordered_tree.find(word));
            }
        })
    });
    group.bench_function("tree-unordered-insertion", |b| {
        b.iter(|| {
            for word in &searches {
                black_box(unordered_tree.find(word));
            }
        })
    });
    group.bench_function("tree-rebalanced", |b| {
        b.iter(|| {
            for word in &searches {
                black_box(rebalanced_tree.find(word));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, search_benchmark);
criterion_main!(benches);
