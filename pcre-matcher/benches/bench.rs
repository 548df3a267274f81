use std::collections::HashMap;
use std::iter;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lazy_static::lazy_static;

use pcre_matcher::prelude::*;

const KB: usize = 1024;
const MB: usize = 1024 * KB;

lazy_static! {
    static ref BENCH_DATA: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("Easy0", "ABCDEFGHIJKLMNOPQRSTUVWXYZ$");
        m.insert("Easy0i", "(?i)ABCDEFGHIJklmnopqrstuvwxyz$");
        m.insert("Easy1", "A[AB]B[BC]C[CD]D[DE]E[EF]F[FG]G[GH]H[HI]I[IJ]J$");
        m.insert("Medium", "[XYZ]ABCDEFGHIJKLMNOPQRSTUVWXYZ$");
        m.insert("Hard", "[ -~]*ABCDEFGHIJKLMNOPQRSTUVWXYZ$");
        m.insert("Hard1", "ABCD|CDEF|EFGH|GHIJ|IJKL|KLMN|MNOP|OPQR|QRST|STUV|UVWX|WXYZ");
        m
    };
    static ref BENCH_SIZE: Vec<usize> = vec![16, 32, KB, 32 * KB, MB];
    static ref BENCH_TEXT: Vec<u8> = {
        let mut x: u32 = !0;

        iter::from_fn(|| {
            x = x.wrapping_add(x);
            x ^= 1;

            if (x as i32) < 0 {
                x ^= 0x8888_8eef
            }

            if x % 31 == 0 {
                Some(b'\n')
            } else {
                Some((x % (0x7E + 1 - 0x20) + 0x20) as u8)
            }
        })
        .take(MB)
        .collect()
    };
}

fn compile_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");

    for (&name, &expr) in BENCH_DATA.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(name), expr, |b, expr| {
            b.iter(|| compile(expr, Flags::MULTILINE).unwrap())
        });
    }

    group.finish();
}

fn exec_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("exec");

    for (&name, &expr) in BENCH_DATA.iter() {
        let re = must_compile(expr, Flags::MULTILINE);
        let mut m = Matcher::new(&re).unwrap();

        for &size in BENCH_SIZE.iter() {
            let text = BENCH_TEXT.get(..size).unwrap();

            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_with_input(BenchmarkId::new(name, size), &text, |b, &text| {
                b.iter(|| m.exec(text, MatchFlags::empty()).unwrap())
            });
        }
    }

    group.finish();
}

fn replace_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("replace_all");

    let re = must_compile("[aeiou]+", Flags::empty());
    let mut m = Matcher::new(&re).unwrap();

    for &size in BENCH_SIZE.iter().filter(|&&size| size <= 32 * KB) {
        let text = BENCH_TEXT.get(..size).unwrap();

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, &text| {
            b.iter(|| m.replace_all_bytes(text, b"_", MatchFlags::empty()).unwrap())
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = compile_bench, exec_bench, replace_bench
}

criterion_main!(benches);
