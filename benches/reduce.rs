#![allow(dead_code)]

use fluxbench::{Bencher, flux};
use std::hint::black_box;

use ndkern::prelude::*;
use ndkern::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime};

fn rand_vec_f32(n: usize) -> Vec<f32> {
    (0..n)
        .map(|i| ((i * 17 + 3) % 1000) as f32 / 1000.0)
        .collect()
}

fn setup(
    n: usize,
    segments: usize,
) -> (CpuClient, DeviceBuffer<CpuRuntime>, DeviceBuffer<CpuRuntime>) {
    let device = CpuDevice::new();
    let client = CpuRuntime::default_client(&device);
    let a = DeviceBuffer::<CpuRuntime>::from_slice(&rand_vec_f32(n), &device).unwrap();
    let out = DeviceBuffer::<CpuRuntime>::new(segments, &device).unwrap();
    (client, a, out)
}

// ---------------------------------------------------------------------------
// Whole-buffer reductions
// ---------------------------------------------------------------------------

#[flux::bench(group = "sum_all_f32")]
fn ndkern_sum_1m(b: &mut Bencher) {
    let (client, a, mut out) = setup(1_000_000, 1);
    b.iter(|| black_box(client.reduce_sum(&a, &mut out, 1_000_000).unwrap()));
}

#[flux::bench(group = "sum_all_f32")]
fn std_sum_1m(b: &mut Bencher) {
    let data = rand_vec_f32(1_000_000);
    b.iter(|| black_box(data.iter().sum::<f32>()));
}

// ---------------------------------------------------------------------------
// Row reductions (many short segments)
// ---------------------------------------------------------------------------

#[flux::bench(group = "sum_rows_f32", args = [256, 1024])]
fn ndkern_sum_rows(b: &mut Bencher, size: usize) {
    let (client, a, mut out) = setup(size * size, size);
    b.iter(|| black_box(client.reduce_sum(&a, &mut out, size).unwrap()));
}

#[flux::bench(group = "max_rows_f32", args = [256, 1024])]
fn ndkern_max_rows(b: &mut Bencher, size: usize) {
    let (client, a, mut out) = setup(size * size, size);
    b.iter(|| black_box(client.reduce_max(&a, &mut out, size).unwrap()));
}

#[flux::synthetic(
    id = "sum_1m_ratio",
    formula = "ndkern_sum_1m / std_sum_1m",
    unit = "x"
)]
struct Sum1MRatio;

fn main() {
    fluxbench::run().unwrap();
}
