#![allow(dead_code)]

use fluxbench::{Bencher, flux};
use std::hint::black_box;

use ndkern::prelude::*;
use ndkern::runtime::cpu::{CpuDevice, CpuRuntime};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn rand_vec_f32(n: usize) -> Vec<f32> {
    (0..n)
        .map(|i| ((i * 17 + 3) % 1000) as f32 / 1000.0)
        .collect()
}

fn upload(n: usize, device: &CpuDevice) -> DeviceBuffer<CpuRuntime> {
    DeviceBuffer::<CpuRuntime>::from_slice(&rand_vec_f32(n), device).unwrap()
}

// ---------------------------------------------------------------------------
// Binary and scalar maps
// ---------------------------------------------------------------------------

#[flux::bench(group = "ewise_add_f32", args = [1_000, 100_000, 1_000_000])]
fn ndkern_ewise_add(b: &mut Bencher, n: usize) {
    let device = CpuDevice::new();
    let client = CpuRuntime::default_client(&device);
    let x = upload(n, &device);
    let y = upload(n, &device);
    let mut out = DeviceBuffer::<CpuRuntime>::new(n, &device).unwrap();
    b.iter(|| black_box(client.ewise_add(&x, &y, &mut out).unwrap()));
}

#[flux::bench(group = "ewise_add_f32", args = [1_000, 100_000, 1_000_000])]
fn std_zip_add(b: &mut Bencher, n: usize) {
    let x = rand_vec_f32(n);
    let y = rand_vec_f32(n);
    b.iter(|| {
        black_box(
            x.iter()
                .zip(&y)
                .map(|(a, b)| a + b)
                .collect::<Vec<f32>>(),
        )
    });
}

#[flux::bench(group = "scalar_power_f32", args = [100_000, 1_000_000])]
fn ndkern_scalar_power(b: &mut Bencher, n: usize) {
    let device = CpuDevice::new();
    let client = CpuRuntime::default_client(&device);
    let x = upload(n, &device);
    let mut out = DeviceBuffer::<CpuRuntime>::new(n, &device).unwrap();
    b.iter(|| black_box(client.scalar_power(&x, 1.5, &mut out).unwrap()));
}

#[flux::bench(group = "unary_f32", args = [100_000, 1_000_000])]
fn ndkern_tanh(b: &mut Bencher, n: usize) {
    let device = CpuDevice::new();
    let client = CpuRuntime::default_client(&device);
    let x = upload(n, &device);
    let mut out = DeviceBuffer::<CpuRuntime>::new(n, &device).unwrap();
    b.iter(|| black_box(client.ewise_tanh(&x, &mut out).unwrap()));
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

#[flux::bench(group = "compact_transpose_f32", args = [256, 1024])]
fn ndkern_compact_transpose(b: &mut Bencher, size: usize) {
    let device = CpuDevice::new();
    let client = CpuRuntime::default_client(&device);
    let src = upload(size * size, &device);
    let mut dst = DeviceBuffer::<CpuRuntime>::new(size * size, &device).unwrap();
    let layout = StridedLayout::new(&[size, size], &[1, size as isize], 0).unwrap();
    b.iter(|| black_box(client.compact(&src, &mut dst, &layout).unwrap()));
}

#[flux::bench(group = "compact_transpose_f32", args = [256, 1024])]
fn std_transpose(b: &mut Bencher, size: usize) {
    let src = rand_vec_f32(size * size);
    b.iter(|| {
        let mut out = vec![0.0f32; size * size];
        for r in 0..size {
            for c in 0..size {
                out[r * size + c] = src[c * size + r];
            }
        }
        black_box(out)
    });
}

// ---------------------------------------------------------------------------
// CUDA benchmarks
// ---------------------------------------------------------------------------

#[cfg(feature = "cuda")]
#[flux::bench(group = "ewise_add_f32", args = [1_000_000])]
fn cuda_ewise_add(b: &mut Bencher, n: usize) {
    let device = CudaDevice::new(0);
    let client = CudaRuntime::default_client(&device);
    let data = rand_vec_f32(n);
    let x = DeviceBuffer::<CudaRuntime>::from_slice(&data, &device).unwrap();
    let y = DeviceBuffer::<CudaRuntime>::from_slice(&data, &device).unwrap();
    let mut out = DeviceBuffer::<CudaRuntime>::new(n, &device).unwrap();
    b.iter(|| {
        client.ewise_add(&x, &y, &mut out).unwrap();
        black_box(out.wait().unwrap())
    });
}

fn main() {
    fluxbench::run().unwrap();
}
