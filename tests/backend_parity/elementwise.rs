// Backend parity tests for EwiseOps, ScalarOps and UnaryOps

use ndkern::prelude::*;

use crate::backend_parity::helpers::{assert_parity_f32, with_cuda_backend};
use crate::common::{create_cpu_client, pseudo_random, upload};

const N: usize = 1000;

#[test]
fn test_ewise_parity() {
    let a = pseudo_random(N, 1);
    let mut b = pseudo_random(N, 2);
    // exercise the equality branch
    b[..10].copy_from_slice(&a[..10]);

    let (cpu, cpu_device) = create_cpu_client();
    with_cuda_backend(|cuda, cuda_device| {
        for op in EwiseOp::ALL {
            let ca = upload::<CpuRuntime>(&a, &cpu_device);
            let cb = upload::<CpuRuntime>(&b, &cpu_device);
            let mut cout = DeviceBuffer::<CpuRuntime>::new(N, &cpu_device).unwrap();
            cpu.ewise(op, &ca, &cb, &mut cout).unwrap();

            let ga = upload::<CudaRuntime>(&a, &cuda_device);
            let gb = upload::<CudaRuntime>(&b, &cuda_device);
            let mut gout = DeviceBuffer::<CudaRuntime>::new(N, &cuda_device).unwrap();
            cuda.ewise(op, &ga, &gb, &mut gout).unwrap();

            assert_parity_f32(&gout.to_vec().unwrap(), &cout.to_vec().unwrap(), op.name());
        }
    });
}

#[test]
fn test_scalar_parity() {
    // positive base so power stays real
    let a: Vec<f32> = pseudo_random(N, 3).iter().map(|x| x.abs() + 0.5).collect();

    let (cpu, cpu_device) = create_cpu_client();
    with_cuda_backend(|cuda, cuda_device| {
        for op in ScalarOp::ALL {
            let ca = upload::<CpuRuntime>(&a, &cpu_device);
            let mut cout = DeviceBuffer::<CpuRuntime>::new(N, &cpu_device).unwrap();
            cpu.scalar(op, &ca, 1.25, &mut cout).unwrap();

            let ga = upload::<CudaRuntime>(&a, &cuda_device);
            let mut gout = DeviceBuffer::<CudaRuntime>::new(N, &cuda_device).unwrap();
            cuda.scalar(op, &ga, 1.25, &mut gout).unwrap();

            assert_parity_f32(&gout.to_vec().unwrap(), &cout.to_vec().unwrap(), op.name());
        }
    });
}

#[test]
fn test_unary_parity() {
    let a: Vec<f32> = pseudo_random(N, 4).iter().map(|x| x * 4.0).collect();

    let (cpu, cpu_device) = create_cpu_client();
    with_cuda_backend(|cuda, cuda_device| {
        for op in UnaryOp::ALL {
            let ca = upload::<CpuRuntime>(&a, &cpu_device);
            let mut cout = DeviceBuffer::<CpuRuntime>::new(N, &cpu_device).unwrap();
            cpu.unary(op, &ca, &mut cout).unwrap();

            let ga = upload::<CudaRuntime>(&a, &cuda_device);
            let mut gout = DeviceBuffer::<CudaRuntime>::new(N, &cuda_device).unwrap();
            cuda.unary(op, &ga, &mut gout).unwrap();

            assert_parity_f32(&gout.to_vec().unwrap(), &cout.to_vec().unwrap(), op.name());
        }
    });
}
