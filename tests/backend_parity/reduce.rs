// Backend parity tests for ReduceOps

use ndkern::prelude::*;

use crate::backend_parity::helpers::{assert_parity_f32, with_cuda_backend};
use crate::common::{create_cpu_client, pseudo_random, upload};

#[test]
fn test_reduce_parity() {
    let (cpu, cpu_device) = create_cpu_client();
    with_cuda_backend(|cuda, cuda_device| {
        for &(segments, size) in &[(2, 2), (300, 7), (1, 1000), (1000, 1)] {
            let a = pseudo_random(segments * size, 31);
            for op in [ReduceOp::Max, ReduceOp::Sum] {
                let ca = upload::<CpuRuntime>(&a, &cpu_device);
                let mut cout = DeviceBuffer::<CpuRuntime>::new(segments, &cpu_device).unwrap();
                cpu.reduce(op, &ca, &mut cout, size).unwrap();

                let ga = upload::<CudaRuntime>(&a, &cuda_device);
                let mut gout = DeviceBuffer::<CudaRuntime>::new(segments, &cuda_device).unwrap();
                cuda.reduce(op, &ga, &mut gout, size).unwrap();

                assert_parity_f32(&gout.to_vec().unwrap(), &cout.to_vec().unwrap(), op.name());
            }
        }
    });
}
