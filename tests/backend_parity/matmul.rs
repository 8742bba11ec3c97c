// Backend parity tests for MatmulOps

use ndkern::prelude::*;

use crate::backend_parity::helpers::{assert_parity_f32, with_cuda_backend};
use crate::common::{create_cpu_client, pseudo_random, upload};

#[test]
fn test_matmul_parity() {
    let (cpu, cpu_device) = create_cpu_client();
    with_cuda_backend(|cuda, cuda_device| {
        for &(m, n, p) in &[(7, 7, 7), (16, 16, 16), (33, 17, 50), (1, 64, 3), (64, 1, 64)] {
            let a = pseudo_random(m * n, 21);
            let b = pseudo_random(n * p, 22);

            let ca = upload::<CpuRuntime>(&a, &cpu_device);
            let cb = upload::<CpuRuntime>(&b, &cpu_device);
            let mut cout = DeviceBuffer::<CpuRuntime>::new(m * p, &cpu_device).unwrap();
            cpu.matmul(&ca, &cb, &mut cout, m, n, p).unwrap();
            let expected = cout.to_vec().unwrap();

            for strategy in [MatmulStrategy::Naive, MatmulStrategy::Tiled] {
                let client = cuda.clone().with_matmul_strategy(strategy);
                let ga = upload::<CudaRuntime>(&a, &cuda_device);
                let gb = upload::<CudaRuntime>(&b, &cuda_device);
                let mut gout = DeviceBuffer::<CudaRuntime>::new(m * p, &cuda_device).unwrap();
                client.matmul(&ga, &gb, &mut gout, m, n, p).unwrap();

                let label = format!("matmul {:?} {}x{}x{}", strategy, m, n, p);
                assert_parity_f32(&gout.to_vec().unwrap(), &expected, &label);
            }
        }
    });
}
