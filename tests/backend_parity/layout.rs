// Backend parity tests for LayoutOps

use ndkern::prelude::*;

use crate::backend_parity::helpers::{assert_parity_f32, with_cuda_backend};
use crate::common::{create_cpu_client, sentinel, upload};

fn views() -> Vec<(StridedLayout, usize)> {
    vec![
        // transpose of 3x4
        (StridedLayout::new(&[4, 3], &[1, 4], 0).unwrap(), 12),
        // interior 2x2 block of 4x4
        (StridedLayout::new(&[2, 2], &[4, 1], 5).unwrap(), 16),
        // broadcast row
        (StridedLayout::new(&[5, 3], &[0, 1], 0).unwrap(), 3),
        // reversed
        (StridedLayout::new(&[6], &[-1], 5).unwrap(), 6),
        // eight dimensions of size two
        (StridedLayout::contiguous(&[2; 8]).unwrap(), 256),
    ]
}

#[test]
fn test_compact_parity() {
    let (cpu, cpu_device) = create_cpu_client();
    with_cuda_backend(|cuda, cuda_device| {
        for (layout, len) in views() {
            let data: Vec<f32> = (0..len).map(|x| x as f32).collect();

            let csrc = upload::<CpuRuntime>(&data, &cpu_device);
            let mut cdst = DeviceBuffer::<CpuRuntime>::new(layout.numel(), &cpu_device).unwrap();
            cpu.compact(&csrc, &mut cdst, &layout).unwrap();

            let gsrc = upload::<CudaRuntime>(&data, &cuda_device);
            let mut gdst = DeviceBuffer::<CudaRuntime>::new(layout.numel(), &cuda_device).unwrap();
            cuda.compact(&gsrc, &mut gdst, &layout).unwrap();

            assert_parity_f32(&gdst.to_vec().unwrap(), &cdst.to_vec().unwrap(), "compact");
        }
    });
}

#[test]
fn test_setitem_parity() {
    let (cpu, cpu_device) = create_cpu_client();
    with_cuda_backend(|cuda, cuda_device| {
        // broadcast views alias addresses, so only injective views here
        for (layout, len) in views().into_iter().filter(|(l, _)| l.strides().as_slice()[0] != 0) {
            let values: Vec<f32> = (0..layout.numel()).map(|x| 100.0 + x as f32).collect();

            let csrc = upload::<CpuRuntime>(&values, &cpu_device);
            let mut cdst = sentinel::<CpuRuntime>(len, -1.0, &cpu_device);
            cpu.ewise_setitem(&csrc, &mut cdst, &layout).unwrap();
            cpu.scalar_setitem(layout.numel(), 7.0, &mut cdst, &layout)
                .unwrap();

            let gsrc = upload::<CudaRuntime>(&values, &cuda_device);
            let mut gdst = sentinel::<CudaRuntime>(len, -1.0, &cuda_device);
            cuda.ewise_setitem(&gsrc, &mut gdst, &layout).unwrap();
            let mid = gdst.to_vec().unwrap();
            cuda.scalar_setitem(layout.numel(), 7.0, &mut gdst, &layout)
                .unwrap();

            let mut expected_mid = vec![-1.0f32; len];
            for (g, v) in values.iter().enumerate() {
                expected_mid[layout.offset_of(g)] = *v;
            }
            assert_parity_f32(&mid, &expected_mid, "ewise_setitem");
            assert_parity_f32(&gdst.to_vec().unwrap(), &cdst.to_vec().unwrap(), "scalar_setitem");
        }
    });
}

#[test]
fn test_fill_parity() {
    with_cuda_backend(|cuda, cuda_device| {
        let mut buf = DeviceBuffer::<CudaRuntime>::new(1025, &cuda_device).unwrap();
        cuda.fill(&mut buf, 0.5).unwrap();
        assert_parity_f32(&buf.to_vec().unwrap(), &[0.5; 1025], "fill");
    });
}
