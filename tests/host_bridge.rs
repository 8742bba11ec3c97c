//! Integration tests for buffer lifetime and host transfers

mod common;

use common::{create_cpu_client, upload};
use ndkern::error::Error;
use ndkern::prelude::*;
use ndkern::runtime::cpu::CpuRuntime;

#[test]
fn test_roundtrip_compact() {
    let (_client, device) = create_cpu_client();
    let host = HostArray::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    let mut buf = DeviceBuffer::<CpuRuntime>::new(6, &device).unwrap();

    buf.from_host(&host).unwrap();
    let back = buf.to_host(&StridedLayout::contiguous(&[2, 3]).unwrap()).unwrap();
    assert_eq!(back.shape(), &[2, 3]);
    assert_eq!(back.strides(), &[3, 1]);
    assert_eq!(back.byte_strides().as_slice(), &[12, 4]);
    assert!(back.is_contiguous());
    assert_eq!(back.to_vec(), host.to_vec());
}

#[test]
fn test_to_host_copies_whole_buffer_for_views() {
    let (_client, device) = create_cpu_client();
    let buf = upload::<CpuRuntime>(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0], &device);
    // column 1 of a 3x2 matrix
    let view = buf.to_host(&StridedLayout::new(&[3], &[2], 1).unwrap()).unwrap();

    assert_eq!(view.as_raw().len(), 6);
    assert_eq!(view.offset(), 1);
    assert_eq!(view.to_vec(), vec![1.0, 3.0, 5.0]);
    assert_eq!(view.get(&[1]), Some(3.0));
}

#[test]
fn test_to_host_waits_for_pending_writes() {
    let (client, device) = create_cpu_client();
    let a = upload::<CpuRuntime>(&[1.0, 2.0], &device);
    let mut out = DeviceBuffer::<CpuRuntime>::new(2, &device).unwrap();

    client.scalar_add(&a, 10.0, &mut out).unwrap();
    assert!(out.has_pending_work());
    let host = out.to_host(&StridedLayout::contiguous(&[2]).unwrap()).unwrap();
    assert!(!out.has_pending_work());
    assert_eq!(host.into_raw(), vec![11.0, 12.0]);
}

#[test]
fn test_from_host_length_mismatch() {
    let (_client, device) = create_cpu_client();
    let host = HostArray::from_vec(vec![1.0; 4], &[4]).unwrap();
    let mut buf = DeviceBuffer::<CpuRuntime>::new(3, &device).unwrap();
    assert!(matches!(buf.from_host(&host), Err(Error::Transfer(_))));
}

#[test]
fn test_release_after_pending_work() {
    let (client, device) = create_cpu_client();
    let mut buf = DeviceBuffer::<CpuRuntime>::new(16, &device).unwrap();
    client.fill(&mut buf, 3.0).unwrap();
    buf.release().unwrap();
}

#[test]
fn test_many_buffers_dropped() {
    let (client, device) = create_cpu_client();
    for i in 0..64 {
        let mut buf = DeviceBuffer::<CpuRuntime>::new(i * 17 + 1, &device).unwrap();
        client.fill(&mut buf, i as f32).unwrap();
        assert_eq!(buf.to_vec().unwrap()[0], i as f32);
    }
}

#[test]
fn test_debug_format_names_device() {
    let (_client, device) = create_cpu_client();
    let buf = DeviceBuffer::<CpuRuntime>::new(2, &device).unwrap();
    let text = format!("{:?}", buf);
    assert!(text.contains("DeviceBuffer"));
    assert!(text.contains("cpu"));
}
