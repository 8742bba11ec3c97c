//! Build script for ndkern
//!
//! Compiles CUDA kernels to PTX when the cuda feature is enabled.
//!
//! # Requirements
//!
//! - CUDA Toolkit (nvcc compiler)
//! - Compute Capability 7.5+ (Turing architecture, sm_75)
//!
//! # Environment Variables
//!
//! - `CUDA_PATH`: Custom CUDA installation path (optional)

fn main() {
    // Only compile CUDA kernels when the cuda feature is enabled
    #[cfg(feature = "cuda")]
    compile_cuda_kernels();
}

#[cfg(feature = "cuda")]
fn compile_cuda_kernels() {
    use std::env;
    use std::path::PathBuf;
    use std::process::Command;

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("cargo sets OUT_DIR"));
    let kernels_dir = PathBuf::from("src/runtime/cuda/kernels");

    // Shared device helpers; every kernel file includes it
    let common = kernels_dir.join("common.cuh");
    println!("cargo:rerun-if-changed={}", common.display());

    let kernel_files = ["layout.cu", "elementwise.cu", "matmul.cu", "reduce.cu"];

    let nvcc = find_nvcc().unwrap_or_else(|| {
        eprintln!();
        eprintln!("=== CUDA COMPILATION ERROR ===");
        eprintln!();
        eprintln!("Could not find nvcc (NVIDIA CUDA Compiler).");
        eprintln!("Add nvcc to your PATH, or set CUDA_PATH, e.g.:");
        eprintln!("  export CUDA_PATH=/usr/local/cuda");
        eprintln!();
        panic!("nvcc not found - CUDA Toolkit must be installed for the 'cuda' feature");
    });

    for kernel_file in kernel_files {
        let cu_path = kernels_dir.join(kernel_file);
        let ptx_path = out_dir.join(kernel_file.replace(".cu", ".ptx"));

        println!("cargo:rerun-if-changed={}", cu_path.display());

        if !cu_path.exists() {
            panic!("CUDA kernel source not found: {}", cu_path.display());
        }

        // Target: sm_75 (Turing), IEEE math (no --use_fast_math)
        let output = Command::new(&nvcc)
            .args(["-ptx", "-O3", "-arch=sm_75", "-o"])
            .arg(&ptx_path)
            .arg(&cu_path)
            .output();

        match output {
            Ok(output) if output.status.success() => {}
            Ok(output) => {
                eprintln!();
                eprintln!("=== CUDA COMPILATION FAILED ===");
                eprintln!("Failed to compile: {}", kernel_file);
                eprintln!("{}", String::from_utf8_lossy(&output.stdout));
                eprintln!("{}", String::from_utf8_lossy(&output.stderr));
                panic!("nvcc compilation failed for {}", kernel_file);
            }
            Err(e) => {
                eprintln!("nvcc path: {}", nvcc);
                panic!("Failed to execute nvcc: {}", e);
            }
        }
    }

    // Export the OUT_DIR for the Rust code to find PTX files
    println!("cargo:rustc-env=CUDA_KERNEL_DIR={}", out_dir.display());
}

#[cfg(feature = "cuda")]
fn find_nvcc() -> Option<String> {
    use std::env;
    use std::path::PathBuf;
    use std::process::Command;

    // Check CUDA_PATH environment variable first
    if let Ok(cuda_path) = env::var("CUDA_PATH") {
        for name in ["nvcc", "nvcc.exe"] {
            let nvcc = PathBuf::from(&cuda_path).join("bin").join(name);
            if nvcc.exists() {
                return Some(nvcc.to_string_lossy().to_string());
            }
        }
    }

    let common_paths = [
        "/usr/local/cuda/bin/nvcc",
        "/usr/local/cuda-12/bin/nvcc",
        "/opt/cuda/bin/nvcc",
    ];
    for path in common_paths {
        if std::path::Path::new(path).exists() {
            return Some(path.to_string());
        }
    }

    // Fall back to whatever nvcc is on PATH
    if Command::new("nvcc").arg("--version").output().is_ok() {
        return Some("nvcc".to_string());
    }

    None
}
