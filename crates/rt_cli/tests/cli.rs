//! End-to-end runs of the `rt` binary.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn rt(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rt"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to run rt")
}

/// A fresh output path under the system temp dir.
fn output_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("rt-cli-{}-{}.bmp", std::process::id(), name));
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn demo_scene_renders_to_bmp() {
    let out = output_path("demo");
    let result = rt(&["--demo", out.to_str().unwrap(), "--width", "32", "--height", "24"]);

    assert_eq!(result.status.code(), Some(0), "{}", String::from_utf8_lossy(&result.stderr));
    let bytes = fs::read(&out).unwrap();
    assert_eq!(&bytes[0..2], b"BM");
    assert_eq!(u32::from_le_bytes(bytes[18..22].try_into().unwrap()), 32);
    assert_eq!(u32::from_le_bytes(bytes[22..26].try_into().unwrap()), 24);

    let _ = fs::remove_file(&out);
}

#[test]
fn multithreaded_supersampled_demo() {
    let out = output_path("mt");
    let result = rt(&[
        "--demo",
        out.to_str().unwrap(),
        "--width",
        "20",
        "--height",
        "20",
        "--runner",
        "mt",
        "--threads",
        "3",
        "--aa",
        "ssaa2x",
    ]);

    assert_eq!(result.status.code(), Some(0), "{}", String::from_utf8_lossy(&result.stderr));
    assert!(out.exists());
    let _ = fs::remove_file(&out);
}

#[test]
fn obj_scene_renders() {
    let dir = std::env::temp_dir();
    let scene = dir.join(format!("rt-cli-{}-quad.obj", std::process::id()));
    fs::write(
        &scene,
        "v -1 0 -1\nv 1 0 -1\nv 1 0 1\nv -1 0 1\nf 1 2 3 4\n",
    )
    .unwrap();
    let out = output_path("obj");

    let result = rt(&[scene.to_str().unwrap(), out.to_str().unwrap(), "--width", "16", "--height", "16"]);
    assert_eq!(result.status.code(), Some(0), "{}", String::from_utf8_lossy(&result.stderr));
    assert!(out.exists());

    let _ = fs::remove_file(&scene);
    let _ = fs::remove_file(&out);
}

#[test]
fn zero_width_is_rejected_without_output() {
    let out = output_path("zero-width");
    let result = rt(&["--demo", out.to_str().unwrap(), "--width", "0"]);

    assert_eq!(result.status.code(), Some(3));
    assert!(!out.exists());
}

#[test]
fn oversized_supersampled_image_is_rejected() {
    let out = output_path("oversized");
    let result = rt(&["--demo", out.to_str().unwrap(), "--width", "1073741824", "--aa", "ssaa4x"]);

    assert_eq!(result.status.code(), Some(3));
    assert!(!out.exists());
}

#[test]
fn unknown_anti_aliasing_is_rejected() {
    let out = output_path("bogus-aa");
    let result = rt(&["--demo", out.to_str().unwrap(), "--aa", "bogus"]);

    assert_eq!(result.status.code(), Some(4));
    assert!(!out.exists());
}

#[test]
fn unknown_runner_and_bad_thread_count() {
    let out = output_path("bad-runner");
    assert_eq!(rt(&["--demo", out.to_str().unwrap(), "--runner", "gpu"]).status.code(), Some(5));
    assert_eq!(rt(&["--demo", out.to_str().unwrap(), "--threads", "0"]).status.code(), Some(6));
    assert!(!out.exists());
}

#[test]
fn realtime_runner_fails_to_render() {
    let out = output_path("realtime");
    let result = rt(&["--demo", out.to_str().unwrap(), "--runner", "realtime"]);

    assert_eq!(result.status.code(), Some(2));
    assert!(!out.exists());
}

#[test]
fn missing_scene_file() {
    let out = output_path("missing");
    let result = rt(&["/nonexistent/rt/scene.obj", out.to_str().unwrap()]);

    assert_eq!(result.status.code(), Some(41));
    assert!(!out.exists());
}

#[test]
fn missing_arguments_is_usage_error() {
    assert_eq!(rt(&[]).status.code(), Some(1));
}
