use std::process::Command;

#[test]
fn headless_session_exits_cleanly() {
    let bin = env!("CARGO_BIN_EXE_flappy-grid");
    let status = Command::new(bin)
        .env("FLAPPY_HEADLESS", "1")
        .env("FLAPPY_HEADLESS_TICKS", "40")
        .env("FLAPPY_SEED", "11")
        .env("RUST_LOG", "off")
        .status()
        .expect("failed to run flappy-grid binary");
    assert!(status.success(), "headless run failed");
}

#[test]
fn invalid_height_fails_fast() {
    let bin = env!("CARGO_BIN_EXE_flappy-grid");
    let output = Command::new(bin)
        .env("FLAPPY_HEADLESS", "1")
        .env("FLAPPY_HEIGHT", "2")
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run flappy-grid binary");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("below the minimum"), "stderr: {stderr}");
}

#[test]
fn oversized_height_fails_fast() {
    let bin = env!("CARGO_BIN_EXE_flappy-grid");
    let output = Command::new(bin)
        .env("FLAPPY_HEADLESS", "1")
        .env("FLAPPY_HEIGHT", "9223372036854775807")
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run flappy-grid binary");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("above the maximum"), "stderr: {stderr}");
    assert!(!stderr.contains("panicked"), "stderr: {stderr}");
}
