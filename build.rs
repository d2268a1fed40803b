fn main() {
    // tauri::generate_context! 在编译期会校验 `frontendDist` 路径是否存在。
    // 只跑 `cargo check/test` 时目录可能被清理，这里提前创建。
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let dist_dir = std::path::PathBuf::from(manifest_dir).join("dist");
        let _ = std::fs::create_dir_all(dist_dir);
    }
    tauri_build::build()
}
