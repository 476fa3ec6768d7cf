// Stamps the compile time into BUILD_DATE for the annokit startup log line.
fn main() {
    let stamp = chrono::Utc::now().format("%Y-%m-%d %H:%M UTC");
    println!("cargo:rustc-env=BUILD_DATE={}", stamp);
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=Cargo.toml");
}
