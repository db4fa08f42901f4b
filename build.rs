use chrono::Datelike;

fn main() {
    // Capture the build year for the footer copyright line
    let year = chrono::Utc::now().year();

    println!("cargo:rustc-env=BUILD_YEAR={}", year);

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
