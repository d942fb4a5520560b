//! Binary entrypoint for the browser-hosted planner application.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    planner_site::mount();
}

#[cfg(not(all(target_arch = "wasm32", feature = "csr")))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `planner_app` for wasm32 with the `csr` feature."
    );
}
