pub mod core;

mod http_targets {
    #[cfg(not(target_arch = "wasm32"))]
    mod native;
    #[cfg(target_arch = "wasm32")]
    mod wasm;
}
