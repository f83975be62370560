fn main() {
    #[cfg(target_arch = "wasm32")]
    rhweb_frontend::boot();
}
