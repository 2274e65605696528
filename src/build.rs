// build.rs
// Embeds the window icon into the Windows executable; no-op elsewhere.
fn main() {
    println!("cargo:rerun-if-changed=assets/crawllab.ico");

    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/crawllab.ico");
        if let Err(e) = res.compile() {
            panic!("failed to embed icon: {e}");
        }
    }
}
