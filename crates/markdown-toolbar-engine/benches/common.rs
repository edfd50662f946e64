// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\nParagraph with some content and a few words to wrap.\n\n- Bullet point\n- Another item\n\n> quoted line\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_lines(count: usize) -> String {
    (0..count)
        .map(|i| format!("line number {i} with text"))
        .collect::<Vec<_>>()
        .join("\n")
}
