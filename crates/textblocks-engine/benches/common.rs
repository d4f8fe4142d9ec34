// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_outline_text(sections: usize) -> String {
    let mut content = String::from("A short preface before any section.\n\n");

    for section in 1..=sections {
        content.push_str(&format!("{section} Section heading number {section}\n\n"));
        content.push_str("First paragraph with a handful of words in it.\n");
        content.push_str("Second paragraph directly below the first.\n\n");
        content.push_str("3 apples are not a title here because no gap follows\n");
        content.push_str("Closing paragraph for the section.\n\n");
    }

    content
}

#[allow(dead_code)]
pub fn generate_windows_outline_text(sections: usize) -> String {
    generate_outline_text(sections).replace('\n', "\r\n")
}
