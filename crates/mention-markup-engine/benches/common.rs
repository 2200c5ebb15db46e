// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_post(size: usize) -> String {
    let base = "Buorre beaivi @[Kari Nordmann](user:42) og @Ola! Sjekk #Sápmi og @[Tromsø](place:tromso) #joik\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_plain_text(size: usize) -> String {
    "Vanlig tekst uten noen markering i det hele tatt. ".repeat(size)
}
