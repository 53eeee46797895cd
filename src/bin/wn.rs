//! Short binary name (`wn`) that forwards to the `workspace_notes` library.

fn main() {
    if let Err(err) = workspace_notes::entry() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
