fn main() {
    if let Err(err) = workspace_notes::entry() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
