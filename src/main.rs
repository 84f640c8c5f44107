fn main() {
    #[cfg(feature = "cli")]
    base85::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("base85: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
