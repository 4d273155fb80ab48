fn main() {
    snipgen_cli::run_main();
}
