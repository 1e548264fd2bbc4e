fn main() {
    llmprompts::app::cli::run();
}
