fn main() {
    includable::app::cli::run();
}
