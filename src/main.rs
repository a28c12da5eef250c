fn main() {
    capver::app::startup::startup();
}
