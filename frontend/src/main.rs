fn main() {
    reset_password_frontend::run();
}
