use bemkit_logger::Logger;

#[test]
fn console_only_logger_has_no_file_guard() {
    let logger = Logger::builder()
        .name("bemkit-console")
        .verbosity(1)
        .ansi(false)
        .init()
        .expect("logger should initialize");

    assert!(logger.guard().is_none());
    assert!(logger.directory().is_none());
}
