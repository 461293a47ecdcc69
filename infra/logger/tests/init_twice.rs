use bemkit_logger::{Logger, LoggerError};

#[test]
fn second_init_reports_existing_subscriber() {
    let _logger = Logger::builder().name("bemkit-first").init().expect("first init should succeed");

    let err = Logger::builder().name("bemkit-second").init().expect_err("second init should fail");

    assert!(matches!(err, LoggerError::Subscriber { .. }), "{err}");
}
