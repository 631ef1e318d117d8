//! Unit tests for domain error types

use keyed_domain::Error;

#[test]
fn test_no_such_service_names_key_and_service() {
    let error = Error::no_such_service("IThing", "Thingy");
    assert_eq!(
        error.to_string(),
        "No service of type IThing with key Thingy could be found."
    );
    assert!(error.is_not_found());
}

#[test]
fn test_service_not_registered() {
    let error = Error::service_not_registered("IThing");
    match &error {
        Error::ServiceNotRegistered { service } => assert_eq!(service, "IThing"),
        _ => panic!("Expected ServiceNotRegistered error"),
    }
    assert!(error.is_not_found());
}

#[test]
fn test_activation_wraps_source() {
    let error = Error::activation("CatInTheHat", Error::no_such_service("IThing", "Thing1"));

    assert!(error.to_string().contains("CatInTheHat"));
    assert!(error.is_not_found());
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_contract_errors_are_not_not_found() {
    assert!(!Error::not_supported("bad arity").is_not_found());
    assert!(!Error::invalid_argument("missing").is_not_found());
    assert!(!Error::type_mismatch("String").is_not_found());
}

#[test]
fn test_configuration_error() {
    let error = Error::configuration("Container provider cannot be empty");
    assert!(error.to_string().starts_with("Configuration error:"));
}
