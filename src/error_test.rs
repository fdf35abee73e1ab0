use super::*;

#[test]
fn test_api_error_display() {
    let error = RacError::Api {
        status: 404,
        message: "Not Found".to_string(),
    };
    assert_eq!(error.to_string(), "API error: Not Found (status: 404)");
}

#[test]
fn test_is_unauthorized_401_and_403() {
    for status in [401, 403] {
        let error = RacError::Api {
            status,
            message: String::new(),
        };
        assert!(error.is_unauthorized());
    }
}

#[test]
fn test_is_unauthorized_other_status() {
    let error = RacError::Api {
        status: 500,
        message: String::new(),
    };
    assert!(!error.is_unauthorized());
    assert!(!RacError::Cancelled.is_unauthorized());
}

#[test]
fn test_table_message_forbidden() {
    let error = RacError::Api {
        status: 403,
        message: "{\"detail\":\"nope\"}".to_string(),
    };
    assert_eq!(
        error.table_message(),
        "Not authorized to list endpoints (status: 403)"
    );
}

#[test]
fn test_table_message_server_error() {
    let error = RacError::Api {
        status: 502,
        message: "Bad Gateway".to_string(),
    };
    assert_eq!(error.table_message(), "Failed to load endpoints (status: 502)");
}

#[test]
fn test_table_message_falls_back_to_display() {
    assert_eq!(
        RacError::InvalidPage(0).table_message(),
        "Invalid page number: 0. Pages start at 1"
    );
}
