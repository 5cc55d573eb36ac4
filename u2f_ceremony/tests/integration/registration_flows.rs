use u2f_ceremony::{AppId, DeviceErrorCode, RegisterResponse, U2fService};

use crate::common::{APP_ID, StubVerifier, register_response};

/// Full registration ceremony: build the request, answer it with a valid
/// response, and verify that the registered device carries the verifier's
/// key material with a sign counter of 0.
#[test]
fn test_registration_ceremony_end_to_end() {
    let service = U2fService::new(
        AppId::new(APP_ID).unwrap(),
        StubVerifier::verifying("KH1", "PK1"),
    );

    let request = service.request_registration().unwrap();
    assert_eq!(request.version, "U2F_V2");
    assert_eq!(request.app_id, APP_ID);
    assert_eq!(request.challenge, "integration-challenge");

    let result = service
        .verify_registration(&request, &register_response())
        .unwrap();

    assert!(result.was_successful());
    let registration = result.registration();
    assert_eq!(registration.public_key, "PK1");
    assert_eq!(registration.key_handle, "KH1");
    assert_eq!(registration.sign_counter, 0);
}

#[test]
fn test_registration_with_foreign_app_id_is_rejected_cheaply() {
    let verifier = StubVerifier::verifying("KH1", "PK1");
    let service = U2fService::new(AppId::new(APP_ID).unwrap(), &verifier);

    let mut request = service.request_registration().unwrap();
    let calls_after_build = verifier.calls.get();
    request.app_id = "https://phisher.example.test/appid".to_string();

    let result = service
        .verify_registration(&request, &register_response())
        .unwrap();

    assert!(result.did_app_ids_mismatch());
    assert_eq!(verifier.calls.get(), calls_after_build);
}

#[test]
fn test_registration_device_error_round_trip() {
    let service = U2fService::new(
        AppId::new(APP_ID).unwrap(),
        StubVerifier::verifying("KH1", "PK1"),
    );

    let request = service.request_registration().unwrap();
    let response = RegisterResponse {
        error_code: Some(4),
        ..RegisterResponse::default()
    };

    let result = service.verify_registration(&request, &response).unwrap();

    assert!(result.did_device_report_any_error());
    assert!(result.was_device_already_registered());
    assert_eq!(result.device_error_code(), DeviceErrorCode::DeviceIneligible);
}
