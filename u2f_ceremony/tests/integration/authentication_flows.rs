use u2f_ceremony::{AppId, DeviceErrorCode, SignResponse, U2fService};

use crate::common::{APP_ID, StubVerifier, register_response, registration, sign_response};

/// Register a device, then authenticate with it: the full two-ceremony
/// lifecycle, ending with an updated sign counter for the caller to
/// persist.
#[test]
fn test_register_then_authenticate_flow() {
    let verifier = StubVerifier::verifying("KH1", "PK1").with_counter(7);
    let service = U2fService::new(AppId::new(APP_ID).unwrap(), &verifier);

    let register_request = service.request_registration().unwrap();
    let registered = service
        .verify_registration(&register_request, &register_response())
        .unwrap();
    let device = registered.registration().clone();
    assert_eq!(device.sign_counter, 0);

    let sign_request = service.request_authentication(&device).unwrap();
    assert_eq!(sign_request.key_handle, "KH1");
    assert_eq!(sign_request.app_id, APP_ID);

    let result = service
        .verify_authentication(&sign_request, &sign_response("KH1"), &device)
        .unwrap();

    assert!(result.was_successful());
    let updated = result.registration();
    assert_eq!(updated.key_handle, "KH1");
    assert_eq!(updated.public_key, "PK1");
    assert_eq!(updated.sign_counter, 7);
}

/// An authentication response with errorCode 4 (DEVICE_INELIGIBLE) means
/// the device did not recognize the key handle; no cryptographic work is
/// spent on it.
#[test]
fn test_device_ineligible_error_round_trip() {
    let verifier = StubVerifier::verifying("KH1", "PK1");
    let service = U2fService::new(AppId::new(APP_ID).unwrap(), &verifier);

    let device = registration("KH1", "PK1", 3);
    let sign_request = service.request_authentication(&device).unwrap();
    let calls_after_build = verifier.calls.get();

    let response = SignResponse {
        error_code: Some(4),
        ..SignResponse::default()
    };

    let result = service
        .verify_authentication(&sign_request, &response, &device)
        .unwrap();

    assert!(result.did_device_report_any_error());
    assert!(result.was_key_handle_unknown_to_device());
    assert_eq!(result.device_error_code(), DeviceErrorCode::DeviceIneligible);
    assert_eq!(verifier.calls.get(), calls_after_build);
}

/// A stale counter turns a cryptographically valid assertion into a
/// rejection; the stored registration is left untouched.
#[test]
fn test_replayed_counter_is_rejected() {
    let verifier = StubVerifier::verifying("KH1", "PK1").with_counter(3);
    let service = U2fService::new(AppId::new(APP_ID).unwrap(), &verifier);

    let device = registration("KH1", "PK1", 3);
    let sign_request = service.request_authentication(&device).unwrap();

    let result = service
        .verify_authentication(&sign_request, &sign_response("KH1"), &device)
        .unwrap();

    assert!(result.was_sign_counter_too_low());
    assert!(!result.was_successful());
}
