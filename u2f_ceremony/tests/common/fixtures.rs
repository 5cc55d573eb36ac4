use u2f_ceremony::{RegisterResponse, Registration, SignResponse};

pub const APP_ID: &str = "https://example.test/appid";

pub fn register_response() -> RegisterResponse {
    RegisterResponse {
        registration_data: "registration-data".to_string(),
        client_data: "client-data".to_string(),
        error_code: None,
    }
}

pub fn sign_response(key_handle: &str) -> SignResponse {
    SignResponse {
        key_handle: key_handle.to_string(),
        signature_data: "signature-data".to_string(),
        client_data: "client-data".to_string(),
        error_code: None,
    }
}

pub fn registration(key_handle: &str, public_key: &str, sign_counter: u32) -> Registration {
    Registration {
        key_handle: key_handle.to_string(),
        public_key: public_key.to_string(),
        sign_counter,
    }
}
