//! Tests for response encoding and decoding
//!
//! These tests verify:
//! - Text layout and one-digit value formatting
//! - Failure sentinels on the wire
//! - Buffer capacity checks
//! - Lenient decoding of unknown codes and partial messages

use meteo::protocol::{
    decode_response, encode_response, format_response, Status, WeatherKind, WeatherResponse,
    BUFFER_SIZE,
};
use meteo::MeteoError;

// =============================================================================
// Status and Constructors
// =============================================================================

#[test]
fn test_status_codes() {
    assert_eq!(Status::Success.code(), 0);
    assert_eq!(Status::CityNotFound.code(), 1);
    assert_eq!(Status::InvalidRequest.code(), 2);

    assert_eq!(Status::from_code(1), Some(Status::CityNotFound));
    assert_eq!(Status::from_code(3), None);
}

#[test]
fn test_failure_uses_sentinels() {
    let response = WeatherResponse::city_not_found();
    assert_eq!(response.status(), Some(Status::CityNotFound));
    assert_eq!(response.kind, WeatherResponse::NO_KIND);
    assert_eq!(response.value, 0.0);
    assert!(!response.is_success());

    let response = WeatherResponse::invalid_request();
    assert_eq!(response.status(), Some(Status::InvalidRequest));
    assert_eq!(response.kind(), None);
}

#[test]
fn test_success_constructor() {
    let response = WeatherResponse::success(WeatherKind::Wind, 12.5);
    assert!(response.is_success());
    assert_eq!(response.kind(), Some(WeatherKind::Wind));
    assert_eq!(response.kind, b'w');
}

// =============================================================================
// Formatting
// =============================================================================

#[test]
fn test_format_success() {
    let response = WeatherResponse::success(WeatherKind::Temperature, 23.4);
    assert_eq!(format_response(&response), "0 t 23.4");
}

#[test]
fn test_format_one_fractional_digit() {
    let cases = [
        (WeatherKind::Humidity, 55.0, "0 h 55.0"),
        (WeatherKind::Pressure, 1013.26, "0 p 1013.3"),
        (WeatherKind::Temperature, -3.04, "0 t -3.0"),
        (WeatherKind::Wind, 100.0, "0 w 100.0"),
    ];

    for (kind, value, expected) in cases {
        let response = WeatherResponse::success(kind, value);
        assert_eq!(format_response(&response), expected);
    }
}

#[test]
fn test_format_failure_carries_nul_kind() {
    let response = WeatherResponse::city_not_found();
    assert_eq!(format_response(&response), "1 \0 0.0");
}

// =============================================================================
// Encoding
// =============================================================================

#[test]
fn test_encode_success() {
    let response = WeatherResponse::success(WeatherKind::Temperature, 23.4);
    let bytes = encode_response(&response, BUFFER_SIZE).unwrap();
    assert_eq!(&bytes[..], b"0 t 23.4");
}

#[test]
fn test_encode_failure_stops_at_sentinel() {
    let bytes = encode_response(&WeatherResponse::city_not_found(), BUFFER_SIZE).unwrap();
    assert_eq!(&bytes[..], b"1 ");

    let bytes = encode_response(&WeatherResponse::invalid_request(), BUFFER_SIZE).unwrap();
    assert_eq!(&bytes[..], b"2 ");
}

#[test]
fn test_encode_buffer_too_small() {
    let response = WeatherResponse::success(WeatherKind::Temperature, 23.4);

    // "0 t 23.4" is 8 bytes and needs one more for the terminator
    match encode_response(&response, 8) {
        Err(MeteoError::BufferTooSmall { needed, capacity }) => {
            assert_eq!(needed, 9);
            assert_eq!(capacity, 8);
        }
        other => panic!("Expected BufferTooSmall, got {:?}", other),
    }

    assert!(encode_response(&response, 9).is_ok());
}

#[test]
fn test_encode_failure_capacity_counts_full_text() {
    // The sentinel text "1 \0 0.0" is checked before it is cut
    let response = WeatherResponse::city_not_found();
    assert!(encode_response(&response, 7).is_err());
    assert!(encode_response(&response, 8).is_ok());
}

// =============================================================================
// Decoding
// =============================================================================

#[test]
fn test_encode_decode_success() {
    let response = WeatherResponse::success(WeatherKind::Temperature, 23.4);
    let bytes = encode_response(&response, BUFFER_SIZE).unwrap();
    let decoded = decode_response(&bytes).unwrap();

    assert_eq!(decoded.status, 0);
    assert_eq!(decoded.kind, b't');
    assert!((decoded.value - 23.4).abs() < 0.05);
}

#[test]
fn test_encode_decode_rounds_value() {
    let response = WeatherResponse::success(WeatherKind::Pressure, 987.654);
    let bytes = encode_response(&response, BUFFER_SIZE).unwrap();
    let decoded = decode_response(&bytes).unwrap();

    assert_eq!(decoded.kind(), Some(WeatherKind::Pressure));
    assert!((decoded.value - 987.654).abs() < 0.05);
}

#[test]
fn test_decode_failure_wire_form() {
    let decoded = decode_response(b"1 ").unwrap();
    assert_eq!(decoded.status(), Some(Status::CityNotFound));
    assert_eq!(decoded.kind, WeatherResponse::NO_KIND);
    assert_eq!(decoded.value, 0.0);

    let decoded = decode_response(b"2 \0").unwrap();
    assert_eq!(decoded.status(), Some(Status::InvalidRequest));
}

#[test]
fn test_decode_with_terminator() {
    let decoded = decode_response(b"0 h 55.5\0trailing").unwrap();
    assert_eq!(decoded.kind(), Some(WeatherKind::Humidity));
    assert!((decoded.value - 55.5).abs() < 0.05);
}

#[test]
fn test_decode_passes_unknown_codes_through() {
    let decoded = decode_response(b"7 z 1.5").unwrap();
    assert_eq!(decoded.status, 7);
    assert_eq!(decoded.status(), None);
    assert_eq!(decoded.kind, b'z');
    assert_eq!(decoded.kind(), None);
}

#[test]
fn test_decode_garbled_value_defaults_to_zero() {
    let decoded = decode_response(b"0 t abc").unwrap();
    assert_eq!(decoded.kind(), Some(WeatherKind::Temperature));
    assert_eq!(decoded.value, 0.0);
}

#[test]
fn test_decode_extra_whitespace() {
    let decoded = decode_response(b"  0   w   42.0  ").unwrap();
    assert_eq!(decoded.status(), Some(Status::Success));
    assert_eq!(decoded.kind(), Some(WeatherKind::Wind));
    assert!((decoded.value - 42.0).abs() < 0.05);
}

#[test]
fn test_decode_without_status_fails() {
    assert!(matches!(decode_response(b""), Err(MeteoError::Protocol(_))));
    assert!(matches!(decode_response(b"abc"), Err(MeteoError::Protocol(_))));
    assert!(matches!(decode_response(b"-1 t 2.0"), Err(MeteoError::Protocol(_))));
}

#[test]
fn test_decode_status_overflow_fails() {
    assert!(matches!(
        decode_response(b"99999999999 t 1.0"),
        Err(MeteoError::Protocol(_))
    ));
}
