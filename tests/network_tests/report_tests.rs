//! Tests for client-side rendering

use std::net::{IpAddr, Ipv4Addr};

use meteo::protocol::{WeatherKind, WeatherResponse};
use meteo::report::{render, Report, CITY_NOT_AVAILABLE, INVALID_REQUEST, UNRECOGNIZED_RESPONSE};

const LOCALHOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

#[test]
fn test_render_every_kind() {
    let cases = [
        (WeatherKind::Temperature, 23.4, "Temperatura = 23.4°C"),
        (WeatherKind::Humidity, 55.0, "Umidità = 55.0%"),
        (WeatherKind::Wind, 12.3, "Vento = 12.3 km/h"),
        (WeatherKind::Pressure, 1013.2, "Pressione = 1013.2 hPa"),
    ];

    for (kind, value, expected) in cases {
        let report = render(&WeatherResponse::success(kind, value), "Roma", LOCALHOST);
        assert_eq!(
            report,
            Report::Weather(format!(
                "Ricevuto risultato dal server ip 127.0.0.1. Roma: {}",
                expected
            ))
        );
    }
}

#[test]
fn test_render_echoes_city_as_typed() {
    let report = render(
        &WeatherResponse::success(WeatherKind::Wind, 5.0),
        "mIlAnO",
        LOCALHOST,
    );
    assert!(report.to_string().contains("mIlAnO: Vento"));
}

#[test]
fn test_render_city_not_found() {
    let report = render(&WeatherResponse::city_not_found(), "Atlantis", LOCALHOST);
    assert_eq!(
        report,
        Report::Failure {
            prefix: "Ricevuto risultato dal server ip 127.0.0.1. ".to_string(),
            reason: CITY_NOT_AVAILABLE,
        }
    );
    assert_eq!(
        report.to_string(),
        "Ricevuto risultato dal server ip 127.0.0.1. Città non disponibile"
    );
}

#[test]
fn test_render_invalid_request() {
    let report = render(&WeatherResponse::invalid_request(), "", LOCALHOST);
    assert!(matches!(report, Report::Failure { reason, .. } if reason == INVALID_REQUEST));
}

#[test]
fn test_render_unknown_status() {
    let response = WeatherResponse {
        status: 9,
        kind: b't',
        value: 1.0,
    };
    let report = render(&response, "Roma", LOCALHOST);
    assert!(matches!(report, Report::Failure { reason, .. } if reason == UNRECOGNIZED_RESPONSE));
}

#[test]
fn test_render_success_with_unknown_kind() {
    let response = WeatherResponse {
        status: 0,
        kind: b'z',
        value: 1.0,
    };
    let report = render(&response, "Roma", LOCALHOST);
    assert!(matches!(report, Report::Failure { reason, .. } if reason == UNRECOGNIZED_RESPONSE));
}
