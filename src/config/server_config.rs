//! 서버 실행 환경 설정
//!
//! 실행 환경 구분과 HTTP 서버 바인딩 설정을 환경 변수에서 로드합니다.

use std::env;
use log::error;

/// 실행 환경 구분
///
/// `ENVIRONMENT` 환경변수(없으면 `NODE_ENV`)로 현재 환경을 판별합니다.
/// 알 수 없는 값은 안전하게 Production으로 간주합니다.
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        match env::var("ENVIRONMENT")
            .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string()))
            .to_lowercase()
            .as_str()
        {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// HTTP 서버 바인딩 설정
///
/// # 환경 변수
///
/// * `SERVER_HOST` - 바인딩 주소 (기본값: "127.0.0.1")
/// * `SERVER_PORT` - 포트 (기본값: 8080)
/// * `SERVER_WORKERS` - 워커 스레드 수 (기본값: 4)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    /// 환경 변수에서 서버 설정을 로드합니다.
    ///
    /// 파싱에 실패한 값은 에러 로그를 남기고 기본값으로 대체합니다.
    pub fn from_env() -> Self {
        let host = env::var("SERVER_HOST")
            .unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .unwrap_or_else(|e| {
                error!("SERVER_PORT 파싱 실패: {}. 기본값 8080 사용", e);
                8080
            });

        let workers = env::var("SERVER_WORKERS")
            .unwrap_or_else(|_| "4".to_string())
            .parse::<usize>()
            .unwrap_or_else(|e| {
                error!("SERVER_WORKERS 파싱 실패: {}. 기본값 4 사용", e);
                4
            });

        Self { host, port, workers }
    }

    /// `HttpServer::bind`에 전달할 주소 문자열
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("dev"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("staging"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);

        // 대소문자 무관 테스트
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("Staging"), Environment::Staging);

        // 알 수 없는 값은 Production으로 폴백
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
        assert_eq!(Environment::from_str(""), Environment::Production);
    }

    #[test]
    fn test_bind_address_format() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 9000,
            workers: 2,
        };

        assert_eq!(config.bind_address(), "0.0.0.0:9000");
    }
}
